//! Languages, bilingual text and the localized message catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the API can answer in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Portuguese (default).
    #[default]
    Pt,
    /// English.
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    /// Returns the language code used on the wire.
    pub const fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Parses a language code, returning `None` for anything unsupported.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Resolves an optional request code, falling back to Portuguese.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// A piece of text available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub pt: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(pt: &'static str, en: &'static str) -> Self {
        Self { pt, en }
    }

    /// Returns the text for `lang`.
    pub const fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Pt => self.pt,
            Language::En => self.en,
        }
    }
}

/// User-facing messages returned in error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    InvalidDate,
    InvalidDays,
    InvalidParams,
    InvalidRange,
    NotFound,
    TooManyRequests,
    RequestTimeout,
    InternalError,
}

impl Message {
    const fn catalog(self) -> LocalizedText {
        match self {
            Message::InvalidDate => LocalizedText::new(
                "Data inválida. Use o formato YYYY-MM-DD",
                "Invalid date. Use YYYY-MM-DD format",
            ),
            Message::InvalidDays => LocalizedText::new(
                "Número de dias inválido. Use um valor entre 1 e 365",
                "Invalid number of days. Use a value between 1 and 365",
            ),
            Message::InvalidParams => LocalizedText::new(
                "Parâmetros de consulta inválidos",
                "Invalid query parameters",
            ),
            Message::InvalidRange => LocalizedText::new(
                "A data inicial deve ser anterior à data final",
                "Start date must be before or equal to end date",
            ),
            Message::NotFound => {
                LocalizedText::new("Recurso não encontrado", "Resource not found")
            }
            Message::TooManyRequests => LocalizedText::new(
                "Muitas requisições, tente novamente em alguns minutos",
                "Too many requests, please try again in a few minutes",
            ),
            Message::RequestTimeout => LocalizedText::new(
                "Tempo limite da requisição excedido",
                "Request timed out",
            ),
            Message::InternalError => {
                LocalizedText::new("Erro interno do servidor", "Internal server error")
            }
        }
    }

    /// Returns the message text in `lang`.
    pub const fn text(self, lang: Language) -> &'static str {
        self.catalog().get(lang)
    }
}
