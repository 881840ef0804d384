//! CLI command definitions.

use angola_holidays_core::i18n::Language;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the Angola Holidays API.
#[derive(Debug, Parser)]
#[command(name = "angola-holidays-client")]
#[command(about = "CLI client for the Angola Holidays API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ANGOLA_HOLIDAYS_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Response language (pt or en).
    #[arg(long, default_value = "pt")]
    pub lang: Language,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every holiday of a year.
    List {
        /// Year to list (defaults to the current year).
        #[arg(long)]
        year: Option<i32>,
    },
    /// List holidays between two dates, both included.
    Range {
        /// First day (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD).
        #[arg(long)]
        end: NaiveDate,
    },
    /// Check whether a date is a holiday.
    Check {
        /// Day to check (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
    },
    /// List holidays in the next few days.
    Upcoming {
        /// Number of days to look ahead (1-365, server default 30).
        #[arg(long)]
        days: Option<u32>,
    },
    /// Server health check.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_range_command() {
        let cli = Cli::try_parse_from([
            "angola-holidays-client",
            "--lang",
            "en",
            "range",
            "--start",
            "2025-03-01",
            "--end",
            "2025-03-31",
        ])
        .unwrap();

        assert_eq!(cli.lang, Language::En);
        match cli.command {
            Commands::Range { start, end } => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
                assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["angola-holidays-client", "list"]).unwrap();

        assert_eq!(cli.lang, Language::Pt);
        assert!(matches!(cli.format, OutputFormat::Pretty));
        assert!(matches!(cli.command, Commands::List { year: None }));
    }

    #[test]
    fn test_rejects_unknown_language_and_bad_dates() {
        assert!(Cli::try_parse_from(["angola-holidays-client", "--lang", "fr", "list"]).is_err());
        assert!(
            Cli::try_parse_from(["angola-holidays-client", "check", "--date", "2025-02-30"])
                .is_err()
        );
    }
}
