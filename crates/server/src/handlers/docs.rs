//! Self-describing API documentation served at `/`.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use angola_holidays_core::i18n::Language;

use crate::{handlers::health::SERVICE_NAME, rate_limit::describe_window, state::AppState};

fn lang_param() -> Value {
    let options: Vec<&str> = Language::ALL.iter().map(|lang| lang.code()).collect();
    json!({
        "type": "string",
        "required": false,
        "default": Language::default().code(),
        "options": options,
        "example": "pt",
        "description": "Idioma da resposta | Response language",
    })
}

fn date_param(example: &str, description: &str) -> Value {
    json!({
        "type": "string",
        "format": "YYYY-MM-DD",
        "required": true,
        "example": example,
        "description": description,
    })
}

/// GET / - Endpoints, parameters, examples and the rate-limit policy.
pub async fn api_docs(State(state): State<AppState>) -> Json<Value> {
    let limiter = &state.rate_limiter;

    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API para consultar feriados nacionais de Angola | API to query Angola's national holidays",
        "documentation": "https://github.com/nangazaki/angola-holidays#readme",
        "source": "https://github.com/nangazaki/angola-holidays",
        "license": "MIT",
        "author": "Nangazaki",
        "endpoints": [
            {
                "path": "/health",
                "method": "GET",
                "description": "Health check endpoint",
            },
            {
                "path": "/holidays",
                "method": "GET",
                "description": "Lista os feriados de um determinado ano | List holidays for a specific year",
                "queryParams": {
                    "year": {
                        "type": "number",
                        "required": false,
                        "default": "current year",
                        "min": crate::models::MIN_YEAR,
                        "example": 2025,
                        "description": "Ano desejado | Desired year",
                    },
                    "lang": lang_param(),
                },
                "examples": {
                    "basic": "/holidays",
                    "withYear": "/holidays?year=2025",
                    "withLang": "/holidays?year=2025&lang=en",
                },
            },
            {
                "path": "/holidays-by-range",
                "method": "GET",
                "description": "Lista os feriados entre duas datas | List holidays between two dates",
                "queryParams": {
                    "startDate": date_param("2025-01-01", "Data inicial | Start date"),
                    "endDate": date_param("2025-03-31", "Data final | End date"),
                    "lang": lang_param(),
                },
                "examples": {
                    "basic": "/holidays-by-range?startDate=2025-01-01&endDate=2025-03-31",
                    "withLang": "/holidays-by-range?startDate=2025-01-01&endDate=2025-03-31&lang=en",
                },
            },
            {
                "path": "/upcoming",
                "method": "GET",
                "description": "Lista os próximos feriados | List upcoming holidays",
                "queryParams": {
                    "days": {
                        "type": "number",
                        "required": false,
                        "default": crate::models::DEFAULT_UPCOMING_DAYS,
                        "min": 1,
                        "max": crate::models::MAX_UPCOMING_DAYS,
                        "example": 30,
                        "description": "Número de dias a partir de hoje | Number of days from today",
                    },
                    "lang": lang_param(),
                },
                "examples": {
                    "basic": "/upcoming",
                    "withDays": "/upcoming?days=60",
                    "withLang": "/upcoming?days=30&lang=en",
                },
            },
            {
                "path": "/holidays/check",
                "method": "GET",
                "description": "Verifica se uma data é feriado | Check if a date is a holiday",
                "queryParams": {
                    "date": date_param("2025-04-04", "Data no formato ISO | Date in ISO format"),
                    "lang": lang_param(),
                },
                "examples": {
                    "basic": "/holidays/check?date=2025-04-04",
                    "withLang": "/holidays/check?date=2025-04-04&lang=en",
                },
            },
        ],
        "rateLimit": {
            "window": describe_window(limiter.window()),
            "maxRequests": limiter.max_requests(),
            "headers": [
                "RateLimit-Policy",
                "RateLimit-Limit",
                "RateLimit-Remaining",
                "RateLimit-Reset",
            ],
        },
    }))
}
