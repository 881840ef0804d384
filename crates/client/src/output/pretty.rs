//! Pretty output formatting.

use angola_holidays_core::{
    calendar::{HolidayCheck, LocalizedHoliday, RangeHolidays, UpcomingHolidays, YearHolidays},
    i18n::Language,
};

use crate::client::health::ServiceHealth;

/// Format a holiday as one line plus its description.
pub fn format_holiday(holiday: &LocalizedHoliday) -> String {
    let marker = if holiday.is_movable == Some(true) {
        " *"
    } else {
        ""
    };
    format!(
        "{}  {}{}\n  {}: {}",
        holiday.date.date_naive(),
        holiday.name,
        marker,
        holiday.holiday_type,
        holiday.description
    )
}

fn format_list(title: &str, holidays: &[LocalizedHoliday], empty: &str) -> String {
    if holidays.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{title} ({})\n", holidays.len());
    output.push_str(&"-".repeat(40));
    for holiday in holidays {
        output.push_str(&format!("\n{}", format_holiday(holiday)));
    }
    if holidays.iter().any(|h| h.is_movable == Some(true)) {
        output.push_str("\n\n* movable");
    }
    output
}

/// Format the holidays of a year.
pub fn format_year(payload: &YearHolidays) -> String {
    format_list(
        &format!("HOLIDAYS {}", payload.year),
        &payload.holidays,
        "No holidays found.",
    )
}

/// Format the holidays of a date range.
pub fn format_range(payload: &RangeHolidays) -> String {
    format_list(
        &format!("HOLIDAYS {} .. {}", payload.start_date, payload.end_date),
        &payload.holidays,
        "No holidays in range.",
    )
}

/// Format upcoming holidays.
pub fn format_upcoming(payload: &UpcomingHolidays) -> String {
    format_list(
        &format!(
            "UPCOMING {} DAYS FROM {}",
            payload.days, payload.from_date
        ),
        &payload.upcoming,
        "No upcoming holidays.",
    )
}

/// Format a date check in the requested language.
pub fn format_check(check: &HolidayCheck, lang: Language) -> String {
    let date = check.date.date_naive();
    match (lang, check.is_holiday) {
        (Language::Pt, true) => format!("{date} é feriado."),
        (Language::Pt, false) => format!("{date} não é feriado."),
        (Language::En, true) => format!("{date} is a holiday."),
        (Language::En, false) => format!("{date} is not a holiday."),
    }
}

/// Format service health.
pub fn format_health(health: &ServiceHealth) -> String {
    format!(
        "{} v{} [{}]\n  Status: {}\n  Environment: {}\n  Uptime: {:.0}s",
        health.service,
        health.version,
        health.timestamp,
        health.status,
        health.environment,
        health.uptime
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use angola_holidays_core::calendar::{compute_year_calendar, localize, normalize};
    use chrono::NaiveDate;

    fn holidays_2025(lang: Language) -> Vec<LocalizedHoliday> {
        localize(&compute_year_calendar(2025), lang)
    }

    #[test]
    fn test_format_holiday_marks_movable() {
        let holidays = holidays_2025(Language::En);
        let easter = holidays.iter().find(|h| h.name == "Easter").unwrap();

        let text = format_holiday(easter);

        assert!(text.starts_with("2025-04-20  Easter *"));
        assert!(text.contains("National Holiday: "));
    }

    #[test]
    fn test_format_year() {
        let payload = YearHolidays::new(2025, holidays_2025(Language::Pt));

        let text = format_year(&payload);

        assert!(text.starts_with("HOLIDAYS 2025 (19)"));
        assert!(text.contains("2025-01-01  Ano Novo\n"));
        assert!(text.ends_with("* movable"));
    }

    #[test]
    fn test_empty_lists() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let payload = UpcomingHolidays::new(5, from, Vec::new());
        assert_eq!(format_upcoming(&payload), "No upcoming holidays.");

        let payload = RangeHolidays::new(from, from, Vec::new());
        assert_eq!(format_range(&payload), "No holidays in range.");
    }

    #[test]
    fn test_format_check() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        let check = HolidayCheck {
            date: normalize(date),
            is_holiday: true,
        };

        assert_eq!(format_check(&check, Language::En), "2025-04-20 is a holiday.");
        assert_eq!(format_check(&check, Language::Pt), "2025-04-20 é feriado.");
    }

    #[test]
    fn test_format_health() {
        let health = ServiceHealth {
            status: "healthy".to_string(),
            service: "Angola Holidays API".to_string(),
            version: "0.1.0".to_string(),
            timestamp: "2025-04-20T10:00:00.000Z".to_string(),
            uptime: 12.6,
            environment: "production".to_string(),
        };

        let text = format_health(&health);

        assert!(text.starts_with("Angola Holidays API v0.1.0"));
        assert!(text.contains("Uptime: 13s"));
    }
}
