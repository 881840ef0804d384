use super::fixed::{fixed_holidays, FIXED_HOLIDAYS, NATIONAL_HOLIDAY};
use super::movable::movable_dates;
use super::normalize::normalize;
use super::types::{Holiday, HolidayOrigin};
use crate::i18n::LocalizedText;

/// Computes every holiday of `year`, sorted ascending by date.
///
/// Contains each fixed holiday once, its bridge day when it has one, and the
/// three Easter-dependent holidays. Holidays sharing a date keep their
/// generation order (fixed before movable).
///
/// # Panics
/// Panics if `year` is outside the range supported by `chrono::NaiveDate`.
pub fn compute_year_calendar(year: i32) -> Vec<Holiday> {
    let mut holidays = fixed_holidays(year, &FIXED_HOLIDAYS);
    let dates = movable_dates(year);

    let movable = [
        (
            dates.carnival,
            LocalizedText::new("Carnaval", "Carnival"),
            LocalizedText::new(
                "Celebração popular com desfiles e festas.",
                "Popular celebration with parades and festivities.",
            ),
        ),
        (
            dates.good_friday,
            LocalizedText::new("Sexta-feira Santa", "Good Friday"),
            LocalizedText::new(
                "Comemora a crucificação de Jesus Cristo.",
                "Commemorates the crucifixion of Jesus Christ.",
            ),
        ),
        (
            dates.easter,
            LocalizedText::new("Páscoa", "Easter"),
            LocalizedText::new(
                "Celebra a ressurreição de Jesus Cristo.",
                "Celebrates the resurrection of Jesus Christ.",
            ),
        ),
    ];

    holidays.extend(movable.into_iter().map(|(date, name, description)| Holiday {
        date: normalize(date),
        name,
        holiday_type: NATIONAL_HOLIDAY,
        description,
        origin: HolidayOrigin::Movable,
    }));

    // `sort_by_key` is stable, so same-day holidays keep insertion order.
    holidays.sort_by_key(|holiday| holiday.date);
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count(holidays: &[Holiday], origin: HolidayOrigin) -> usize {
        holidays.iter().filter(|h| h.origin == origin).count()
    }

    #[test]
    fn test_calendar_2025() {
        let holidays = compute_year_calendar(2025);

        assert_eq!(holidays.len(), 19);
        assert_eq!(count(&holidays, HolidayOrigin::Fixed), 11);
        assert_eq!(count(&holidays, HolidayOrigin::Bridge), 5);
        assert_eq!(count(&holidays, HolidayOrigin::Movable), 3);
        assert_eq!(holidays.first().unwrap().day(), date(2025, 1, 1));
        assert_eq!(holidays.last().unwrap().day(), date(2025, 12, 26));
    }

    #[test]
    fn test_movable_holidays_2025() {
        let movable: Vec<(NaiveDate, &str)> = compute_year_calendar(2025)
            .iter()
            .filter(|h| h.is_movable())
            .map(|h| (h.day(), h.name.en))
            .collect();

        assert_eq!(
            movable,
            vec![
                (date(2025, 3, 4), "Carnival"),
                (date(2025, 4, 18), "Good Friday"),
                (date(2025, 4, 20), "Easter"),
            ]
        );
    }

    #[test]
    fn test_same_day_holidays_keep_fixed_first() {
        // Carnival 2025 coincides with Women's Day on March 4.
        let holidays = compute_year_calendar(2025);
        let march_4: Vec<&str> = holidays
            .iter()
            .filter(|h| h.day() == date(2025, 3, 4))
            .map(|h| h.name.en)
            .collect();

        assert_eq!(march_4, vec!["Women's Day", "Carnival"]);
    }

    #[test]
    fn test_counts_and_order_hold_for_every_year() {
        for year in 1975..=2200 {
            let holidays = compute_year_calendar(year);

            assert_eq!(count(&holidays, HolidayOrigin::Fixed), 11, "{year}");
            assert!(count(&holidays, HolidayOrigin::Bridge) <= 11, "{year}");
            assert_eq!(count(&holidays, HolidayOrigin::Movable), 3, "{year}");
            assert!(
                holidays.windows(2).all(|pair| pair[0].date <= pair[1].date),
                "{year} is not sorted"
            );
        }
    }

    #[test]
    fn test_every_instant_is_one_am_utc() {
        for year in [1975, 2000, 2024, 2025, 2038] {
            for holiday in compute_year_calendar(year) {
                let instant = holiday.date.as_datetime();
                assert_eq!(instant.hour(), 1);
                assert_eq!(instant.minute(), 0);
                assert_eq!(instant.second(), 0);
                assert_eq!(instant.nanosecond(), 0);
                assert_eq!(instant.year(), year);
                assert!(holiday.date.to_string().ends_with("T01:00:00.000Z"));
            }
        }
    }
}
