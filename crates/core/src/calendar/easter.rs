use chrono::NaiveDate;

/// Computes Easter Sunday for `year` in the proleptic Gregorian calendar.
///
/// Uses the anonymous Gregorian (Meeus/Jones/Butcher) algorithm. Valid for
/// every year from 1583 onwards; earlier years still produce a date but it is
/// not historically meaningful.
///
/// # Panics
/// Panics if `year` is outside the range supported by `chrono::NaiveDate`.
pub fn calculate_easter(year: i32) -> NaiveDate {
    let century = year.div_euclid(100);
    // Position in the 19-year Metonic cycle
    let golden = year.rem_euclid(19);

    // Epact: age of the moon at the start of the year
    let h = (century - century.div_euclid(4) - (8 * century + 13).div_euclid(25)
        + 19 * golden
        + 15)
        .rem_euclid(30);

    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - golden) / 11));

    // Weekday of the Paschal full moon
    let j = (year + year.div_euclid(4) + i + 2 - century + century.div_euclid(4)).rem_euclid(7);

    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter month/day is always a valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_2025() {
        assert_eq!(calculate_easter(2025), date(2025, 4, 20));
    }

    #[test]
    fn test_easter_2024() {
        assert_eq!(calculate_easter(2024), date(2024, 3, 31));
    }

    #[test]
    fn test_known_easter_dates() {
        let known = [
            (1975, 3, 30),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2038, 4, 25),
            (2100, 3, 28),
        ];
        for (y, m, d) in known {
            assert_eq!(calculate_easter(y), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn test_easter_is_always_sunday_between_march_22_and_april_25() {
        use chrono::{Datelike, Weekday};

        for year in 1583..=4099 {
            let easter = calculate_easter(year);
            assert_eq!(easter.weekday(), Weekday::Sun, "Easter {year}");
            assert!(easter >= date(year, 3, 22) && easter <= date(year, 4, 25));
        }
    }
}
