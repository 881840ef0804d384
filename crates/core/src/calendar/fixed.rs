//! Fixed-date holidays and the bridge days they generate.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::normalize::normalize;
use super::types::{FixedHolidayDefinition, Holiday, HolidayOrigin};
use crate::i18n::LocalizedText;

/// Type label shared by every Angolan national holiday.
pub const NATIONAL_HOLIDAY: LocalizedText =
    LocalizedText::new("Feriado Nacional", "National Holiday");

const BRIDGE_MONDAY: LocalizedText =
    LocalizedText::new("Ponte (segunda-feira)", "Bridge Holiday (Monday)");
const BRIDGE_FRIDAY: LocalizedText =
    LocalizedText::new("Ponte (sexta-feira)", "Bridge Holiday (Friday)");
const BRIDGE_DESCRIPTION: LocalizedText = LocalizedText::new(
    "Dia de descanso associado ao feriado.",
    "Rest day associated with the holiday.",
);

/// National holidays that fall on the same month/day every year.
pub static FIXED_HOLIDAYS: [FixedHolidayDefinition; 11] = [
    FixedHolidayDefinition {
        month: Month::January,
        day: 1,
        name: LocalizedText::new("Ano Novo", "New Year"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Celebra o início do novo ano.",
            "Celebrates the beginning of the new year.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::February,
        day: 4,
        name: LocalizedText::new("Dia do Início da Luta Armada", "Armed Struggle Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Marca o início da luta armada de libertação nacional.",
            "Marks the beginning of the armed struggle for national liberation.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::March,
        day: 4,
        name: LocalizedText::new("Dia da Mulher", "Women's Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Celebra as conquistas sociais, econômicas e políticas das mulheres.",
            "Celebrates women's social, economic, and political achievements.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::March,
        day: 8,
        name: LocalizedText::new("Dia Internacional da Mulher", "International Women's Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Reconhece o papel das mulheres na sociedade.",
            "Recognizes the role of women in society.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::March,
        day: 23,
        name: LocalizedText::new(
            "Dia da Libertação da África Austral",
            "Southern Africa Liberation Day",
        ),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Comemora a libertação dos povos da África Austral.",
            "Commemorates the liberation of Southern African peoples.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::April,
        day: 4,
        name: LocalizedText::new("Dia da Paz", "Peace Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Celebra a paz e reconciliação nacional.",
            "Celebrates peace and national reconciliation.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::May,
        day: 1,
        name: LocalizedText::new("Dia do Trabalhador", "Labour Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Homenageia os trabalhadores e suas conquistas.",
            "Honours workers and their achievements.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::September,
        day: 17,
        name: LocalizedText::new("Dia do Herói Nacional", "National Hero Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Homenageia o herói nacional Agostinho Neto.",
            "Honours national hero Agostinho Neto.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::November,
        day: 2,
        name: LocalizedText::new("Dia dos Finados", "All Souls' Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Dia de homenagem aos mortos.",
            "Day of remembrance for the dead.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::November,
        day: 11,
        name: LocalizedText::new("Dia da Independência", "Independence Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Celebra a independência nacional de Angola.",
            "Celebrates Angola's national independence.",
        ),
    },
    FixedHolidayDefinition {
        month: Month::December,
        day: 25,
        name: LocalizedText::new("Natal", "Christmas Day"),
        holiday_type: NATIONAL_HOLIDAY,
        description: LocalizedText::new(
            "Celebra o nascimento de Jesus Cristo.",
            "Celebrates the birth of Jesus Christ.",
        ),
    },
];

/// Returns the bridge day for a holiday on `date`, if it earns one.
///
/// Tuesday holidays bridge to the preceding Monday and Thursday holidays to
/// the following Friday. Bridges never cross into another year.
pub fn bridge_day(date: NaiveDate) -> Option<(NaiveDate, LocalizedText)> {
    let (bridge, name) = match date.weekday() {
        Weekday::Tue => (date.pred_opt()?, BRIDGE_MONDAY),
        Weekday::Thu => (date.succ_opt()?, BRIDGE_FRIDAY),
        _ => return None,
    };

    (bridge.year() == date.year()).then_some((bridge, name))
}

/// Generates the fixed holidays of `year` from `table`, each followed by its
/// bridge day when it has one.
pub fn fixed_holidays(year: i32, table: &[FixedHolidayDefinition]) -> Vec<Holiday> {
    let mut holidays = Vec::with_capacity(table.len() * 2);

    for definition in table {
        let date = definition.date_in(year);

        holidays.push(Holiday {
            date: normalize(date),
            name: definition.name,
            holiday_type: definition.holiday_type,
            description: definition.description,
            origin: HolidayOrigin::Fixed,
        });

        if let Some((bridge, name)) = bridge_day(date) {
            holidays.push(Holiday {
                date: normalize(bridge),
                name,
                holiday_type: definition.holiday_type,
                description: BRIDGE_DESCRIPTION,
                origin: HolidayOrigin::Bridge,
            });
        }
    }

    holidays
}
