//! Bavarian public-holiday generation.
//!
//! Pure functions of the year; the planner consumes the result read-only for
//! calendar marking and the holiday list.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

/// A public holiday with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub description: String,
    pub region: String,
}

impl Holiday {
    fn new(name: &str, description: &str, region: &str) -> Self {
        Holiday {
            name: name.to_string(),
            description: description.to_string(),
            region: region.to_string(),
        }
    }
}

/// Easter Sunday for `year`, via the anonymous Gregorian computus.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus lands in March or April")
}

/// All Bavarian public holidays of `year`, keyed by date.
pub fn bavarian_holidays(year: i32) -> BTreeMap<NaiveDate, Holiday> {
    let fixed = |m: u32, d: u32| {
        NaiveDate::from_ymd_opt(year, m, d).expect("fixed holiday dates are valid")
    };
    let easter = easter_sunday(year);

    let entries = [
        (fixed(1, 1), "Neujahr", "bundesweit", "Deutschland"),
        (
            fixed(1, 6),
            "Heilige Drei Könige",
            "in Bayern, Baden-Württemberg, Sachsen-Anhalt",
            "Bayern, Baden-Württemberg, Sachsen-Anhalt",
        ),
        (easter - Duration::days(2), "Karfreitag", "bundesweit", "Deutschland"),
        (easter + Duration::days(1), "Ostermontag", "bundesweit", "Deutschland"),
        (fixed(5, 1), "Tag der Arbeit", "bundesweit", "Deutschland"),
        (
            easter + Duration::days(39),
            "Christi Himmelfahrt",
            "bundesweit",
            "Deutschland",
        ),
        (
            easter + Duration::days(50),
            "Pfingstmontag",
            "bundesweit",
            "Deutschland",
        ),
        (
            easter + Duration::days(60),
            "Fronleichnam",
            "in ausgewählten Bundesländern",
            "Bayern, Baden-Württemberg, Hessen, Nordrhein-Westfalen, Rheinland-Pfalz, Saarland",
        ),
        (
            fixed(8, 15),
            "Mariä Himmelfahrt",
            "regional (vor allem in katholischen Gemeinden)",
            "Bayern (regional)",
        ),
        (
            fixed(10, 3),
            "Tag der Deutschen Einheit",
            "bundesweit",
            "Deutschland",
        ),
        (
            fixed(11, 1),
            "Allerheiligen",
            "in ausgewählten Bundesländern",
            "Bayern, Baden-Württemberg, Nordrhein-Westfalen, Rheinland-Pfalz, Saarland",
        ),
        (fixed(12, 25), "1. Weihnachtstag", "bundesweit", "Deutschland"),
        (fixed(12, 26), "2. Weihnachtstag", "bundesweit", "Deutschland"),
    ];

    entries
        .into_iter()
        .map(|(d, name, description, region)| (d, Holiday::new(name, description, region)))
        .collect()
}

/// The optional Augsburg peace festival (Aug 8), enabled separately.
pub fn hohes_friedensfest(year: i32) -> (NaiveDate, Holiday) {
    (
        NaiveDate::from_ymd_opt(year, 8, 8).expect("Aug 8 is always valid"),
        Holiday::new("Hohes Friedensfest", "optional, regional", "regional"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
    }

    #[test]
    fn test_thirteen_holidays_per_year() {
        assert_eq!(bavarian_holidays(2024).len(), 13);
    }

    #[test]
    fn test_moveable_feasts_2024() {
        let holidays = bavarian_holidays(2024);
        assert_eq!(holidays[&date(2024, 3, 29)].name, "Karfreitag");
        assert_eq!(holidays[&date(2024, 4, 1)].name, "Ostermontag");
        assert_eq!(holidays[&date(2024, 5, 9)].name, "Christi Himmelfahrt");
        assert_eq!(holidays[&date(2024, 5, 20)].name, "Pfingstmontag");
        assert_eq!(holidays[&date(2024, 5, 30)].name, "Fronleichnam");
    }

    #[test]
    fn test_fixed_holidays() {
        let holidays = bavarian_holidays(2025);
        assert_eq!(holidays[&date(2025, 1, 1)].name, "Neujahr");
        assert_eq!(holidays[&date(2025, 10, 3)].name, "Tag der Deutschen Einheit");
        assert_eq!(holidays[&date(2025, 12, 26)].name, "2. Weihnachtstag");
        assert_eq!(holidays[&date(2025, 1, 6)].region, "Bayern, Baden-Württemberg, Sachsen-Anhalt");
    }

    #[test]
    fn test_friedensfest_is_not_in_the_default_set() {
        let (d, holiday) = hohes_friedensfest(2024);
        assert_eq!(d, date(2024, 8, 8));
        assert_eq!(holiday.name, "Hohes Friedensfest");
        assert!(!bavarian_holidays(2024).contains_key(&d));
    }
}
