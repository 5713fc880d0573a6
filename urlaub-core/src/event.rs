//! Event records decoded from iCalendar input.

use chrono::NaiveDate;

use crate::date::add_days;
use crate::range::days_in_range;

/// One decoded VEVENT. `end` is exclusive, per the iCalendar convention for
/// date-valued events; a single-day event has `end == start + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub summary: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub description: Option<String>,
}

impl EventRecord {
    /// Last covered day, for display. This is the only place the exclusive
    /// end is converted to an inclusive one.
    pub fn last_day(&self) -> NaiveDate {
        self.start.max(add_days(self.end, -1))
    }

    /// Every day the event covers, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        days_in_range(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day_is_inclusive_end() {
        let record = EventRecord {
            summary: None,
            start: date(2024, 8, 1),
            end: date(2024, 8, 15),
            description: None,
        };
        assert_eq!(record.last_day(), date(2024, 8, 14));
    }

    #[test]
    fn test_last_day_never_precedes_start() {
        let record = EventRecord {
            summary: None,
            start: date(2024, 8, 1),
            end: date(2024, 8, 1),
            description: None,
        };
        assert_eq!(record.last_day(), date(2024, 8, 1));
    }
}
