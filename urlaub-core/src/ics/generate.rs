//! ICS generation for the selection export.

use chrono::{Duration, NaiveDate, Utc};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::error::{UrlaubError, UrlaubResult};

/// Fixed SUMMARY label for exported vacation days.
pub const EXPORT_SUMMARY: &str = "Urlaub";

/// Generate .ics content for a sorted set of distinct selected days.
///
/// One VEVENT per day, with an exclusive DTEND of the following day; the
/// decoder reproduces exactly the input dates from this output.
pub fn encode_selection(dates: &[NaiveDate]) -> UrlaubResult<String> {
    if dates.is_empty() {
        return Err(UrlaubError::EmptyResult("no selected days to export".into()));
    }

    // DTSTAMP - required by RFC 5545; one timestamp for the whole export
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    let mut cal = Calendar::new();
    for &date in dates {
        let mut event = icalendar::Event::new();
        event.uid(&format!("urlaub-{}@urlaub", date.format("%Y%m%d")));
        event.summary(EXPORT_SUMMARY);
        event.add_property("DTSTAMP", &dtstamp);
        add_date_property(&mut event, "DTSTART", date);
        add_date_property(&mut event, "DTEND", date + Duration::days(1));
        cal.push(event.done());
    }
    let cal = cal.done();

    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Add a date-valued property with the VALUE=DATE parameter.
fn add_date_property(event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with URLAUB
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:URLAUB\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
