//! Half-open date-range coverage.
//!
//! The single shared routine for expanding an imported event into discrete
//! selectable days and for deciding which calendar cells an event covers.
//! Everything internal uses the exclusive-end convention; see
//! [`crate::event::EventRecord::last_day`] for the display-side conversion.

use chrono::NaiveDate;

/// Every day `d` with `start <= d < end`, ascending. Empty when `end <= start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day < end).collect()
}
