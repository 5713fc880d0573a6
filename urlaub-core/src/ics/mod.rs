//! iCalendar decoding and generation.
//!
//! The subset of RFC 5545 this planner speaks: VEVENT brackets inside a
//! VCALENDAR envelope, date-valued DTSTART/DTEND, SUMMARY, foldable
//! DESCRIPTION, UID and DTSTAMP.

mod generate;
mod parse;

pub use generate::{EXPORT_SUMMARY, encode_selection};
pub use parse::{DecodeMode, decode_events, decode_events_with};
