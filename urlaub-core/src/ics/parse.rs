//! Tolerant line-oriented decoder for iCalendar event data.
//!
//! The school-holiday feeds this planner consumes are produced by a zoo of
//! generators, so the decoder never fails as a whole: malformed fields are
//! skipped, records without a usable start date are dropped, and unmatched
//! `BEGIN`/`END` brackets simply reset the scan state.

use chrono::NaiveDate;

use crate::date::{add_days, parse_compact_date};
use crate::event::EventRecord;

/// How `DTSTART`/`DTEND` property lines are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Only date-valued properties in the exact `DTSTART;VALUE=DATE:` form.
    Strict,
    /// Any `DTSTART*`/`DTEND*` property; the value after the final colon is
    /// decoded. Accepts everything the strict form accepts, plus properties
    /// with extra parameters such as `TZID`.
    #[default]
    Permissive,
}

/// Decode with the default permissive property matching.
pub fn decode_events(input: &str) -> Vec<EventRecord> {
    decode_events_with(input, DecodeMode::Permissive)
}

/// Decode raw iCalendar text into event records, in file order.
pub fn decode_events_with(input: &str, mode: DecodeMode) -> Vec<EventRecord> {
    let mut events = Vec::new();
    let mut draft: Option<Draft> = None;

    for line in unfold(input) {
        let joined = line.joined();
        if joined.starts_with("BEGIN:VEVENT") {
            // A BEGIN inside an open event discards the half-read record.
            draft = Some(Draft::default());
        } else if joined.starts_with("END:VEVENT") {
            if let Some(finished) = draft.take() {
                if let Some(record) = finished.finish() {
                    events.push(record);
                }
            }
        } else if let Some(open) = draft.as_mut() {
            open.take_field(&line, &joined, mode);
        }
    }

    events
}

/// One unfolded line, keeping the physical segments so the description can
/// be re-joined with the legacy single-space-per-source-line rule.
struct LogicalLine<'a> {
    parts: Vec<&'a str>,
}

impl LogicalLine<'_> {
    fn joined(&self) -> String {
        self.parts.concat()
    }
}

/// Normalize line endings and merge continuation lines (one leading space or
/// tab) into the preceding line, stripping exactly that one character.
fn unfold(input: &str) -> Vec<LogicalLine<'_>> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for raw in input.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        match lines.last_mut() {
            Some(previous) if line.starts_with(' ') || line.starts_with('\t') => {
                previous.parts.push(&line[1..]);
            }
            _ => lines.push(LogicalLine { parts: vec![line] }),
        }
    }

    lines
}

/// Fields collected between a BEGIN/END bracket.
#[derive(Default)]
struct Draft {
    summary: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    description: Vec<String>,
}

impl Draft {
    fn take_field(&mut self, line: &LogicalLine<'_>, joined: &str, mode: DecodeMode) {
        if let Some(value) = match_date_field(joined, "DTSTART", mode) {
            // An unparseable value leaves the field unset; the record is
            // dropped at END:VEVENT if no start was collected.
            if let Ok(date) = parse_compact_date(value) {
                self.start = Some(date);
            }
        } else if let Some(value) = match_date_field(joined, "DTEND", mode) {
            if let Ok(date) = parse_compact_date(value) {
                self.end = Some(date);
            }
        } else if let Some(rest) = joined.strip_prefix("SUMMARY:") {
            self.summary = Some(rest.trim().to_string());
        } else if joined.starts_with("DESCRIPTION:") {
            match line.parts[0].strip_prefix("DESCRIPTION:") {
                Some(first) => {
                    self.description.push(first.trim().to_string());
                    for part in &line.parts[1..] {
                        self.description.push(part.trim().to_string());
                    }
                }
                // Property name itself was folded; fall back to the joined
                // value as a single segment.
                None => self
                    .description
                    .push(joined["DESCRIPTION:".len()..].trim().to_string()),
            }
        }
    }

    fn finish(self) -> Option<EventRecord> {
        let start = self.start?;
        let end = self.end.unwrap_or_else(|| add_days(start, 1));
        let description = Some(self.description.join(" ").trim().to_string())
            .filter(|text| !text.is_empty());

        Some(EventRecord {
            summary: self.summary,
            start,
            end,
            description,
        })
    }
}

fn match_date_field<'a>(line: &'a str, name: &str, mode: DecodeMode) -> Option<&'a str> {
    match mode {
        DecodeMode::Strict => line
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix(";VALUE=DATE:")),
        DecodeMode::Permissive => {
            if !line.starts_with(name) {
                return None;
            }
            line.rfind(':').map(|colon| &line[colon + 1..])
        }
    }
}
