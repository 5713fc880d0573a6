//! Terminal rendering for the year calendar and its summaries.
//!
//! Day cells are padded to their visible width before coloring so month
//! columns line up regardless of the ANSI codes around them.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};
use owo_colors::OwoColorize;
use urlaub_core::blocks::{Block, group_consecutive};
use urlaub_core::date::is_weekend;
use urlaub_core::event::EventRecord;
use urlaub_core::holidays::Holiday;
use urlaub_core::selection::SelectionStore;

const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const WEEKDAY_HEADER: &str = "Mo Di Mi Do Fr Sa So";

/// Visible width of one rendered month column.
const MONTH_WIDTH: usize = 20;
/// Lines per month block: name, weekday header, six week rows.
const MONTH_ROWS: usize = 8;

/// Everything that colors a day cell, in display precedence order:
/// selection, public holiday, school-holiday coverage, weekend.
pub struct DayMarks<'a> {
    pub store: &'a SelectionStore,
    pub holidays: &'a BTreeMap<NaiveDate, Holiday>,
    pub event_days: &'a BTreeSet<NaiveDate>,
}

/// Render the twelve months of `year` in rows of three.
pub fn year_calendar(year: i32, marks: &DayMarks<'_>) -> String {
    let mut lines = Vec::new();

    for row_months in [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]] {
        let blocks: Vec<Vec<String>> = row_months
            .iter()
            .map(|&month| month_block(year, month, marks))
            .collect();
        for row in 0..MONTH_ROWS {
            let line = blocks
                .iter()
                .map(|block| block[row].as_str())
                .collect::<Vec<_>>()
                .join("   ");
            lines.push(line.trim_end().to_string());
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn month_block(year: i32, month: u32, marks: &DayMarks<'_>) -> Vec<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month comes from a 1..=12 table");
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of month is always valid");
    let days_in_month = (next_month - first).num_days();

    let mut lines = Vec::with_capacity(MONTH_ROWS);
    lines.push(
        format!("{:<width$}", MONTHS[(month - 1) as usize], width = MONTH_WIDTH)
            .bold()
            .to_string(),
    );
    lines.push(WEEKDAY_HEADER.dimmed().to_string());

    let offset = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["  ".to_string(); offset];
    for day in 0..days_in_month {
        cells.push(day_cell(first + Duration::days(day), marks));
    }
    while cells.len() % 7 != 0 {
        cells.push("  ".to_string());
    }
    for week in cells.chunks(7) {
        lines.push(week.join(" "));
    }
    while lines.len() < MONTH_ROWS {
        lines.push(" ".repeat(MONTH_WIDTH));
    }
    lines
}

fn day_cell(date: NaiveDate, marks: &DayMarks<'_>) -> String {
    let cell = format!("{:>2}", date.day());
    if marks.store.is_selected(date) {
        cell.green().to_string()
    } else if marks.holidays.contains_key(&date) {
        cell.red().to_string()
    } else if marks.event_days.contains(&date) {
        cell.cyan().to_string()
    } else if is_weekend(date) {
        cell.dimmed().to_string()
    } else {
        cell
    }
}

/// The allowance tracker line, red once the selection exceeds it.
pub fn allowance_line(selected: usize, allowance: u32) -> String {
    let line = format!("({selected} of {allowance} available vacation days selected)");
    if selected > allowance as usize {
        line.red().to_string()
    } else {
        line
    }
}

/// Selected days grouped into consecutive blocks, one line each.
pub fn block_summary(days: &[NaiveDate]) -> Vec<String> {
    group_consecutive(days)
        .iter()
        .map(|block| match block {
            Block::Single(date) => format_short(*date),
            Block::Span { first, last } => format!(
                "{} - {} ({} days)",
                format_short(*first),
                format_short(*last),
                block.day_count()
            ),
        })
        .collect()
}

/// dd.mm, as the planner has always displayed block bounds.
fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// One line per public holiday.
pub fn holiday_line(date: NaiveDate, holiday: &Holiday) -> String {
    format!(
        "{}: {} - {} (Region: {})",
        date.format("%d.%m.%Y"),
        holiday.name.bold(),
        holiday.description,
        holiday.region.dimmed()
    )
}

/// One line per school-holiday event, with the inclusive display span.
pub fn event_line(record: &EventRecord) -> String {
    let start = record.start.format("%d.%m.%Y");
    let last = record.last_day();
    let span = if record.start == last {
        start.to_string()
    } else {
        format!("{} - {}", start, last.format("%d.%m.%Y"))
    };

    let summary = record.summary.as_deref().unwrap_or("(no title)");
    match &record.description {
        Some(description) => format!("{} ({}): {}", summary.bold(), span, description),
        None => format!("{} ({})", summary.bold(), span),
    }
}
