use std::collections::BTreeSet;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use urlaub_core::config::UrlaubConfig;
use urlaub_core::holidays::{bavarian_holidays, hohes_friedensfest};
use urlaub_core::ics::decode_events;

use crate::render::{self, DayMarks};

pub async fn run(config: &UrlaubConfig, year: i32) -> Result<()> {
    let (store, _path) = super::load_store(year)?;

    let mut holidays = bavarian_holidays(year);
    if config.friedensfest {
        let (date, holiday) = hohes_friedensfest(year);
        holidays.insert(date, holiday);
    }

    let events = match config.school_holiday_source() {
        Some(source) => match super::read_source(&source).await {
            Ok(text) => decode_events(&text),
            // A failed read leaves no partial overlay behind.
            Err(e) => {
                println!("{}", format!("Could not load school holidays: {e:#}").red());
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    let event_days: BTreeSet<NaiveDate> = events
        .iter()
        .flat_map(|record| record.days())
        .collect();

    println!("{}\n", format!("Urlaub {year}").bold());

    let marks = DayMarks {
        store: &store,
        holidays: &holidays,
        event_days: &event_days,
    };
    println!("{}", render::year_calendar(year, &marks));

    let days = store.active_days();
    println!("{}", render::allowance_line(days.len(), config.vacation_days));

    if !days.is_empty() {
        println!("\n{}", "Selected blocks".bold());
        for line in render::block_summary(&days) {
            println!("  {line}");
        }
    }

    println!("\n{}", "Public holidays".bold());
    for (date, holiday) in &holidays {
        println!("  {}", render::holiday_line(*date, holiday));
    }

    if !events.is_empty() {
        println!("\n{}", "School holidays".bold());
        for record in &events {
            println!("  {}", render::event_line(record));
        }
    }

    Ok(())
}
