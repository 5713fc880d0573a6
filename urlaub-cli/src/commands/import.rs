use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use urlaub_core::ics::{DecodeMode, decode_events_with};

pub async fn run(year: i32, source: &str, strict: bool) -> Result<()> {
    let text = match super::read_source(source).await {
        Ok(text) => text,
        // A failed read is a notice, not a crash; the store stays untouched.
        Err(e) => {
            println!("{}", format!("{e:#}").red());
            return Ok(());
        }
    };

    let mode = if strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Permissive
    };
    let records = decode_events_with(&text, mode);
    let days: Vec<NaiveDate> = records.iter().flat_map(|record| record.days()).collect();

    if days.is_empty() {
        println!("{}", "No importable days found".dimmed());
        return Ok(());
    }

    let (mut store, path) = super::load_store(year)?;
    let stats = store.import_dates(days);
    store.persist(&path)?;

    if stats.imported == 0 {
        println!("{}", "All days were already selected".dimmed());
    } else {
        println!(
            "Imported {} day(s), {} in {}",
            stats.imported.green(),
            stats.in_active_year,
            store.active_year()
        );
    }
    Ok(())
}
