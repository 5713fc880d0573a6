use anyhow::Result;
use owo_colors::OwoColorize;
use urlaub_core::ics::decode_events;

use crate::render;

pub async fn run(source: &str) -> Result<()> {
    let text = match super::read_source(source).await {
        Ok(text) => text,
        Err(e) => {
            println!("{}", format!("{e:#}").red());
            return Ok(());
        }
    };

    let records = decode_events(&text);
    if records.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for record in &records {
        println!("{}", render::event_line(record));
    }
    Ok(())
}
