use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use urlaub_core::UrlaubError;
use urlaub_core::ics::encode_selection;

pub fn run(year: i32, output: Option<&Path>) -> Result<()> {
    let (store, _path) = super::load_store(year)?;
    let days = store.active_days();

    let ics = match encode_selection(&days) {
        Ok(ics) => ics,
        Err(UrlaubError::EmptyResult(_)) => {
            println!("{}", format!("No days selected in {year}").dimmed());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &ics)?;
            println!("Wrote {} day(s) to {}", days.len(), path.display());
        }
        None => print!("{ics}"),
    }
    Ok(())
}
