use anyhow::Result;
use owo_colors::OwoColorize;
use urlaub_core::date::{format_date, parse_date};

pub fn run(year: i32, dates: &[String]) -> Result<()> {
    // Validate everything before mutating, so a typo toggles nothing.
    let parsed = dates
        .iter()
        .map(|raw| parse_date(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut store, path) = super::load_store(year)?;

    for date in parsed {
        if store.toggle(date) {
            println!("{} {}", "+".green(), format_date(date).green());
        } else {
            println!("{} {}", "-".red(), format_date(date).red());
        }
    }

    store.persist(&path)?;
    println!(
        "\n{} day(s) selected in {}",
        store.active_days().len(),
        store.active_year()
    );
    Ok(())
}
