use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(year: i32) -> Result<()> {
    let (mut store, path) = super::load_store(year)?;
    let removed = store.active_days().len();

    store.clear_active_year();
    store.persist(&path)?;

    if removed == 0 {
        println!("{}", format!("Nothing selected in {year}").dimmed());
    } else {
        println!("Cleared {removed} day(s) in {year}");
    }
    Ok(())
}
