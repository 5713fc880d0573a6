use anyhow::Result;
use owo_colors::OwoColorize;
use urlaub_core::config::UrlaubConfig;
use urlaub_core::selection::SelectionStore;

pub fn run(
    mut config: UrlaubConfig,
    vacation_days: Option<u32>,
    default_year: Option<i32>,
    friedensfest: Option<bool>,
    school_holidays: Option<String>,
) -> Result<()> {
    let mut changed = false;
    if let Some(days) = vacation_days {
        config.vacation_days = days;
        changed = true;
    }
    if let Some(year) = default_year {
        config.year = Some(year);
        changed = true;
    }
    if let Some(flag) = friedensfest {
        config.friedensfest = flag;
        changed = true;
    }
    if let Some(source) = school_holidays {
        config.school_holidays = Some(source);
        changed = true;
    }
    if changed {
        config.save()?;
        println!("{}\n", "Configuration updated".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", UrlaubConfig::config_path()?.display());
    println!("  Selection:  {}", SelectionStore::storage_path()?.display());

    println!("\n{}", "Settings".bold());
    println!("  vacation_days:    {}", config.vacation_days);
    match config.year {
        Some(year) => println!("  year:             {year}"),
        None => println!("  year:             {}", "(current)".dimmed()),
    }
    println!("  friedensfest:     {}", config.friedensfest);
    match &config.school_holidays {
        Some(source) => println!("  school_holidays:  {source}"),
        None => println!("  school_holidays:  {}", "(none)".dimmed()),
    }

    Ok(())
}
