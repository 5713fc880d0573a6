mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use urlaub_core::config::UrlaubConfig;

#[derive(Parser)]
#[command(name = "urlaub")]
#[command(about = "Plan your vacation days on a year calendar")]
struct Cli {
    /// Year to plan (defaults to the configured year, then the current one)
    #[arg(short, long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the year calendar, selection summary and holidays
    Show,
    /// Toggle one or more days (YYYY-MM-DD)
    Toggle {
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Import vacation days from an ICS file or URL
    Import {
        source: String,

        /// Accept only DTSTART;VALUE=DATE date fields
        #[arg(long)]
        strict: bool,
    },
    /// Export the year's selection as ICS
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the events of an ICS file or URL
    Events { source: String },
    /// Clear the year's selection
    Clear,
    /// Show or change configuration
    Config {
        /// Set the yearly vacation-day allowance
        #[arg(long)]
        vacation_days: Option<u32>,

        /// Set the default planning year
        #[arg(long)]
        default_year: Option<i32>,

        /// Include the optional "Hohes Friedensfest" (true/false)
        #[arg(long)]
        friedensfest: Option<bool>,

        /// Set the school-holiday ICS source (path or URL)
        #[arg(long)]
        school_holidays: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = UrlaubConfig::load()?;
    let year = cli
        .year
        .or(config.year)
        .unwrap_or_else(|| chrono::Local::now().year());

    match cli.command {
        Commands::Show => commands::show::run(&config, year).await,
        Commands::Toggle { dates } => commands::toggle::run(year, &dates),
        Commands::Import { source, strict } => commands::import::run(year, &source, strict).await,
        Commands::Export { output } => commands::export::run(year, output.as_deref()),
        Commands::Events { source } => commands::events::run(&source).await,
        Commands::Clear => commands::clear::run(year),
        Commands::Config {
            vacation_days,
            default_year,
            friedensfest,
            school_holidays,
        } => commands::config::run(config, vacation_days, default_year, friedensfest, school_holidays),
    }
}
