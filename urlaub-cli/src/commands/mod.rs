pub mod clear;
pub mod config;
pub mod events;
pub mod export;
pub mod import;
pub mod show;
pub mod toggle;

use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use url::Url;
use urlaub_core::selection::SelectionStore;

/// Load the persisted selection, falling back to an empty store with a
/// warning when the data cannot be read.
pub(crate) fn load_store(year: i32) -> Result<(SelectionStore, PathBuf)> {
    let path = SelectionStore::storage_path()?;
    let store = match SelectionStore::load(&path, year) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: {e}; starting with an empty selection").yellow()
            );
            SelectionStore::new(year)
        }
    };
    Ok((store, path))
}

/// Read raw ICS text from a local file or an http(s) URL.
pub(crate) async fn read_source(source: &str) -> Result<String> {
    if let Ok(url) = Url::parse(source) {
        if matches!(url.scheme(), "http" | "https") {
            let spinner = create_spinner(format!("Fetching {source}"));
            let result = fetch(url).await;
            spinner.finish_and_clear();
            return result;
        }
    }

    std::fs::read_to_string(source).with_context(|| format!("could not read {source}"))
}

async fn fetch(url: Url) -> Result<String> {
    let response = reqwest::get(url.clone())
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("could not fetch {url}"))?;
    response
        .text()
        .await
        .with_context(|| format!("could not fetch {url}"))
}

fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
