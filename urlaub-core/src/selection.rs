//! The vacation-day selection, partitioned by year, and its persistence.
//!
//! Buckets are `BTreeSet`s keyed by the first four characters of the
//! serialized date, so every bucket is sorted and duplicate-free by
//! construction and a date can only ever live under its own year.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::date::format_date;
use crate::error::{UrlaubError, UrlaubResult};

const SELECTION_FILE: &str = "selection.json";

/// Counts returned from a bulk import, for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Days newly added to any year bucket, deduplicated across the call.
    pub imported: usize,
    /// Subset of `imported` that landed in the active year.
    pub in_active_year: usize,
}

/// Persisted shapes: the year-keyed mapping, or the legacy flat list from
/// before the store was partitioned by year.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedSelection {
    ByYear(BTreeMap<String, Vec<NaiveDate>>),
    Flat(Vec<NaiveDate>),
}

pub struct SelectionStore {
    buckets: BTreeMap<String, BTreeSet<NaiveDate>>,
    active_year: i32,
}

impl SelectionStore {
    pub fn new(active_year: i32) -> Self {
        SelectionStore {
            buckets: BTreeMap::new(),
            active_year,
        }
    }

    /// Parse a persisted selection record. Legacy flat lists are migrated by
    /// bucketing every entry on its own serialized year prefix; the same
    /// re-bucketing also repairs entries stored under a foreign year key.
    pub fn from_json(raw: &str, active_year: i32) -> UrlaubResult<Self> {
        let persisted: PersistedSelection = serde_json::from_str(raw)
            .map_err(|e| UrlaubError::Persistence(format!("unreadable selection data: {e}")))?;

        let dates: Vec<NaiveDate> = match persisted {
            PersistedSelection::ByYear(map) => map.into_values().flatten().collect(),
            PersistedSelection::Flat(dates) => dates,
        };

        let mut store = SelectionStore::new(active_year);
        store.import_dates(dates);
        Ok(store)
    }

    /// Serialize as the year-keyed mapping of sorted `YYYY-MM-DD` lists.
    pub fn to_json(&self) -> UrlaubResult<String> {
        serde_json::to_string_pretty(&self.buckets)
            .map_err(|e| UrlaubError::Persistence(e.to_string()))
    }

    /// The single well-known location of the persisted selection.
    pub fn storage_path() -> UrlaubResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| UrlaubError::Persistence("Could not determine data directory".into()))?
            .join("urlaub");
        Ok(data_dir.join(SELECTION_FILE))
    }

    /// Load the persisted selection; a missing file is an empty store.
    pub fn load(path: &Path, active_year: i32) -> UrlaubResult<Self> {
        if !path.exists() {
            return Ok(SelectionStore::new(active_year));
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            UrlaubError::Persistence(format!("could not read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw, active_year)
    }

    pub fn persist(&self, path: &Path) -> UrlaubResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                UrlaubError::Persistence(format!("could not create {}: {e}", parent.display()))
            })?;
        }

        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, self.to_json()?).map_err(|e| {
            UrlaubError::Persistence(format!("could not write {}: {e}", temp.display()))
        })?;
        std::fs::rename(&temp, path).map_err(|e| {
            UrlaubError::Persistence(format!("could not write {}: {e}", path.display()))
        })?;
        Ok(())
    }

    pub fn active_year(&self) -> i32 {
        self.active_year
    }

    /// Make another year's bucket the live editable set.
    pub fn switch_active_year(&mut self, year: i32) {
        self.active_year = year;
    }

    /// The active year's days, sorted ascending.
    pub fn active_days(&self) -> Vec<NaiveDate> {
        self.buckets
            .get(&self.active_key())
            .map(|bucket| bucket.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.buckets
            .get(&year_key(date))
            .is_some_and(|bucket| bucket.contains(&date))
    }

    /// Flip membership of `date`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        let key = year_key(date);
        let bucket = self.buckets.entry(key.clone()).or_default();
        let selected = if bucket.remove(&date) {
            false
        } else {
            bucket.insert(date)
        };
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        selected
    }

    /// Insert each date into the bucket of its own year, deduplicating.
    pub fn import_dates<I>(&mut self, dates: I) -> ImportStats
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let active_key = self.active_key();
        let mut stats = ImportStats {
            imported: 0,
            in_active_year: 0,
        };

        for date in dates {
            let key = year_key(date);
            if self.buckets.entry(key.clone()).or_default().insert(date) {
                stats.imported += 1;
                if key == active_key {
                    stats.in_active_year += 1;
                }
            }
        }

        stats
    }

    /// Empty only the active year's bucket.
    pub fn clear_active_year(&mut self) {
        let key = self.active_key();
        self.buckets.remove(&key);
    }

    fn active_key(&self) -> String {
        format!("{:04}", self.active_year)
    }
}

/// Bucket key: the first four characters of the serialized form.
fn year_key(date: NaiveDate) -> String {
    format_date(date)[..4].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut store = SelectionStore::new(2024);
        let d = date(2024, 7, 1);

        assert!(store.toggle(d));
        assert!(store.is_selected(d));
        assert_eq!(store.active_days(), vec![d]);

        assert!(!store.toggle(d));
        assert!(!store.is_selected(d));
        assert!(store.active_days().is_empty());
    }

    #[test]
    fn test_active_days_sorted_and_deduplicated() {
        let mut store = SelectionStore::new(2024);
        store.toggle(date(2024, 7, 3));
        store.toggle(date(2024, 7, 1));
        store.toggle(date(2024, 7, 2));
        store.import_dates([date(2024, 7, 1), date(2024, 7, 4)]);

        assert_eq!(
            store.active_days(),
            vec![
                date(2024, 7, 1),
                date(2024, 7, 2),
                date(2024, 7, 3),
                date(2024, 7, 4),
            ]
        );
    }

    #[test]
    fn test_import_buckets_by_own_year() {
        let mut store = SelectionStore::new(2024);
        let stats = store.import_dates([date(2024, 12, 31), date(2025, 1, 1)]);

        assert_eq!(stats.imported, 2);
        assert_eq!(stats.in_active_year, 1);
        assert_eq!(store.active_days(), vec![date(2024, 12, 31)]);

        store.switch_active_year(2025);
        assert_eq!(store.active_days(), vec![date(2025, 1, 1)]);
    }

    #[test]
    fn test_import_deduplicates_across_the_call() {
        let mut store = SelectionStore::new(2024);
        store.toggle(date(2024, 5, 1));
        let stats = store.import_dates([
            date(2024, 5, 1),
            date(2024, 5, 2),
            date(2024, 5, 2),
        ]);

        assert_eq!(stats.imported, 1);
        assert_eq!(stats.in_active_year, 1);
    }

    #[test]
    fn test_switch_year_keeps_previous_selection() {
        let mut store = SelectionStore::new(2024);
        store.toggle(date(2024, 8, 1));

        store.switch_active_year(2025);
        assert!(store.active_days().is_empty());
        store.toggle(date(2025, 8, 1));

        store.switch_active_year(2024);
        assert_eq!(store.active_days(), vec![date(2024, 8, 1)]);
    }

    #[test]
    fn test_clear_only_touches_active_year() {
        let mut store = SelectionStore::new(2024);
        store.import_dates([date(2024, 3, 1), date(2025, 3, 1)]);

        store.clear_active_year();
        assert!(store.active_days().is_empty());

        store.switch_active_year(2025);
        assert_eq!(store.active_days(), vec![date(2025, 3, 1)]);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut store = SelectionStore::new(2024);
        store.import_dates([date(2024, 12, 31), date(2025, 1, 1), date(2024, 1, 2)]);

        let json = store.to_json().unwrap();
        let restored = SelectionStore::from_json(&json, 2024).unwrap();
        assert_eq!(restored.active_days(), store.active_days());

        // shape: year keys mapping to serialized date lists
        assert!(json.contains("\"2024\""));
        assert!(json.contains("\"2025\""));
        assert!(json.contains("\"2024-01-02\""));
    }

    #[test]
    fn test_legacy_flat_list_is_migrated_into_buckets() {
        let store =
            SelectionStore::from_json(r#"["2023-05-01", "2024-05-01"]"#, 2023).unwrap();

        assert_eq!(store.active_days(), vec![date(2023, 5, 1)]);
        let json = store.to_json().unwrap();
        assert!(json.contains("\"2023\""));
        assert!(json.contains("\"2024\""));
    }

    #[test]
    fn test_miskeyed_entries_are_rebucketed_on_load() {
        let store =
            SelectionStore::from_json(r#"{"2023": ["2023-05-01", "2024-05-01"]}"#, 2024).unwrap();
        assert_eq!(store.active_days(), vec![date(2024, 5, 1)]);
    }

    #[test]
    fn test_unparseable_data_is_a_persistence_error() {
        for raw in ["not json", "{\"2024\": 5}", "[\"05/01/2024\"]"] {
            assert!(matches!(
                SelectionStore::from_json(raw, 2024),
                Err(UrlaubError::Persistence(_))
            ));
        }
    }

    #[test]
    fn test_empty_buckets_are_dropped() {
        let mut store = SelectionStore::new(2024);
        store.toggle(date(2024, 7, 1));
        store.toggle(date(2024, 7, 1));
        assert_eq!(store.to_json().unwrap().trim(), "{}");
    }
}
