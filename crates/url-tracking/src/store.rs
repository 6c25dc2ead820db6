/// Per-category persisted sets of already-surfaced URLs.
///
/// Each category is one JSON file (`seen_{category}.json`) holding an array
/// of normalized URL strings, most recently seen first. Reads fail open —
/// a missing or corrupt file loads as "nothing seen yet" — while write
/// failures propagate, since silently losing seen-state would resurface
/// duplicate content on the next refresh cycle.
use std::path::PathBuf;

use newsletter_common::jsonstore::JsonStore;

use crate::error::TrackingError;
use crate::normalize::normalize_url;

/// Category bucket covering every section.
pub const GLOBAL_CATEGORY: &str = "all";

#[derive(Debug, Clone)]
pub struct SeenStore {
    store: JsonStore,
}

impl SeenStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(data_dir),
        }
    }

    /// Load previously seen URLs for a category, re-normalized defensively.
    /// Missing or malformed state loads as empty, never as an error.
    pub fn load(&self, category: &str) -> Vec<String> {
        let urls: Vec<String> = self.store.read(&file_stem(category)).unwrap_or_default();
        urls.iter()
            .map(|u| normalize_url(u))
            .filter(|u| !u.is_empty())
            .collect()
    }

    /// Replace the stored set for a category with the given URLs, normalized
    /// and deduplicated preserving first occurrence.
    pub fn save(&self, category: &str, urls: &[String]) -> Result<(), TrackingError> {
        let deduped = dedup_normalized(urls.iter().map(String::as_str));
        self.store.write(&file_stem(category), &deduped)?;
        Ok(())
    }

    /// Merge newly surfaced URLs in front of the stored set, so the most
    /// recently seen URLs come first. Re-submitted URLs keep only their
    /// newest position.
    pub fn append(&self, category: &str, new_urls: &[String]) -> Result<(), TrackingError> {
        let mut combined: Vec<String> = new_urls.to_vec();
        combined.extend(self.load(category));
        self.save(category, &combined)
    }
}

/// File stem for a category, sanitized so user-supplied category names can
/// never traverse outside the data directory.
fn file_stem(category: &str) -> String {
    let safe: String = category
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    format!("seen_{safe}")
}

fn dedup_normalized<'a>(urls: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut uniq = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for url in urls {
        let normalized = normalize_url(url);
        if !normalized.is_empty() && seen.insert(normalized.clone()) {
            uniq.push(normalized);
        }
    }
    uniq
}
