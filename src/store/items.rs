use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A single catalog entry.
///
/// Only `id` is required in the source file. Missing optional fields are
/// filled with defaults at parse time, and unrecognized fields are carried
/// through verbatim so responses echo the file faithfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub text: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_category() -> String {
    "uncategorized".to_string()
}

impl Item {
    /// Case-insensitive substring match over title, text and tags.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        let haystack = format!("{} {} {}", self.title, self.text, self.tags.join(" "));
        haystack.to_lowercase().contains(needle)
    }
}

/// The in-memory item collection, loaded once and read-only afterwards.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
}

/// Top-level shape of the data file: `{"items": [...]}`.
#[derive(Deserialize)]
struct DataFile {
    #[serde(default)]
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Reads and parses the data file. A missing `items` field yields an
    /// empty collection; a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let data: DataFile = serde_json::from_str(&raw)?;
        Ok(Self::new(data.items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items per category, defaulted categories included.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}
