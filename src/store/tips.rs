use crate::store::StoreError;
use rand::seq::SliceRandom;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The in-memory tip collection. Tips have no schema; each is an arbitrary
/// JSON value returned verbatim.
#[derive(Debug)]
pub struct TipStore {
    tips: Vec<Value>,
}

impl TipStore {
    /// An empty collection is rejected: a tips server with no tips cannot
    /// answer its one endpoint.
    pub fn new(tips: Vec<Value>) -> Result<Self, StoreError> {
        if tips.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self { tips })
    }

    /// Reads and parses the tips file: a top-level JSON array.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let tips: Vec<Value> = serde_json::from_str(&raw)?;
        Self::new(tips)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// One uniformly random tip. `None` only if the collection is empty,
    /// which `new` rules out.
    pub fn random(&self) -> Option<&Value> {
        self.tips.choose(&mut rand::thread_rng())
    }
}
