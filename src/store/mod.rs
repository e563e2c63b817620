pub mod items;
pub mod tips;

pub use items::{Item, ItemStore};
pub use tips::TipStore;

use thiserror::Error;

/// Errors raised while loading a data file at startup.
///
/// Callers treat every variant as fatal; the process never serves traffic
/// with a partially loaded dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tips file contains no tips")]
    Empty,
}
