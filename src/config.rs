use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_TIPS_FILE: &str = "tips.json";

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
}

impl AppConfig {
    /// Configuration for the items server: `PORT` and `DATA_FILE`.
    pub fn items_from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok()),
            data_path: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Configuration for the tips server: `PORT` and `TIPS_FILE`.
    pub fn tips_from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok()),
            data_path: env::var("TIPS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TIPS_FILE)),
        }
    }
}

// A PORT that does not parse falls back to the default rather than aborting.
fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
