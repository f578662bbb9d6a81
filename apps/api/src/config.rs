use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; the built-in catalog and synonyms are used
/// unless a path overrides them.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON array of career records replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// JSON object of synonym classes replacing the built-in map.
    pub synonyms_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: optional_path(&lookup, "CATALOG_PATH"),
            synonyms_path: optional_path(&lookup, "SYNONYMS_PATH"),
        })
    }
}

fn optional_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
