//! Career Catalog — the immutable set of careers every profile is scored against.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::builtin_careers::BUILTIN_CAREERS;

/// Errors raised while loading a catalog or synonym map at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Career #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("Career '{title}' has a blank skill")]
    BlankSkill { title: String },

    #[error("Synonym class has a blank key")]
    BlankSynonymKey,

    #[error("Synonym '{term}' appears in both '{first}' and '{second}'")]
    SharedSynonym {
        term: String,
        first: String,
        second: String,
    },
}

/// Compile-time career definition used for the built-in catalog.
pub struct CareerDef {
    pub title: &'static str,
    pub domain: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub roadmap: &'static [&'static str],
}

impl From<&CareerDef> for CareerRecord {
    fn from(def: &CareerDef) -> Self {
        CareerRecord {
            title: def.title.to_string(),
            domain: def.domain.map(str::to_string),
            skills: def.skills.iter().map(|s| s.to_string()).collect(),
            description: def.description.to_string(),
            roadmap: def.roadmap.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A single career. Titles are not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub skills: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub roadmap: Vec<String>,
}

/// Ordered, read-only list of careers. Order matters only for stable tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
}

impl CareerCatalog {
    /// Validates and wraps `records`.
    pub fn new(records: Vec<CareerRecord>) -> Result<Self, CatalogError> {
        for (index, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if record.skills.iter().any(|s| s.trim().is_empty()) {
                return Err(CatalogError::BlankSkill {
                    title: record.title.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN_CAREERS.iter().map(CareerRecord::from).collect(),
        }
    }

    /// Loads a JSON array of career records.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<CareerRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(records)
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
