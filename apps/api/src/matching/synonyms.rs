//! Synonym Expander — widens keywords into their full equivalence classes.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use crate::matching::catalog::CatalogError;

/// Built-in equivalence classes: canonical keyword followed by its synonyms.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["coding", "software development", "developer", "engineer"],
    ),
    ("math", &["mathematics", "arithmetic", "calculus", "algebra"]),
    (
        "communication",
        &["speaking", "writing", "presenting", "public speaking"],
    ),
    (
        "creativity",
        &["creative", "imagination", "innovation", "artistic"],
    ),
    (
        "problem-solving",
        &["troubleshooting", "critical thinking", "solution", "analytical"],
    ),
    (
        "leadership",
        &["management", "supervision", "team lead", "coordinator"],
    ),
    (
        "organization",
        &["organizational", "planning", "scheduling", "coordination"],
    ),
    (
        "customer service",
        &["client service", "customer support", "help desk"],
    ),
    (
        "medical knowledge",
        &["medicine", "healthcare", "clinical", "doctor", "nurse"],
    ),
];

/// One canonical keyword and the terms treated as equivalent to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymClass {
    pub key: String,
    pub synonyms: Vec<String>,
}

impl SynonymClass {
    fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// Immutable synonym map. Matching a key or any synonym pulls in the whole class.
#[derive(Debug, Clone)]
pub struct SynonymMap {
    classes: Vec<SynonymClass>,
    /// term → indices of the classes it belongs to
    index: HashMap<String, Vec<usize>>,
}

impl SynonymMap {
    /// Builds a map from `(key, synonyms)` pairs, lowercasing every term.
    ///
    /// Rejects maps where one term belongs to two different classes: such a
    /// term would bridge the classes and make expansion non-idempotent.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let classes: Vec<SynonymClass> = entries
            .into_iter()
            .map(|(key, synonyms)| SynonymClass {
                key: key.to_lowercase(),
                synonyms: synonyms.iter().map(|s| s.to_lowercase()).collect(),
            })
            .collect();

        // term → index of the class that first claimed it
        let mut owner: HashMap<&str, usize> = HashMap::new();
        for (idx, class) in classes.iter().enumerate() {
            if class.key.trim().is_empty() {
                return Err(CatalogError::BlankSynonymKey);
            }
            for term in class.terms() {
                match owner.get(term) {
                    Some(&other) if other != idx => {
                        return Err(CatalogError::SharedSynonym {
                            term: term.to_string(),
                            first: classes[other].key.clone(),
                            second: class.key.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owner.insert(term, idx);
                    }
                }
            }
        }

        Ok(Self::from_classes(classes))
    }

    /// The synonym classes shipped with the service.
    pub fn builtin() -> Self {
        Self::from_classes(
            BUILTIN_SYNONYMS
                .iter()
                .map(|(key, synonyms)| SynonymClass {
                    key: key.to_string(),
                    synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    /// Loads a JSON object of the form `{"key": ["synonym", ...], ...}`.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(parsed)
    }

    fn from_classes(classes: Vec<SynonymClass>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, class) in classes.iter().enumerate() {
            for term in class.terms() {
                let owners = index.entry(term.to_string()).or_default();
                if !owners.contains(&idx) {
                    owners.push(idx);
                }
            }
        }
        Self { classes, index }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Expands `keywords` verbatim plus every class any of them belongs to.
    ///
    /// Keywords are compared as given; callers lowercase beforehand.
    pub fn expand<I, S>(&self, keywords: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = BTreeSet::new();
        for keyword in keywords {
            let keyword = keyword.as_ref();
            expanded.insert(keyword.to_string());
            if let Some(owners) = self.index.get(keyword) {
                for &idx in owners {
                    expanded.extend(self.classes[idx].terms().map(str::to_string));
                }
            }
        }
        expanded
    }
}
