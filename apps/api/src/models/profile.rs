use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Self-reported survey answers. Every field is required on the wire; empty
/// strings and lists are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub skills: Vec<String>,
    pub education: String,
    pub interests: Vec<String>,
    pub personality: String,
    pub goals: String,
}

impl UserProfile {
    /// Lowercased raw keywords from every answer. Empty answers are dropped.
    pub fn keywords(&self) -> BTreeSet<String> {
        self.skills
            .iter()
            .chain(self.interests.iter())
            .chain([&self.education, &self.personality, &self.goals])
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }
}
