use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::engine::ScoredCareer;

pub const PREDICTION_REASONING: &str =
    "Based on your skills, interests, and background, these careers are a strong fit.";

/// The latest recommendation issued for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub user_id: String,
    pub careers: Vec<ScoredCareer>,
    pub reasoning: String,
    /// Roadmap of the best match; empty when nothing matched.
    pub roadmap: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(user_id: String, careers: Vec<ScoredCareer>) -> Self {
        let roadmap = careers
            .first()
            .map(|c| c.roadmap.clone())
            .unwrap_or_default();

        Prediction {
            user_id,
            careers,
            reasoning: PREDICTION_REASONING.to_string(),
            roadmap,
            created_at: Utc::now(),
        }
    }
}
