//! In-memory request-scoped state: the latest prediction per user and the
//! feedback log. Nothing here survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::feedback::FeedbackRow;
use crate::models::prediction::Prediction;

#[derive(Clone, Default)]
pub struct ResultStore {
    predictions: Arc<RwLock<HashMap<String, Prediction>>>,
    feedback: Arc<RwLock<Vec<FeedbackRow>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any earlier prediction for the same user.
    pub async fn save_prediction(&self, prediction: Prediction) {
        self.predictions
            .write()
            .await
            .insert(prediction.user_id.clone(), prediction);
    }

    pub async fn latest_prediction(&self, user_id: &str) -> Option<Prediction> {
        self.predictions.read().await.get(user_id).cloned()
    }

    pub async fn record_feedback(&self, row: FeedbackRow) {
        self.feedback.write().await.push(row);
    }

    #[cfg(test)]
    pub async fn feedback_for(&self, user_id: &str) -> Vec<FeedbackRow> {
        self.feedback
            .read()
            .await
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect()
    }
}
