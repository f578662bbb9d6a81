use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub user_id: String,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRequest> for FeedbackRow {
    fn from(req: FeedbackRequest) -> Self {
        FeedbackRow {
            id: Uuid::new_v4(),
            user_id: req.user_id,
            feedback: req.feedback,
            created_at: Utc::now(),
        }
    }
}
