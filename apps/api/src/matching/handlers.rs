//! Axum route handlers for the recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::feedback::{FeedbackRequest, FeedbackRow};
use crate::models::prediction::Prediction;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub msg: String,
}

/// POST /predict-career-content-based
///
/// Scores the submitted survey against the catalog and remembers the result
/// as the user's latest prediction.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<Prediction>, AppError> {
    if profile.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }

    let careers = state.recommender.recommend(&profile);
    let prediction = Prediction::new(profile.user_id, careers);

    if let Some(top) = prediction.careers.first() {
        info!(
            user_id = %prediction.user_id,
            top = %top.title,
            score = top.match_score,
            "Stored career prediction"
        );
    }
    state.results.save_prediction(prediction.clone()).await;

    Ok(Json(prediction))
}

/// GET /results/:user_id
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Prediction>, AppError> {
    state
        .results
        .latest_prediction(&user_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No results found".to_string()))
}

/// POST /feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    if req.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }

    let row = FeedbackRow::from(req);
    info!(user_id = %row.user_id, id = %row.id, "Feedback received");
    state.results.record_feedback(row).await;

    Ok(Json(FeedbackResponse {
        msg: "Feedback received".to_string(),
    }))
}
