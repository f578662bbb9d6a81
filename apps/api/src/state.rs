use std::sync::Arc;

use crate::matching::engine::CareerRecommender;
use crate::matching::store::ResultStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable recommender. Default: ContentBasedRecommender over the loaded catalog.
    pub recommender: Arc<dyn CareerRecommender>,
    /// Latest prediction per user and the feedback log.
    pub results: ResultStore,
}
