pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/predict-career-content-based",
            post(handlers::handle_predict),
        )
        .route("/results/:user_id", get(handlers::handle_get_results))
        .route("/feedback", post(handlers::handle_feedback))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::matching::catalog::CareerCatalog;
    use crate::matching::engine::ContentBasedRecommender;
    use crate::matching::store::ResultStore;
    use crate::matching::synonyms::SynonymMap;

    fn test_state() -> AppState {
        AppState {
            recommender: Arc::new(ContentBasedRecommender::new(
                Arc::new(CareerCatalog::builtin()),
                Arc::new(SynonymMap::builtin()),
            )),
            results: ResultStore::new(),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn programming_profile(user_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "skills": ["Programming", "algorithms"],
            "education": "cs degree",
            "interests": ["technology"],
            "personality": "analytical",
            "goals": "build software"
        })
    }

    #[tokio::test]
    async fn test_root() {
        let response = build_router(test_state()).oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Career Prediction API is running.");
    }

    #[tokio::test]
    async fn test_health_reports_catalog_size() {
        let response = build_router(test_state())
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["careers"], 46);
    }

    #[tokio::test]
    async fn test_predict_returns_ranked_careers() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/predict-career-content-based",
                programming_profile("alice"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user_id"], "alice");
        let careers = body["careers"].as_array().unwrap();
        assert_eq!(careers.len(), 3);
        assert_eq!(careers[0]["career"], "Software Engineer");
        assert_eq!(careers[0]["match_score"], 12.0);
        assert_eq!(body["roadmap"], careers[0]["roadmap"]);
        assert_eq!(
            body["reasoning"],
            "Based on your skills, interests, and background, these careers are a strong fit."
        );
    }

    #[tokio::test]
    async fn test_predict_nonsense_profile_returns_sentinel() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/predict-career-content-based",
                json!({
                    "user_id": "bob",
                    "skills": ["xyzzy123"],
                    "education": "xyzzy123",
                    "interests": [],
                    "personality": "",
                    "goals": ""
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["careers"].as_array().unwrap().len(), 1);
        assert_eq!(body["careers"][0]["career"], "No strong match found");
        assert_eq!(body["careers"][0]["match_score"], 0.0);
        assert_eq!(body["roadmap"], json!([]));
    }

    #[tokio::test]
    async fn test_predict_rejects_blank_user_id() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/predict-career-content-based",
                programming_profile("  "),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_predict_rejects_missing_field() {
        let mut profile = programming_profile("carol");
        profile.as_object_mut().unwrap().remove("goals");

        let response = build_router(test_state())
            .oneshot(post_json("/predict-career-content-based", profile))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_results_round_trip_through_store() {
        let state = test_state();

        let response = build_router(state.clone())
            .oneshot(post_json(
                "/predict-career-content-based",
                programming_profile("dave"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let predicted = body_json(response).await;

        let response = build_router(state)
            .oneshot(get_request("/results/dave"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, predicted);
    }

    #[tokio::test]
    async fn test_results_for_unknown_user_is_404() {
        let response = build_router(test_state())
            .oneshot(get_request("/results/nobody"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "No results found");
    }

    #[tokio::test]
    async fn test_feedback_is_recorded() {
        let state = test_state();
        let response = build_router(state.clone())
            .oneshot(post_json(
                "/feedback",
                json!({ "user_id": "erin", "feedback": "Spot on" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["msg"], "Feedback received");

        let rows = state.results.feedback_for("erin").await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].feedback, "Spot on");
    }

    #[tokio::test]
    async fn test_feedback_rejects_blank_text() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/feedback",
                json!({ "user_id": "erin", "feedback": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
