pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::chatbot::handlers as chatbot;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            get(recommendation::handle_get_recommendations),
        )
        .route(
            "/api/v1/resources/:skill_name",
            get(recommendation::handle_get_skill_resource),
        )
        // Assessment API
        .route(
            "/api/v1/assessment",
            get(assessment::handle_get_assessment).post(assessment::handle_submit_assessment),
        )
        // Career assistant
        .route("/api/v1/chatbot", post(chatbot::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::auth::USER_ID_HEADER;
    use crate::models::skill_resource::SkillResource;
    use crate::recommendation::orchestrator::{RecommendationEngine, RecommendationSettings};
    use crate::recommendation::primary::PrimaryRanker;
    use crate::recommendation::sampling::StoreSampler;
    use crate::test_support::{profile, role, MemoryStore, StubGenerator};

    fn app(store: Arc<MemoryStore>, ranker_reply: StubGenerator) -> Router {
        let recommender = RecommendationEngine::new(
            store.clone(),
            store.clone(),
            Arc::new(StoreSampler),
            PrimaryRanker::new(Arc::new(ranker_reply), Duration::from_secs(5)),
            RecommendationSettings::default(),
        );
        build_router(AppState {
            recommender: Arc::new(recommender),
            profiles: store.clone(),
            resources: store,
            assistant: Arc::new(StubGenerator::replying("## Tips\n- Build projects")),
        })
    }

    fn resources() -> Vec<SkillResource> {
        vec![SkillResource {
            skill_name: "JavaScript".to_string(),
            youtube_link: Some("https://www.youtube.com/watch?v=PkZNo7MFNFg".to_string()),
            docs_link: Some("https://developer.mozilla.org/en-US/docs/Web/JavaScript".to_string()),
            practice_link: None,
        }]
    }

    fn get(uri: &str, user: Option<Uuid>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user.to_string());
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, user: Uuid, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(USER_ID_HEADER, user.to_string())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_recommendations_require_user() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let response = app
            .oneshot(get("/api/v1/recommendations", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_user_header_is_unauthorized() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let request = Request::builder()
            .uri("/api/v1/recommendations")
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_fallback_recommendations_include_scores() {
        let p = profile(&["JavaScript", "React"]);
        let user_id = p.user_id;
        let store = Arc::new(
            MemoryStore::with_roles(vec![
                role("roleA", &["JavaScript", "React", "Node.js"]),
                role("roleB", &["Python"]),
            ])
            .with_profile(p),
        );

        let response = app(store, StubGenerator::replying("not json"))
            .oneshot(get("/api/v1/recommendations", Some(user_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["role_id"], "roleA");
        assert_eq!(body[0]["missing_skills"], json!(["Node.js"]));
        assert_eq!(body[1]["role_id"], "roleB");
        assert_eq!(body[1]["score"], 0.0);
    }

    #[tokio::test]
    async fn test_ai_recommendations_are_plain_roles() {
        let p = profile(&["Rust"]);
        let user_id = p.user_id;
        let store = Arc::new(
            MemoryStore::with_roles(vec![role("r1", &["Rust"]), role("r2", &["Go"])])
                .with_profile(p),
        );

        let response = app(store, StubGenerator::replying(r#"["r2"]"#))
            .oneshot(get("/api/v1/recommendations", Some(user_id)))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["role_id"], "r2");
        assert!(body[0].get("score").is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let p = profile(&["Rust"]);
        let user_id = p.user_id;
        let store = Arc::new(MemoryStore::with_roles(vec![role("r1", &["Rust"])]).with_profile(p));
        store.set_failing(true);

        let response = app(store, StubGenerator::replying(r#"["r1"]"#))
            .oneshot(get("/api/v1/recommendations", Some(user_id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"]["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_resource_lookup_ignores_case() {
        let store = Arc::new(MemoryStore::default().with_resources(resources()));
        let response = app(store, StubGenerator::failing())
            .oneshot(get("/api/v1/resources/javascript", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["skill_name"], "JavaScript");
    }

    #[tokio::test]
    async fn test_unknown_resource_is_404() {
        let store = Arc::new(MemoryStore::default().with_resources(resources()));
        let response = app(store, StubGenerator::failing())
            .oneshot(get("/api/v1/resources/Haskell", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_assessment_round_trip() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store, StubGenerator::failing());
        let user_id = Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/assessment",
                user_id,
                json!({
                    "skills": ["React", " React ", "SQL"],
                    "qualification": "B.Tech",
                    "location_preference": "In-office"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(get("/api/v1/assessment", Some(user_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["skills"], json!(["React", "SQL"]));
        assert_eq!(body["location_preference"], "In-office");
        assert_eq!(body["duration_preference"], "3 Months");
    }

    #[tokio::test]
    async fn test_missing_assessment_is_404() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let response = app
            .oneshot(get("/api/v1/assessment", Some(Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chatbot_replies() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let response = app
            .oneshot(post_json(
                "/api/v1/chatbot",
                Uuid::new_v4(),
                json!({"prompt": "How do I prepare for interviews?"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(json_body(response).await["reply"]
            .as_str()
            .unwrap()
            .contains("Build projects"));
    }

    #[tokio::test]
    async fn test_chatbot_rejects_blank_prompt() {
        let app = app(Arc::new(MemoryStore::default()), StubGenerator::failing());
        let response = app
            .oneshot(post_json(
                "/api/v1/chatbot",
                Uuid::new_v4(),
                json!({"prompt": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
