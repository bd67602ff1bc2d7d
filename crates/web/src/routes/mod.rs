use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn configure(state: AppState) -> Router {
    let api = Router::new().nest("/workouts", features::workouts::routes::routes());

    Router::new()
        .route("/", get(|| async { "Workout Tracker API Running" }))
        .nest("/api", api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, TimeZone, Utc};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use storage::{
        WorkoutStore,
        models::{NewWorkout, WorkoutCategory},
        repository::memory::InMemoryWorkoutStore,
    };
    use tower::ServiceExt;

    use super::configure;
    use crate::state::AppState;

    async fn seeded_store(count: usize) -> Arc<InMemoryWorkoutStore> {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
        let workouts: Vec<NewWorkout> = (0..count)
            .map(|i| NewWorkout {
                name: format!("Session {i}"),
                description: "Full body".to_string(),
                start_date: base + Duration::hours(i as i64 * 12),
                category: if i % 2 == 0 {
                    WorkoutCategory::C1
                } else {
                    WorkoutCategory::C4
                },
                duration: 30,
                dummy_data_large_text: Some("lorem ipsum".to_string()),
                dummy_data_array: Some(vec!["dolor".to_string()]),
            })
            .collect();

        let store = Arc::new(InMemoryWorkoutStore::new());
        store.insert_many(&workouts).await.unwrap();
        store
    }

    async fn get(store: Arc<InMemoryWorkoutStore>, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = configure(AppState::new(store))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_first_page_with_defaults() {
        let (status, json) = get(seeded_store(45).await, "/api/workouts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["workouts"].as_array().unwrap().len(), 20);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalWorkouts"], 45);
        assert_eq!(json["pageSize"], 20);
    }

    #[tokio::test]
    async fn test_list_projects_summary_fields_only() {
        let (_, json) = get(seeded_store(1).await, "/api/workouts").await;

        let item = json["workouts"][0].as_object().unwrap();
        let mut keys: Vec<_> = item.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            ["_id", "category", "description", "duration", "name", "startDate"]
        );
    }

    #[tokio::test]
    async fn test_last_partial_page() {
        let (status, json) = get(seeded_store(45).await, "/api/workouts?page=3&limit=20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["workouts"].as_array().unwrap().len(), 5);
        assert_eq!(json["currentPage"], 3);
    }

    #[rstest]
    #[case("/api/workouts?page=abc&limit=-4")]
    #[case("/api/workouts?page=0&limit=0")]
    #[case("/api/workouts?startDateMonthYear=foo")]
    #[case("/api/workouts?startDateMonthYear=2024-13&categories=,")]
    #[tokio::test]
    async fn test_malformed_params_treated_as_absent(#[case] uri: &str) {
        let (status, json) = get(seeded_store(45).await, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalWorkouts"], 45);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 20);
    }

    #[tokio::test]
    async fn test_repeated_page_key_uses_first_value() {
        let (status, json) = get(seeded_store(45).await, "/api/workouts?page=2&page=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["workouts"].as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_repeated_categories_key_matches_all_values() {
        let store = seeded_store(10).await;

        let (status, json) = get(store, "/api/workouts?categories=c1&categories=c4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalWorkouts"], 10);
    }

    #[tokio::test]
    async fn test_filter_by_month_and_categories() {
        let store = seeded_store(90).await;

        // 12h steps from June 1st: June holds 60 records, half of them c4
        let (_, json) = get(store, "/api/workouts?startDateMonthYear=2024-06&categories=c4,c9").await;

        assert_eq!(json["totalWorkouts"], 30);
        assert_eq!(json["totalPages"], 2);
        assert!(
            json["workouts"]
                .as_array()
                .unwrap()
                .iter()
                .all(|w| w["category"] == "c4")
        );
    }

    #[tokio::test]
    async fn test_workout_details_by_id() {
        let store = seeded_store(3).await;
        let (_, list) = get(store.clone(), "/api/workouts?limit=1").await;
        let id = list["workouts"][0]["_id"].as_str().unwrap().to_string();

        let (status, json) = get(store, &format!("/api/workouts/{id}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["_id"], id.as_str());
        assert_eq!(json["name"], "Session 0");
        assert_eq!(json["dummyDataLargeText"], "lorem ipsum");
        assert!(json.get("createdAt").is_some());
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let (status, json) = get(seeded_store(1).await, "/api/workouts/not-a-valid-id").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "message": "Invalid Workout ID format" }));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let uri = "/api/workouts/6f1c2b5e-2a7d-4c8e-9d1f-3b4a5c6d7e8f";
        let (status, json) = get(seeded_store(1).await, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "message": "Workout not found" }));
    }

    #[tokio::test]
    async fn test_store_outage_is_server_error() {
        let store = seeded_store(1).await;
        store.set_offline(true);

        let (status, json) = get(store.clone(), "/api/workouts").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Server error fetching workouts");
        assert!(json["error"].as_str().unwrap().contains("offline"));

        let uri = "/api/workouts/6f1c2b5e-2a7d-4c8e-9d1f-3b4a5c6d7e8f";
        let (status, json) = get(store, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Server error fetching workout details");
    }

    #[tokio::test]
    async fn test_serves_openapi_document() {
        let (status, json) = get(seeded_store(0).await, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["paths"].get("/api/workouts/{id}").is_some());
    }
}
