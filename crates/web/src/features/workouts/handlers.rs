use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::workout::{WorkoutListParams, WorkoutListResponse},
    models::Workout,
};
use uuid::Uuid;

use crate::error::{ErrorResponse, WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    params(WorkoutListParams),
    responses(
        (status = 200, description = "Page of workouts matching the filters", body = WorkoutListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebResult<Response> {
    // raw pairs so repeated keys degrade like any other malformed input
    let query = WorkoutListParams::from_pairs(pairs).into_query();

    let response = services::list_workouts(state.store.as_ref(), &query)
        .await
        .map_err(WebError::storage("Server error fetching workouts"))?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = String, Path, description = "Workout UUID")
    ),
    responses(
        (status = 200, description = "Workout found", body = Workout),
        (status = 400, description = "Invalid Workout ID format", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| WebError::BadRequest("Invalid Workout ID format".to_string()))?;

    let workout = services::get_workout(state.store.as_ref(), id)
        .await
        .map_err(|e| match e {
            e if e.is_not_found() => WebError::NotFound("Workout not found".to_string()),
            e => WebError::storage("Server error fetching workout details")(e),
        })?;

    Ok(Json(workout).into_response())
}
