use axum::{Router, routing::get};

use super::handlers::{get_workout, list_workouts};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts))
        .route("/:id", get(get_workout))
}
