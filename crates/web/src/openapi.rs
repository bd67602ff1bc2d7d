use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::get_workout,
    ),
    components(
        schemas(
            storage::dto::workout::WorkoutListResponse,
            storage::models::WorkoutSummary,
            storage::models::Workout,
            storage::models::WorkoutCategory,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "workouts", description = "Read-only workout catalog"),
    )
)]
pub struct ApiDoc;
