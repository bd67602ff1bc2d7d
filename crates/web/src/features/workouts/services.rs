use storage::{
    WorkoutStore,
    dto::workout::{WorkoutListQuery, WorkoutListResponse},
    error::Result,
    models::Workout,
};
use uuid::Uuid;

/// Count the matching workouts, then fetch the requested page.
///
/// The two reads are not wrapped in a transaction, so a concurrent write can
/// leave the totals slightly out of step with the page.
pub async fn list_workouts(
    store: &dyn WorkoutStore,
    query: &WorkoutListQuery,
) -> Result<WorkoutListResponse> {
    let pagination = &query.pagination;

    let total_workouts = store.count(&query.filter).await?;
    let workouts = store
        .find_page(
            &query.filter,
            pagination.offset(),
            u64::from(pagination.limit()),
        )
        .await?;

    Ok(WorkoutListResponse::new(workouts, pagination, total_workouts))
}

/// Get a workout with every stored field
pub async fn get_workout(store: &dyn WorkoutStore, id: Uuid) -> Result<Workout> {
    store.find_by_id(id).await
}
