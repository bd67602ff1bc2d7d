pub mod memory;
pub mod workout;

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::workout::WorkoutFilter;
use crate::error::Result;
use crate::models::{NewWorkout, Workout, WorkoutSummary};

/// Read and bulk-load access to the workout collection.
///
/// Handed to the web layer as `Arc<dyn WorkoutStore>` so the HTTP surface
/// never touches a global connection.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Number of workouts matching `filter`, ignoring pagination.
    async fn count(&self, filter: &WorkoutFilter) -> Result<u64>;

    /// Matching workouts ordered by `start_date` ascending, skipping `skip`
    /// and returning at most `limit`. Equal start dates keep insertion order.
    async fn find_page(
        &self,
        filter: &WorkoutFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<WorkoutSummary>>;

    /// Full record, or [`StorageError::NotFound`](crate::error::StorageError::NotFound).
    async fn find_by_id(&self, id: Uuid) -> Result<Workout>;

    async fn insert_many(&self, workouts: &[NewWorkout]) -> Result<u64>;

    async fn delete_all(&self) -> Result<u64>;
}
