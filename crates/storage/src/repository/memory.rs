// In-memory workout store.
//
// Backs router and service tests without a database. Records keep their
// insertion order, which is also the tie-break for equal start dates.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::WorkoutStore;
use crate::dto::workout::WorkoutFilter;
use crate::error::{Result, StorageError};
use crate::models::{NewWorkout, Workout, WorkoutSummary};

#[derive(Default)]
pub struct InMemoryWorkoutStore {
    workouts: RwLock<Vec<Workout>>,
    offline: AtomicBool,
}

impl InMemoryWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workouts(workouts: Vec<Workout>) -> Self {
        Self {
            workouts: RwLock::new(workouts),
            offline: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail with [`StorageError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory workout store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn count(&self, filter: &WorkoutFilter) -> Result<u64> {
        self.ensure_online()?;

        let guard = self.workouts.read().await;
        Ok(guard.iter().filter(|w| filter.matches(w)).count() as u64)
    }

    async fn find_page(
        &self,
        filter: &WorkoutFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<WorkoutSummary>> {
        self.ensure_online()?;

        let guard = self.workouts.read().await;
        let mut matching: Vec<&Workout> = guard.iter().filter(|w| filter.matches(w)).collect();
        matching.sort_by_key(|w| w.start_date);

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(WorkoutSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        self.ensure_online()?;

        self.workouts
            .read()
            .await
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_many(&self, workouts: &[NewWorkout]) -> Result<u64> {
        self.ensure_online()?;

        let now = Utc::now();
        let mut guard = self.workouts.write().await;
        guard.extend(workouts.iter().cloned().map(|new| Workout {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            start_date: new.start_date,
            category: new.category,
            duration: new.duration,
            dummy_data_large_text: new.dummy_data_large_text,
            dummy_data_array: new.dummy_data_array.map(Json),
            created_at: now,
            updated_at: now,
        }));

        Ok(workouts.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        self.ensure_online()?;

        let mut guard = self.workouts.write().await;
        let removed = guard.len() as u64;
        guard.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::workout::MonthRange;
    use crate::models::WorkoutCategory;
    use chrono::{TimeZone, Utc};

    fn new_workout(name: &str, month: u32, day: u32, category: WorkoutCategory) -> NewWorkout {
        NewWorkout {
            name: name.to_string(),
            description: format!("{name} description"),
            start_date: Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap(),
            category,
            duration: 45,
            dummy_data_large_text: None,
            dummy_data_array: None,
        }
    }

    async fn seeded() -> InMemoryWorkoutStore {
        let store = InMemoryWorkoutStore::new();
        store
            .insert_many(&[
                new_workout("late", 3, 20, WorkoutCategory::C1),
                new_workout("early", 3, 1, WorkoutCategory::C3),
                new_workout("tie-a", 3, 10, WorkoutCategory::C1),
                new_workout("tie-b", 3, 10, WorkoutCategory::C2),
                new_workout("april", 4, 1, WorkoutCategory::C1),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_page_is_sorted_by_start_date_with_stable_ties() {
        let store = seeded().await;

        let page = store.find_page(&WorkoutFilter::default(), 0, 10).await.unwrap();
        let names: Vec<_> = page.iter().map(|w| w.name.as_str()).collect();

        assert_eq!(names, ["early", "tie-a", "tie-b", "late", "april"]);
    }

    #[tokio::test]
    async fn test_month_upper_bound_is_exclusive() {
        let store = seeded().await;
        let filter = WorkoutFilter {
            month: MonthRange::new(2024, 3),
            categories: None,
        };

        // "april" starts exactly at the end of the March range
        assert_eq!(store.count(&filter).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_skip_past_end_returns_empty_page() {
        let store = seeded().await;
        let page = store.find_page(&WorkoutFilter::default(), 50, 10).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = seeded().await;
        store.set_offline(true);

        let err = store.count(&WorkoutFilter::default()).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));

        store.set_offline(false);
        assert_eq!(store.count(&WorkoutFilter::default()).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_find_by_id_and_delete_all() {
        let store = seeded().await;
        let first = store.find_page(&WorkoutFilter::default(), 0, 1).await.unwrap();

        let detail = store.find_by_id(first[0].id).await.unwrap();
        assert_eq!(detail.name, "early");

        assert_eq!(store.delete_all().await.unwrap(), 5);
        assert!(store.find_by_id(first[0].id).await.unwrap_err().is_not_found());
    }
}
