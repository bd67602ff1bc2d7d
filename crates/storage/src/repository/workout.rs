use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::WorkoutStore;
use crate::dto::workout::WorkoutFilter;
use crate::error::{Result, StorageError};
use crate::models::{NewWorkout, Workout, WorkoutSummary};

// Postgres caps a statement at 65535 bind parameters; 7 per row.
const INSERT_BATCH_SIZE: usize = 1000;

pub struct WorkoutRepository {
    pool: PgPool,
}

impl WorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &WorkoutFilter) {
    if let Some(range) = filter.month {
        query.push(" AND start_date >= ");
        query.push_bind(range.start);
        query.push(" AND start_date < ");
        query.push_bind(range.end);
    }

    if let Some(ref categories) = filter.categories {
        query.push(" AND category::text = ANY(");
        query.push_bind(categories.clone());
        query.push(")");
    }
}

#[async_trait]
impl WorkoutStore for WorkoutRepository {
    async fn count(&self, filter: &WorkoutFilter) -> Result<u64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM workouts WHERE 1=1");
        push_filter(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn find_page(
        &self,
        filter: &WorkoutFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<WorkoutSummary>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT id, name, description, start_date, category, duration
            FROM workouts
            WHERE 1=1
            "#,
        );
        push_filter(&mut query, filter);

        // equal start dates keep insertion order
        query.push(" ORDER BY start_date ASC, insertion_seq ASC LIMIT ");
        query.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        query.push(" OFFSET ");
        query.push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

        let workouts = query
            .build_query_as::<WorkoutSummary>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(skip, limit, returned = workouts.len(), "Fetched workout page");

        Ok(workouts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, description, start_date, category, duration,
                   dummy_data_large_text, dummy_data_array, created_at, updated_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    async fn insert_many(&self, workouts: &[NewWorkout]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for batch in workouts.chunks(INSERT_BATCH_SIZE) {
            let mut query = QueryBuilder::<Postgres>::new(
                "INSERT INTO workouts (name, description, start_date, category, duration, \
                 dummy_data_large_text, dummy_data_array) ",
            );

            query.push_values(batch, |mut row, workout| {
                row.push_bind(workout.name.clone())
                    .push_bind(workout.description.clone())
                    .push_bind(workout.start_date)
                    .push_bind(workout.category)
                    .push_bind(workout.duration)
                    .push_bind(workout.dummy_data_large_text.clone())
                    .push_bind(workout.dummy_data_array.clone().map(sqlx::types::Json));
            });

            inserted += query.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM workouts")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
