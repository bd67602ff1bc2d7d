use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::WorkoutCategory;

/// A workout as stored, including the detail-only filler fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub category: WorkoutCategory,
    /// Duration in minutes.
    pub duration: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dummy_data_large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub dummy_data_array: Option<Json<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-view projection of a [`Workout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub category: WorkoutCategory,
    pub duration: i32,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            name: workout.name.clone(),
            description: workout.description.clone(),
            start_date: workout.start_date,
            category: workout.category,
            duration: workout.duration,
        }
    }
}

/// Insert payload. Identifier and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub category: WorkoutCategory,
    pub duration: i32,
    pub dummy_data_large_text: Option<String>,
    pub dummy_data_array: Option<Vec<String>>,
}
