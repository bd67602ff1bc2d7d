use std::sync::Arc;

use storage::WorkoutStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkoutStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }
}
