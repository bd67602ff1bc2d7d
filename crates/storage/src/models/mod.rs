pub mod category;
pub mod workout;

pub use category::{UnknownCategory, WorkoutCategory};
pub use workout::{NewWorkout, Workout, WorkoutSummary};
