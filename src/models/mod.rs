pub mod goal;
pub mod session;
pub mod wellness;

pub use goal::{GoalSettings, GoalType};
pub use session::{parse_history, HistoryError, SessionExercise, SetRecord, WorkoutSession};
pub use wellness::WellnessEntry;
