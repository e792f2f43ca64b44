// Timetable combination engine and the pipeline built around it.
pub mod budget;
pub mod classify;
pub mod combine;
pub mod conflict;
pub mod credits;
pub mod filters;
pub mod partial;
pub mod recommend;

// Reexport the entry points callers normally need
pub use budget::StepBudget;
pub use classify::classify;
pub use combine::{SearchOutcome, generate, generate_within, validate_base};
pub use conflict::{OccupancyGrid, find_conflict, has_conflict};
pub use credits::{credits_by_type, meets_criteria, total_credits};
pub use filters::{TimePreference, TimeWindow, apply_time_preference};
pub use partial::{find_partial_combinations, find_partial_combinations_within};
pub use recommend::recommend;
