// Root of the `sugang` crate: weekly timetable recommendations from a course
// catalog, a set of mandatory courses and per-type credit ranges.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod models;

pub use algorithm::{generate, recommend};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
