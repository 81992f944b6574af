pub mod models;
pub mod repository;
pub mod error;

// Re-exports
pub use models::{ExerciseRecord, UserRecord};
pub use repository::Database;
pub use error::{Error, Result};
