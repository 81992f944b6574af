pub mod entities;
pub mod log_query;
pub mod error;

// Re-exports
pub use entities::{parse_duration, Exercise, User};
pub use log_query::{format_log_date, parse_date, LogQuery};
pub use error::{Error, Result};
