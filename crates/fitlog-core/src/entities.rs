use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub exercise_count: i32,
}

impl User {
    /// Create a user with a fresh id and a zero exercise count.
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            exercise_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub user_id: String,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

impl Exercise {
    /// Create an exercise entry. A missing date resolves to the current
    /// calendar day at the server's local time.
    pub fn new(
        user_id: String,
        description: String,
        duration: i32,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            user_id,
            description,
            duration,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

/// Coerce a submitted duration field to an integer, failing closed on
/// anything that is not one.
pub fn parse_duration(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Error::InvalidDuration(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_zero() {
        let user = User::new("alice".to_string());

        assert_eq!(user.username, "alice");
        assert_eq!(user.exercise_count, 0);
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_user_ids_are_unique() {
        let a = User::new("alice".to_string());
        let b = User::new("alice".to_string());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_exercise_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        let exercise = Exercise::new("u1".to_string(), "run".to_string(), 30, Some(date));

        assert_eq!(exercise.date, date);
        assert_eq!(exercise.duration, 30);
    }

    #[test]
    fn test_exercise_defaults_to_today() {
        let exercise = Exercise::new("u1".to_string(), "run".to_string(), 30, None);

        assert_eq!(exercise.date, Local::now().date_naive());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30").unwrap(), 30);
        assert_eq!(parse_duration(" 45 ").unwrap(), 45);
        assert!(parse_duration("thirty").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("12.5").is_err());
    }
}
