use chrono::NaiveDate;

use crate::{Error, Result};

/// A filtered, bounded read over a user's exercise ledger, built from the
/// raw query parameters of a log request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub user_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogQuery {
    /// Build a query from raw request parameters.
    ///
    /// Malformed `from`/`to` strings are rejected. A `limit` that is missing
    /// or does not parse to a positive integer means "no cap", never zero.
    pub fn from_params(
        user_id: String,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self> {
        let from = from.map(parse_date).transpose()?;
        let to = to.map(parse_date).transpose()?;

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|n| *n > 0);

        Ok(Self {
            user_id,
            from,
            to,
            limit,
        })
    }

    /// Whether a date falls inside the query's inclusive range.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Parse a `YYYY-MM-DD` calendar-date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Render a date the way it appears in log responses, e.g. "Thu Jan 05 2023".
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_both_bounds_inclusive() {
        let query = LogQuery::from_params(
            "u1".to_string(),
            Some("2023-01-01"),
            Some("2023-01-31"),
            None,
        )
        .unwrap();

        assert!(query.matches(date("2023-01-01")));
        assert!(query.matches(date("2023-01-15")));
        assert!(query.matches(date("2023-01-31")));
        assert!(!query.matches(date("2022-12-31")));
        assert!(!query.matches(date("2023-02-01")));
    }

    #[test]
    fn test_from_only() {
        let query =
            LogQuery::from_params("u1".to_string(), Some("2023-01-10"), None, None).unwrap();

        assert!(!query.matches(date("2023-01-09")));
        assert!(query.matches(date("2023-01-10")));
        assert!(query.matches(date("2024-06-01")));
    }

    #[test]
    fn test_to_only() {
        let query = LogQuery::from_params("u1".to_string(), None, Some("2023-01-10"), None).unwrap();

        assert!(query.matches(date("2020-01-01")));
        assert!(query.matches(date("2023-01-10")));
        assert!(!query.matches(date("2023-01-11")));
    }

    #[test]
    fn test_no_bounds_matches_everything() {
        let query = LogQuery::from_params("u1".to_string(), None, None, None).unwrap();

        assert!(query.matches(date("1970-01-01")));
        assert!(query.matches(date("2099-12-31")));
    }

    #[test]
    fn test_valid_limit() {
        let query = LogQuery::from_params("u1".to_string(), None, None, Some("2")).unwrap();
        assert_eq!(query.limit, Some(2));
    }

    #[test]
    fn test_unparseable_limit_means_no_cap() {
        for raw in ["abc", "", "0", "-3", "2.5"] {
            let query = LogQuery::from_params("u1".to_string(), None, None, Some(raw)).unwrap();
            assert_eq!(query.limit, None, "limit {:?} should be uncapped", raw);
        }

        let query = LogQuery::from_params("u1".to_string(), None, None, None).unwrap();
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let result = LogQuery::from_params("u1".to_string(), Some("not-a-date"), None, None);
        assert!(matches!(result, Err(Error::InvalidDate(_))));

        let result = LogQuery::from_params("u1".to_string(), None, Some("2023-13-40"), None);
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_format_log_date() {
        assert_eq!(format_log_date(date("2023-01-05")), "Thu Jan 05 2023");
        assert_eq!(format_log_date(date("2023-12-25")), "Mon Dec 25 2023");
    }
}
