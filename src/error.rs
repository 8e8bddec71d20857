//! Custom error types for daily-allowance
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for daily-allowance operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllowanceError {
    /// Free text could not be converted to an amount or a date
    #[error("Invalid {field} '{input}': {reason}")]
    Parse {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// The deadline is today, so there are no days left to divide over
    #[error("Deadline {deadline} has arrived: no days remain to spread the balance over")]
    DeadlineReached { deadline: NaiveDate },

    /// The deadline lies in the past
    #[error("Deadline {deadline} passed {days_overdue} day(s) ago")]
    DeadlinePassed {
        deadline: NaiveDate,
        days_overdue: i64,
    },

    /// Expenditure amount rejected before reaching the allowance check
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// An amount computed from the budget does not fit in the money range
    #[error("Amount overflow while {0}")]
    Overflow(&'static str),

    /// An operation needs a budget but none has been initialized yet
    #[error("No active budget: initialize one with a balance and a deadline first")]
    NoActiveBudget,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AllowanceError {
    /// Create a parse error for an amount field
    pub fn amount_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            field: "amount",
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse error for a date field
    pub fn date_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            field: "date",
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if the deadline has arrived or passed
    pub fn is_deadline(&self) -> bool {
        matches!(
            self,
            Self::DeadlineReached { .. } | Self::DeadlinePassed { .. }
        )
    }
}

impl From<std::io::Error> for AllowanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AllowanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for daily-allowance operations
pub type AllowanceResult<T> = Result<T, AllowanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AllowanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_parse_error() {
        let err = AllowanceError::amount_parse("abc", "not a number");
        assert_eq!(err.to_string(), "Invalid amount 'abc': not a number");
        assert!(err.is_parse());
        assert!(!err.is_deadline());
    }

    #[test]
    fn test_deadline_errors() {
        let deadline = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let reached = AllowanceError::DeadlineReached { deadline };
        assert!(reached.is_deadline());
        assert!(reached.to_string().contains("2025-03-01"));

        let passed = AllowanceError::DeadlinePassed {
            deadline,
            days_overdue: 2,
        };
        assert_eq!(
            passed.to_string(),
            "Deadline 2025-03-01 passed 2 day(s) ago"
        );
    }

    #[test]
    fn test_overflow_display() {
        let err = AllowanceError::Overflow("recording the expenditure");
        assert_eq!(
            err.to_string(),
            "Amount overflow while recording the expenditure"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AllowanceError = io_err.into();
        assert!(matches!(err, AllowanceError::Io(_)));
    }
}
