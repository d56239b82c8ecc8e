//! Due-date pattern validation.
//!
//! # Invariants
//! - Accepted shape is `DD-MM-YYYY` with DD in 01..=31, MM in 01..=12 and
//!   YYYY in 2000..=2099.
//! - Validation is pattern-only: month length and leap years are not checked,
//!   so `31-02-2025` is accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-(20\d{2})$")
        .expect("valid due date regex")
});

/// Expected input shape, used in prompts and error messages.
pub const DUE_DATE_FORMAT: &str = "DD-MM-YYYY";

/// Due-date validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    /// Input does not match `DD-MM-YYYY`.
    InvalidFormat(String),
}

impl Display for DueDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "invalid due date `{value}`; expected {DUE_DATE_FORMAT}")
            }
        }
    }
}

impl Error for DueDateError {}

/// A due-date string that matched the accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDate(String);

impl DueDate {
    /// Validates `input` verbatim; surrounding whitespace is not stripped.
    pub fn parse(input: impl Into<String>) -> Result<Self, DueDateError> {
        let value = input.into();
        if DUE_DATE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DueDateError::InvalidFormat(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns whether `value` matches the due-date pattern.
pub fn is_valid_due_date(value: &str) -> bool {
    DUE_DATE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_due_date, DueDate, DueDateError};

    #[test]
    fn parse_accepts_bounds() {
        for value in ["01-01-2000", "31-12-2099", "29-02-2023"] {
            assert!(DueDate::parse(value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        for value in [
            "00-01-2025",
            "32-01-2025",
            "15-13-2025",
            "15-00-2025",
            "15-03-1999",
            "15-03-2100",
        ] {
            assert!(!is_valid_due_date(value), "{value} should be rejected");
        }
    }

    #[test]
    fn parse_does_not_trim() {
        let err = DueDate::parse(" 15-03-2025").unwrap_err();
        assert_eq!(err, DueDateError::InvalidFormat(" 15-03-2025".to_string()));
    }
}
