//! Reminder record model.
//!
//! # Responsibility
//! - Hold title, details, due date and completion state of one reminder.
//! - Provide the single mutation allowed after construction (toggle).
//!
//! # Invariants
//! - `title`, `details` and `due_date` are fixed at construction.
//! - New records start pending; persisted records keep their stored flag.

use super::due_date::DueDate;

/// One dated reminder entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    details: String,
    due_date: String,
    completed: bool,
}

impl Record {
    /// Creates a pending record from a validated due date.
    pub fn new(title: impl Into<String>, details: impl Into<String>, due_date: DueDate) -> Self {
        Self::restore(title, details, due_date.into_string(), false)
    }

    /// Rebuilds a record from persisted fields.
    ///
    /// The due date is taken as-is; persisted dates are not re-validated.
    pub fn restore(
        title: impl Into<String>,
        details: impl Into<String>,
        due_date: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            due_date: due_date.into(),
            completed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips pending <-> done.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::model::due_date::DueDate;

    #[test]
    fn new_record_starts_pending() {
        let due = DueDate::parse("15-03-2025").expect("date should be valid");
        let record = Record::new("Pay bills", "", due);

        assert_eq!(record.title(), "Pay bills");
        assert_eq!(record.details(), "");
        assert_eq!(record.due_date(), "15-03-2025");
        assert!(!record.is_completed());
    }

    #[test]
    fn restore_keeps_unvalidated_date() {
        let record = Record::restore("legacy", "imported", "someday", true);
        assert_eq!(record.due_date(), "someday");
        assert!(record.is_completed());
    }
}
