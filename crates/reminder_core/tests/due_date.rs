use reminder_core::{is_valid_due_date, DueDate, DueDateError, Record};

#[test]
fn accepts_zero_padded_date() {
    let date = DueDate::parse("15-03-2025").unwrap();
    assert_eq!(date.as_str(), "15-03-2025");
}

#[test]
fn accepts_calendar_invalid_day_within_numeric_bounds() {
    // Month length is not checked.
    assert!(is_valid_due_date("31-02-2025"));
    assert!(is_valid_due_date("31-04-2025"));
}

#[test]
fn rejects_short_forms() {
    let err = DueDate::parse("5-3-25").unwrap_err();
    assert_eq!(err, DueDateError::InvalidFormat("5-3-25".to_string()));
    assert!(err.to_string().contains("DD-MM-YYYY"));
}

#[test]
fn rejects_other_separators_and_trailing_text() {
    for value in ["15/03/2025", "15-03-2025 ", "15-03-20255", "", "2025-03-15"] {
        assert!(DueDate::parse(value).is_err(), "{value:?} should be rejected");
    }
}

#[test]
fn record_keeps_validated_date() {
    let record = Record::new("Meeting", "Standup", DueDate::parse("01-01-2026").unwrap());
    assert_eq!(record.due_date(), "01-01-2026");
    assert!(!record.is_completed());
}
