//! Reminder domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store, the repository and the CLI.
//! - Own due-date pattern validation used at creation time.
//!
//! # Invariants
//! - A record has no identity of its own; it is addressed by its 1-based
//!   position inside the owning store.
//! - Only the completion flag mutates after construction.

pub mod due_date;
pub mod record;
