//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory reminder sequence and its position-based operations.
//! - Keep CLI callers decoupled from persistence details.

pub mod reminder_store;
