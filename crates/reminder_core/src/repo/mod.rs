//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the store.
//! - Isolate the flat-file record format from store orchestration.
//!
//! # Invariants
//! - Repositories never hold an open file between calls.
//! - Save always replaces the full persisted collection.

pub mod record_repo;
