//! Core domain logic for the reminder tool.
//! This crate owns the record model, its flat-file persistence and the
//! position-based store operations used by the CLI.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, DATA_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::due_date::{is_valid_due_date, DueDate, DueDateError, DUE_DATE_FORMAT};
pub use model::record::Record;
pub use repo::record_repo::{
    decode_records, encode_records, FileRecordRepository, RecordRepository, RepoError,
    RepoResult,
};
pub use service::reminder_store::{ReminderStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Opens the file-backed store described by `config`.
pub fn open_store(config: &AppConfig) -> ReminderStore<FileRecordRepository> {
    ReminderStore::open(FileRecordRepository::new(&config.data_file))
}
