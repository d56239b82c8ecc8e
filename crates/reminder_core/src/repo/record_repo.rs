//! Record repository contract and flat text file implementation.
//!
//! # Responsibility
//! - Read and rewrite the reminder file as groups of four lines.
//! - Keep the line format inside the persistence boundary.
//!
//! # Invariants
//! - Each record is written as `title`, `details`, `due_date`, `status`
//!   where status is `1` for done and `0` for pending.
//! - A trailing group with fewer than four lines is dropped on load.
//! - A missing file loads as an empty collection.
//! - Embedded newlines are not escaped.

use crate::model::record::Record;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const LINES_PER_RECORD: usize = 4;
const STATUS_DONE: &str = "1";
const STATUS_PENDING: &str = "0";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for record load/save operations.
#[derive(Debug)]
pub enum RepoError {
    /// The backing file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "reminder file `{}` unavailable: {source}", path.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Repository interface for whole-collection record persistence.
pub trait RecordRepository {
    /// Loads every persisted record in stored order.
    fn load_records(&self) -> RepoResult<Vec<Record>>;
    /// Replaces the persisted collection with `records`.
    fn save_records(&self, records: &[Record]) -> RepoResult<()>;
}

/// Flat text file repository.
#[derive(Debug, Clone)]
pub struct FileRecordRepository {
    path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordRepository for FileRecordRepository {
    fn load_records(&self) -> RepoResult<Vec<Record>> {
        let started_at = Instant::now();
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=records_load module=repo status=ok source=missing_file count=0");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=records_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let records = decode_records(&content);
        info!(
            "event=records_load module=repo status=ok count={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }

    fn save_records(&self, records: &[Record]) -> RepoResult<()> {
        let started_at = Instant::now();
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            writer.write_all(encode_records(records).as_bytes())?;
            writer.flush()
        };

        match write() {
            Ok(()) => {
                debug!(
                    "event=records_save module=repo status=ok count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=records_save module=repo status=error error_code=write_failed error={}",
                    err
                );
                Err(self.io_error(err))
            }
        }
    }
}

/// Parses file content into records, dropping a trailing partial group.
pub fn decode_records(content: &str) -> Vec<Record> {
    let lines: Vec<&str> = content.lines().collect();
    let groups = lines.chunks_exact(LINES_PER_RECORD);
    let dropped = groups.remainder().len();
    if dropped > 0 {
        warn!("event=records_decode module=repo status=partial dropped_lines={dropped}");
    }

    groups
        .map(|group| Record::restore(group[0], group[1], group[2], group[3] == STATUS_DONE))
        .collect()
}

/// Serializes records in sequence order, four lines each.
pub fn encode_records(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        for line in [
            record.title(),
            record.details(),
            record.due_date(),
            status_to_line(record.is_completed()),
        ] {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn status_to_line(completed: bool) -> &'static str {
    if completed {
        STATUS_DONE
    } else {
        STATUS_PENDING
    }
}
