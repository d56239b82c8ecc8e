//! Reminder store service.
//!
//! # Responsibility
//! - Hydrate the reminder sequence once at construction.
//! - Apply add/toggle/delete and rewrite persisted state after each one.
//! - Expose positional listings for display.
//!
//! # Invariants
//! - Positions are 1-based and recomputed on every listing; deleting shifts
//!   every later position down by one.
//! - A failed operation neither mutates the sequence nor saves.
//! - Persistence failures never reach callers: a failed load starts empty
//!   and a failed save is logged and skipped.

use crate::model::due_date::DueDate;
use crate::model::record::Record;
use crate::repo::record_repo::RecordRepository;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Position outside `1..=count`.
    InvalidPosition { position: i64, count: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition { position, count } => {
                if *count == 0 {
                    write!(f, "invalid position {position}: the list is empty")
                } else {
                    write!(f, "invalid position {position}: expected 1..={count}")
                }
            }
        }
    }
}

impl Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered reminder collection persisted through a repository.
pub struct ReminderStore<R: RecordRepository> {
    repo: R,
    records: Vec<Record>,
}

impl<R: RecordRepository> ReminderStore<R> {
    /// Creates the store and loads persisted records.
    pub fn open(repo: R) -> Self {
        let mut store = Self {
            repo,
            records: Vec::new(),
        };
        store.load();
        store
    }

    fn load(&mut self) {
        self.records = match self.repo.load_records() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback_empty error={}",
                    err
                );
                Vec::new()
            }
        };
        info!(
            "event=store_load module=store status=ok count={}",
            self.records.len()
        );
    }

    /// Rewrites persisted state from the current sequence.
    ///
    /// A write failure is logged and otherwise ignored.
    pub fn save(&self) {
        if let Err(err) = self.repo.save_records(&self.records) {
            error!(
                "event=store_save module=store status=skipped count={} error={}",
                self.records.len(),
                err
            );
        }
    }

    /// Appends a pending record and returns its position.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        details: impl Into<String>,
        due_date: DueDate,
    ) -> usize {
        self.records.push(Record::new(title, details, due_date));
        self.save();
        let position = self.records.len();
        info!("event=record_add module=store status=ok position={position}");
        position
    }

    /// Iterates `(position, record)` pairs in sequence order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index + 1, record))
    }

    pub fn get(&self, position: i64) -> Option<&Record> {
        self.index_of(position).ok().map(|index| &self.records[index])
    }

    /// Flips completion of the record at `position`.
    pub fn toggle(&mut self, position: i64) -> StoreResult<&Record> {
        let index = self.index_of(position)?;
        self.records[index].toggle_completed();
        self.save();
        info!(
            "event=record_toggle module=store status=ok position={position} completed={}",
            self.records[index].is_completed()
        );
        Ok(&self.records[index])
    }

    /// Removes the record at `position`.
    pub fn delete(&mut self, position: i64) -> StoreResult<Record> {
        let index = self.index_of(position)?;
        let removed = self.records.remove(index);
        self.save();
        info!(
            "event=record_delete module=store status=ok position={position} remaining={}",
            self.records.len()
        );
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn index_of(&self, position: i64) -> StoreResult<usize> {
        let count = self.records.len();
        match usize::try_from(position) {
            Ok(one_based) if (1..=count).contains(&one_based) => Ok(one_based - 1),
            _ => {
                warn!(
                    "event=position_check module=store status=rejected position={position} count={count}"
                );
                Err(StoreError::InvalidPosition { position, count })
            }
        }
    }
}
