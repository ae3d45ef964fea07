//! redb-based scratch space for in-progress sessions
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `dish_drafts` | `session_id` | `DishDraft` | Current dish draft |
//! | `confirmed_dishes` | `session_id` | `Vec<ConfirmedDish>` | In-progress order |
//!
//! Drafts survive navigation away and kiosk restarts; a session's rows
//! are removed on successful submission or explicit cancellation.

use crate::composer::{ConfirmedDish, DishDraft};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for dish drafts: key = session_id, value = JSON-serialized DishDraft
const DRAFTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("dish_drafts");

/// Table for confirmed dishes: key = session_id, value = JSON-serialized Vec<ConfirmedDish>
const DISHES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("confirmed_dishes");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::KioskError {
    fn from(err: StorageError) -> Self {
        shared::KioskError::CollaboratorUnavailable(err.to_string())
    }
}

/// Session scratch storage backed by redb
///
/// redb commits are durable as soon as `commit()` returns, which keeps
/// drafts intact across unexpected kiosk shutdowns.
#[derive(Clone)]
pub struct DraftStorage {
    db: Arc<Database>,
}

impl DraftStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create tables up front so read transactions never miss them.
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DRAFTS_TABLE)?;
            let _ = write_txn.open_table(DISHES_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Persist the current dish draft for a session
    pub fn save_draft(&self, session_id: &str, draft: &DishDraft) -> StorageResult<()> {
        let bytes = serde_json::to_vec(draft)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.insert(session_id, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a session's dish draft, if any
    pub fn load_draft(&self, session_id: &str) -> StorageResult<Option<DishDraft>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;
        match table.get(session_id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Persist the in-progress order (confirmed dishes) for a session
    pub fn save_dishes(&self, session_id: &str, dishes: &[ConfirmedDish]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(dishes)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DISHES_TABLE)?;
            table.insert(session_id, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a session's confirmed dishes; empty when none were saved
    pub fn load_dishes(&self, session_id: &str) -> StorageResult<Vec<ConfirmedDish>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DISHES_TABLE)?;
        match table.get(session_id)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Drop all scratch data for a session (submission or cancellation)
    pub fn clear_session(&self, session_id: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut drafts = write_txn.open_table(DRAFTS_TABLE)?;
            drafts.remove(session_id)?;
            let mut dishes = write_txn.open_table(DISHES_TABLE)?;
            dishes.remove(session_id)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn sample_draft() -> DishDraft {
        let mut draft = DishDraft::new();
        draft.set(1, 1);
        draft.set(20, 2);
        draft
    }

    fn sample_dish() -> ConfirmedDish {
        ConfirmedDish {
            id: Uuid::new_v4(),
            ingredients: BTreeMap::from([(1, 1), (20, 2)]),
            total: 3500,
            confirmed_at: Utc::now(),
        }
    }

    #[test]
    fn test_draft_round_trip() {
        let storage = DraftStorage::open_in_memory().unwrap();
        assert!(storage.load_draft("kiosk-1").unwrap().is_none());

        let draft = sample_draft();
        storage.save_draft("kiosk-1", &draft).unwrap();
        assert_eq!(storage.load_draft("kiosk-1").unwrap(), Some(draft));

        // Sessions are isolated.
        assert!(storage.load_draft("kiosk-2").unwrap().is_none());
    }

    #[test]
    fn test_dishes_round_trip() {
        let storage = DraftStorage::open_in_memory().unwrap();
        assert!(storage.load_dishes("kiosk-1").unwrap().is_empty());

        let dishes = vec![sample_dish(), sample_dish()];
        storage.save_dishes("kiosk-1", &dishes).unwrap();
        assert_eq!(storage.load_dishes("kiosk-1").unwrap(), dishes);
    }

    #[test]
    fn test_clear_session_removes_both_tables() {
        let storage = DraftStorage::open_in_memory().unwrap();
        storage.save_draft("kiosk-1", &sample_draft()).unwrap();
        storage.save_dishes("kiosk-1", &[sample_dish()]).unwrap();

        storage.clear_session("kiosk-1").unwrap();
        assert!(storage.load_draft("kiosk-1").unwrap().is_none());
        assert!(storage.load_dishes("kiosk-1").unwrap().is_empty());
    }

    #[test]
    fn test_reopen_preserves_drafts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drafts.redb");

        let draft = sample_draft();
        {
            let storage = DraftStorage::open(&path).unwrap();
            storage.save_draft("kiosk-1", &draft).unwrap();
        }
        let storage = DraftStorage::open(&path).unwrap();
        assert_eq!(storage.load_draft("kiosk-1").unwrap(), Some(draft));
    }
}
