//! Local mirror: a durable key-value snapshot of the record store.
//!
//! Both collections live as JSON arrays in the `mirror` table of a SQLite
//! file, under the keys [`PEOPLE_KEY`] and [`PRESENCES_KEY`]. The mirror is
//! never authoritative; it is what the session falls back to when the remote
//! API cannot be used.

use crate::core::store::RecordStore;
use crate::db::log::journal;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::StorageFailure;
use crate::models::{Person, Presence};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::de::DeserializeOwned;

pub const PEOPLE_KEY: &str = "personnes";
pub const PRESENCES_KEY: &str = "presences";

pub struct LocalMirror {
    pool: DbPool,
}

impl LocalMirror {
    /// Open (and migrate) the mirror file at `path`.
    pub fn open(path: &str) -> Result<Self, StorageFailure> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Open the mirror, or degrade to an in-memory one with a warning.
    /// The session keeps working; nothing survives the process.
    pub fn open_or_memory(path: &str) -> Result<Self, StorageFailure> {
        match Self::open(path) {
            Ok(m) => Ok(m),
            Err(e) => {
                log::warn!("local mirror unavailable at {path}: {e}; continuing in memory");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Result<Self, StorageFailure> {
        let pool = DbPool::in_memory()?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn path(&self) -> &str {
        &self.pool.path
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Write both collections in one transaction.
    pub fn save(&mut self, store: &RecordStore) -> Result<(), StorageFailure> {
        let people = serde_json::to_string(store.people())?;
        let presences = serde_json::to_string(store.presences())?;
        let now = Local::now().to_rfc3339();

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(
                    "INSERT INTO mirror (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                    updated_at = excluded.updated_at",
                )?;
                stmt.execute(params![PEOPLE_KEY, people, now])?;
                stmt.execute(params![PRESENCES_KEY, presences, now])?;
            }
            tx.commit()
        })?;

        log::debug!(
            "mirror saved: {} people, {} presences",
            store.people().len(),
            store.presences().len()
        );
        Ok(())
    }

    /// Last saved state. Missing or unreadable entries count as empty.
    pub fn load(&self) -> RecordStore {
        let people: Vec<Person> = self.read_entry(PEOPLE_KEY).unwrap_or_else(|e| {
            log::warn!("{e}; starting with no people");
            Vec::new()
        });
        let presences: Vec<Presence> = self.read_entry(PRESENCES_KEY).unwrap_or_else(|e| {
            log::warn!("{e}; starting with no presences");
            Vec::new()
        });

        RecordStore::from_parts(people, presences)
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageFailure> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row("SELECT value FROM mirror WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|e| StorageFailure::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Timestamp of the last successful save, if any.
    pub fn last_saved(&self) -> Result<Option<String>, StorageFailure> {
        let ts = self
            .pool
            .conn
            .query_row(
                "SELECT MAX(updated_at) FROM mirror WHERE updated_at <> ''",
                [],
                |row| row.get::<_, Option<String>>(0),
            )?;
        Ok(ts)
    }

    /// Best-effort journal line; a failure only shows up in the debug log.
    pub fn journal(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = journal(&self.pool.conn, operation, target, message) {
            log::debug!("journal write failed: {e}");
        }
    }
}
