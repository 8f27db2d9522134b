//! SQLite-backed persistence for emergency alerts and conversation logs.
//!
//! Both tables are append-only: nothing in the service reads rows back. The
//! [`Storage`] handle is a connection factory, not a connection; each
//! operation opens its own connection on the blocking pool and closes it
//! when the operation completes.

pub mod schema;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, params};

use crate::domain::{Language, Speaker};

/// Connection factory for the SQLite store.
///
/// Cheap to clone; holds only the database path. SQLite itself serializes
/// writers, so concurrent requests may block briefly on the write lock.
/// Lock failures propagate to the caller rather than being retried.
#[derive(Debug, Clone)]
pub struct Storage {
    db_path: PathBuf,
}

impl Storage {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(path: &Path) -> Result<Connection> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "busy_timeout", 5000)?;
        Ok(conn)
    }

    /// Ensure both tables exist.
    ///
    /// Idempotent: safe to run against an existing database, existing rows
    /// are left untouched. Opens and closes one connection.
    pub async fn init(&self) -> Result<()> {
        let path = self.db_path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = Self::connect(&path)?;
            conn.execute_batch(schema::SQLITE_SCHEMA)?;
            Ok(())
        })
        .await
        .context("Tokio spawn_blocking failed")?
    }

    /// Append one emergency record with status `sent`.
    pub async fn record_emergency(&self, user_id: String, message: String) -> Result<()> {
        let path = self.db_path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = Self::connect(&path)?;
            conn.execute(
                "INSERT INTO emergencies (user_id, message, timestamp, status)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, message, Utc::now().to_rfc3339(), "sent"],
            )?;
            Ok(())
        })
        .await
        .context("Tokio spawn_blocking failed")?
    }

    /// Append a user/assistant turn pair in one transaction.
    ///
    /// The two turns share `user_id`, `language`, and timestamp; either both
    /// rows land or neither does.
    pub async fn record_exchange(
        &self,
        user_id: String,
        language: Language,
        user_text: String,
        ai_text: String,
    ) -> Result<()> {
        let path = self.db_path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = Self::connect(&path)?;
            let now = Utc::now().to_rfc3339();

            let tx = conn.transaction()?;
            for (speaker, text) in [(Speaker::User, &user_text), (Speaker::Ai, &ai_text)] {
                tx.execute(
                    "INSERT INTO conversations (user_id, speaker, text, language, timestamp)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![user_id, speaker.as_str(), text, language.as_str(), now],
                )?;
            }
            tx.commit()?;
            Ok(())
        })
        .await
        .context("Tokio spawn_blocking failed")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("neurocare.db"));
        (dir, storage)
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let (_dir, storage) = temp_storage();
        storage.init().await.unwrap();
        storage
            .record_emergency("u1".into(), "help".into())
            .await
            .unwrap();

        // Re-running the initializer must neither fail nor lose rows.
        storage.init().await.unwrap();

        let conn = Connection::open(storage.path()).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM emergencies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn emergency_rows_are_marked_sent() {
        let (_dir, storage) = temp_storage();
        storage.init().await.unwrap();
        storage
            .record_emergency("u42".into(), "Help! I need immediate assistance".into())
            .await
            .unwrap();

        let conn = Connection::open(storage.path()).unwrap();
        let (user_id, message, status): (String, String, String) = conn
            .query_row(
                "SELECT user_id, message, status FROM emergencies",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(user_id, "u42");
        assert_eq!(message, "Help! I need immediate assistance");
        assert_eq!(status, "sent");
    }

    #[tokio::test]
    async fn exchange_writes_user_then_ai_pair() {
        let (_dir, storage) = temp_storage();
        storage.init().await.unwrap();
        storage
            .record_exchange(
                "u7".into(),
                Language::EnUs,
                "What time is it?".into(),
                "I understood: What time is it?. How can I help you further?".into(),
            )
            .await
            .unwrap();

        let conn = Connection::open(storage.path()).unwrap();
        let mut stmt = conn
            .prepare("SELECT user_id, speaker, text, language FROM conversations ORDER BY id")
            .unwrap();
        let turns: Vec<(String, String, String, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].1, "user");
        assert_eq!(turns[0].2, "What time is it?");
        assert_eq!(turns[1].1, "ai");
        for (user_id, _, _, language) in &turns {
            assert_eq!(user_id, "u7");
            assert_eq!(language, "en-US");
        }
    }
}
