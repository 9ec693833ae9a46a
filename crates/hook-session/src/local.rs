//! Embedded SQLite backend.

use crate::schema::{NewSession, SessionRecord};
use crate::store::{SessionStore, StoreError};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::time::Duration;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS sessions (
    session_id      TEXT PRIMARY KEY,
    cwd             TEXT,
    transcript_path TEXT,
    nickname        TEXT,
    persona_prompt  TEXT,
    voice           TEXT,
    engine          TEXT,
    hidden          BOOLEAN DEFAULT 0,
    created_at      TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";

/// Sessions table in a local database file.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open or create the database at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.busy_timeout(Duration::from_secs(2))?;

        Self::with_connection(conn)
    }

    /// Open an in-memory database for testing.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl SessionStore for LocalStore {
    fn backend(&self) -> &'static str {
        "local"
    }

    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT session_id, cwd, transcript_path, nickname, persona_prompt,
                        voice, engine, hidden, created_at
                 FROM sessions WHERE session_id = ?1",
                params![session_id],
                |row| {
                    Ok(SessionRecord {
                        session_id: row.get(0)?,
                        cwd: row.get(1)?,
                        transcript_path: row.get(2)?,
                        nickname: row.get(3)?,
                        persona_prompt: row.get(4)?,
                        voice: row.get(5)?,
                        engine: row.get(6)?,
                        hidden: row.get::<_, Option<bool>>(7)?.unwrap_or(false),
                        created_at: row.get(8)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    fn insert(&self, session: &NewSession) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO sessions (session_id, cwd, transcript_path, nickname, hidden)
             VALUES (?1, ?2, ?3, ?4, 0)",
            params![
                session.session_id,
                session.cwd,
                session.transcript_path,
                session.nickname
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session(id: &str, nickname: &str) -> NewSession {
        NewSession::new(id, "/tmp/project", "/tmp/project/t.jsonl").with_nickname(nickname)
    }

    #[test]
    fn test_insert_and_fetch() {
        let store = LocalStore::open_in_memory().unwrap();
        store.insert(&session("abc", "Greg")).unwrap();

        let record = store.fetch("abc").unwrap().unwrap();
        assert_eq!(record.session_id, "abc");
        assert_eq!(record.nickname(), Some("Greg"));
        assert_eq!(record.cwd.as_deref(), Some("/tmp/project"));
        assert_eq!(record.transcript_path.as_deref(), Some("/tmp/project/t.jsonl"));
        assert!(!record.hidden);
        assert!(record.created_at.is_some());
        assert_eq!(record.persona_prompt, None);
    }

    #[test]
    fn test_fetch_missing() {
        let store = LocalStore::open_in_memory().unwrap();
        assert_eq!(store.fetch("nope").unwrap(), None);
        assert_eq!(store.find("nope"), None);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = LocalStore::open_in_memory().unwrap();
        assert!(store.create(&session("abc", "Greg")));
        assert!(!store.create(&session("abc", "Muffin")));

        let record = store.find("abc").unwrap();
        assert_eq!(record.nickname(), Some("Greg"));
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("modlr.db");

        {
            let store = LocalStore::open(&path).unwrap();
            store.insert(&session("abc", "Pudding")).unwrap();
        }

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(
            store.find("abc").and_then(|r| r.nickname),
            Some("Pudding".to_string())
        );
    }

    #[test]
    fn test_null_columns_read_back() {
        let store = LocalStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO sessions (session_id, hidden) VALUES ('bare', NULL)",
                [],
            )
            .unwrap();

        let record = store.find("bare").unwrap();
        assert_eq!(record.nickname(), None);
        assert_eq!(record.cwd, None);
        assert!(!record.hidden);
    }
}
