//! Session store contract shared by the local and remote backends.

use crate::config::{Backend, StoreConfig};
use crate::local::LocalStore;
use crate::remote::RemoteStore;
use crate::schema::{NewSession, SessionRecord};
use hook_common::HookDebugLog;
use std::path::PathBuf;
use thiserror::Error;

pub(crate) const HOOK_NAME: &str = "session-tracker";

/// Errors raised by store primitives. Never surfaced past [`SessionStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open session database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("session database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("session service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session service returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Get-or-create storage for session nicknames.
///
/// Implementors provide the fallible `fetch`/`insert`; callers use
/// `find`/`create`, which never fail.
pub trait SessionStore {
    /// Short backend label for logs.
    fn backend(&self) -> &'static str;

    /// Look up a session by id. `Ok(None)` when it does not exist.
    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Insert a new session.
    fn insert(&self, session: &NewSession) -> Result<(), StoreError>;

    /// Look up a session, treating any failure as absent.
    fn find(&self, session_id: &str) -> Option<SessionRecord> {
        match self.fetch(session_id) {
            Ok(record) => record,
            Err(e) => {
                log_store_error(self.backend(), session_id, "find", &e);
                None
            }
        }
    }

    /// Insert a session, reporting success. Failures are not retried.
    fn create(&self, session: &NewSession) -> bool {
        match self.insert(session) {
            Ok(()) => true,
            Err(e) => {
                log_store_error(self.backend(), &session.session_id, "create", &e);
                false
            }
        }
    }
}

fn log_store_error(backend: &str, session_id: &str, op: &str, error: &StoreError) {
    let _ = HookDebugLog::new(HOOK_NAME, session_id)
        .with_backend(backend)
        .with_decision("store-error", &error.to_string())
        .with_context(op)
        .write();
}

/// Open the configured backend.
///
/// Returns an error only when the backend cannot be constructed at all
/// (e.g. the database file cannot be opened).
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn SessionStore>, StoreError> {
    match config.backend {
        Backend::Local => Ok(Box::new(LocalStore::open(&config.db_path)?)),
        Backend::Remote => Ok(Box::new(RemoteStore::new(&config.api_url, config.timeout)?)),
    }
}
