//! Local session files under `{project_dir}/.claude/`.

use crate::schema::SessionEntry;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, OpenOptions};
use std::io::Write;

const LOG_FILE: &str = "sessions.jsonl";
const LATEST_FILE: &str = "current-session.json";

/// Append-only session log plus a "latest session" snapshot.
#[derive(Debug, Clone)]
pub struct SessionJournal {
    /// The `.claude` directory
    dir: Utf8PathBuf,
}

impl SessionJournal {
    /// Journal for a project directory.
    pub fn for_project(project_dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            dir: project_dir.as_ref().join(".claude"),
        }
    }

    pub fn log_path(&self) -> Utf8PathBuf {
        self.dir.join(LOG_FILE)
    }

    pub fn latest_path(&self) -> Utf8PathBuf {
        self.dir.join(LATEST_FILE)
    }

    /// Ensure the journal directory exists.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir))
    }

    /// Append one entry as a JSON line.
    pub fn append(&self, entry: &SessionEntry) -> Result<()> {
        self.ensure_dir()?;

        let path = self.log_path();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open session log: {}", path))?;

        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Replace the latest-session file with `entry`, pretty-printed.
    pub fn write_latest(&self, entry: &SessionEntry) -> Result<()> {
        let path = self.latest_path();
        let content = serde_json::to_string_pretty(entry)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write latest session: {}", path))?;
        Ok(())
    }

    /// Write both files, ignoring failures. Each write is attempted
    /// independently.
    pub fn record(&self, entry: &SessionEntry) {
        let _ = self.append(entry);
        let _ = self.write_latest(entry);
    }
}
