//! Debug logging for hooks.
//!
//! Logs hook decisions to a JSONL file. Stdout belongs to the hook protocol
//! and stderr is shown to the user, so this file is the only trace.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const MAX_FIELD_CHARS: usize = 200;

/// Per-process values stamped on every entry.
#[derive(Debug)]
struct LogScope {
    project_dir: PathBuf,
    source: String,
}

static SCOPE: OnceLock<LogScope> = OnceLock::new();

/// Set the project directory the log lives under and the trigger source
/// recorded on every entry. The first call wins.
pub fn init(project_dir: impl Into<PathBuf>, source: &str) {
    let _ = SCOPE.set(LogScope {
        project_dir: project_dir.into(),
        source: source.to_string(),
    });
}

/// Debug log entry for hook execution
#[derive(Debug, Serialize)]
pub struct HookDebugLog {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Hook name (e.g., "session-tracker")
    pub hook_name: String,
    /// Session the entry belongs to
    pub session_id: String,
    /// Trigger source
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// Storage backend in use
    #[serde(skip_serializing_if = "String::is_empty")]
    pub backend: String,
    /// Decision made (resumed/created/unsaved/ephemeral/store-error)
    pub decision: String,
    /// Reason for the decision
    pub reason: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl HookDebugLog {
    pub fn new(hook_name: &str, session_id: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            hook_name: hook_name.to_string(),
            session_id: session_id.to_string(),
            source: SCOPE.get().map(|s| s.source.clone()).unwrap_or_default(),
            backend: String::new(),
            decision: String::new(),
            reason: String::new(),
            context: None,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    pub fn with_backend(mut self, backend: &str) -> Self {
        self.backend = backend.to_string();
        self
    }

    pub fn with_decision(mut self, decision: &str, reason: &str) -> Self {
        self.decision = decision.to_string();
        self.reason = truncate(reason);
        self
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(truncate(context));
        self
    }

    /// Write log entry to file
    pub fn write(&self) -> std::io::Result<()> {
        self.write_in(&project_dir())
    }

    /// Write log entry under `project_dir`, if debugging is enabled there.
    pub fn write_in(&self, project_dir: &Path) -> std::io::Result<()> {
        if !debug_enabled_in(project_dir) {
            return Ok(());
        }

        let log_path = log_path_in(project_dir);

        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let json = serde_json::to_string(self).unwrap_or_default();
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_FIELD_CHARS {
        let head: String = text.chars().take(MAX_FIELD_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Project directory from [`init`], else `CLAUDE_PROJECT_DIR`, else `.`.
fn project_dir() -> PathBuf {
    if let Some(scope) = SCOPE.get() {
        return scope.project_dir.clone();
    }
    PathBuf::from(std::env::var("CLAUDE_PROJECT_DIR").unwrap_or_else(|_| ".".to_string()))
}

fn debug_enabled_in(project_dir: &Path) -> bool {
    if std::env::var("CLAUDE_HOOK_DEBUG").is_ok() {
        return true;
    }

    project_dir.join(".claude").join(".hook-debug").exists()
}

fn log_path_in(project_dir: &Path) -> PathBuf {
    project_dir
        .join(".claude")
        .join("logs")
        .join("hook-debug.jsonl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_serialization() {
        let log = HookDebugLog::new("session-tracker", "abc")
            .with_source("resume")
            .with_backend("local")
            .with_decision("resumed", "stored nickname reused");

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"hook_name\":\"session-tracker\""));
        assert!(json.contains("\"decision\":\"resumed\""));
        assert!(json.contains("\"backend\":\"local\""));
        assert!(!json.contains("\"context\""));
    }

    #[test]
    fn test_empty_fields_skipped() {
        let json = serde_json::to_string(&HookDebugLog::new("session-tracker", "abc")).unwrap();
        assert!(!json.contains("\"source\""));
        assert!(!json.contains("\"backend\""));
    }

    #[test]
    fn test_write_with_marker() {
        let dir = tempfile::tempdir().unwrap();
        let claude_dir = dir.path().join(".claude");
        std::fs::create_dir_all(&claude_dir).unwrap();
        std::fs::write(claude_dir.join(".hook-debug"), "").unwrap();

        HookDebugLog::new("session-tracker", "abc")
            .with_decision("created", "new session stored")
            .write_in(dir.path())
            .unwrap();

        let content = std::fs::read_to_string(log_path_in(dir.path())).unwrap();
        assert_eq!(content.lines().count(), 1);
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["session_id"], "abc");
        assert_eq!(entry["decision"], "created");
    }

    #[test]
    fn test_write_without_marker_is_noop() {
        if std::env::var("CLAUDE_HOOK_DEBUG").is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();

        HookDebugLog::new("session-tracker", "abc")
            .with_decision("created", "new session stored")
            .write_in(dir.path())
            .unwrap();

        assert!(!log_path_in(dir.path()).exists());
    }

    #[test]
    fn test_truncation() {
        let long_reason = "é".repeat(500);
        let log = HookDebugLog::new("test", "abc").with_decision("store-error", &long_reason);

        assert_eq!(log.reason.chars().count(), MAX_FIELD_CHARS + 3);
        assert!(log.reason.ends_with("..."));
    }
}
