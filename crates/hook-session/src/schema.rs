//! Session schema - stored records and local file entries.

use chrono::Local;
use hook_common::SessionSource;
use serde::{Deserialize, Serialize};

/// A stored session, as returned by either backend.
///
/// Field names are camelCase on the wire; the local database maps columns
/// explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique key
    #[serde(default)]
    pub session_id: String,

    #[serde(default)]
    pub cwd: Option<String>,

    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Immutable once set
    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default)]
    pub persona_prompt: Option<String>,

    #[serde(default)]
    pub voice: Option<String>,

    #[serde(default)]
    pub engine: Option<String>,

    #[serde(default)]
    pub hidden: bool,

    /// Assigned by the store
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SessionRecord {
    /// Stored nickname, if set and non-empty.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref().filter(|n| !n.is_empty())
    }
}

/// Insert payload for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub session_id: String,
    pub cwd: String,
    pub transcript_path: String,
    pub nickname: String,
}

impl NewSession {
    pub fn new(
        session_id: impl Into<String>,
        cwd: impl Into<String>,
        transcript_path: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            cwd: cwd.into(),
            transcript_path: transcript_path.into(),
            nickname: String::new(),
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }
}

/// Flat record written to the local session files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub session_id: String,
    /// Full display name
    pub session_name: String,
    pub nickname: String,
    pub transcript_path: String,
    pub cwd: String,
    pub source: SessionSource,
    /// Local time, RFC 3339
    pub timestamp: String,
    pub project_dir: String,
}

impl SessionEntry {
    /// Build an entry stamped with the current local time.
    pub fn new(
        session: &NewSession,
        session_name: impl Into<String>,
        source: SessionSource,
        project_dir: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session.session_id.clone(),
            session_name: session_name.into(),
            nickname: session.nickname.clone(),
            transcript_path: session.transcript_path.clone(),
            cwd: session.cwd.clone(),
            source,
            timestamp: Local::now().to_rfc3339(),
            project_dir: project_dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_camel_case() {
        let json = r#"{"sessionId": "abc", "transcriptPath": "/t.jsonl", "nickname": "Greg", "hidden": false}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_id, "abc");
        assert_eq!(record.transcript_path.as_deref(), Some("/t.jsonl"));
        assert_eq!(record.nickname(), Some("Greg"));
        assert_eq!(record.cwd, None);
    }

    #[test]
    fn test_blank_nickname_is_unset() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"sessionId": "abc", "nickname": ""}"#).unwrap();
        assert_eq!(record.nickname(), None);

        let record: SessionRecord =
            serde_json::from_str(r#"{"sessionId": "abc", "nickname": null}"#).unwrap();
        assert_eq!(record.nickname(), None);
    }

    #[test]
    fn test_record_without_session_id() {
        let record: SessionRecord = serde_json::from_str(r#"{"nickname": "Pebbles"}"#).unwrap();
        assert_eq!(record.session_id, "");
        assert_eq!(record.nickname(), Some("Pebbles"));
    }

    #[test]
    fn test_new_session_body() {
        let body = NewSession::new("abc", "/tmp", "/t.jsonl").with_nickname("Muffin");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["sessionId"], "abc");
        assert_eq!(value["transcriptPath"], "/t.jsonl");
        assert_eq!(value["nickname"], "Muffin");
    }

    #[test]
    fn test_entry_serialization() {
        let session = NewSession::new("abc", "/tmp", "").with_nickname("Greg");
        let entry = SessionEntry::new(&session, "Greg, PhD", SessionSource::Startup, "/tmp");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"session_name\":\"Greg, PhD\""));
        assert!(json.contains("\"source\":\"startup\""));
        assert!(json.contains("\"project_dir\":\"/tmp\""));
    }
}
