//! Hook input parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, IsTerminal, Read};

/// What triggered a SessionStart event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionSource {
    /// Fresh session
    Startup,
    /// `--resume` / `--continue`
    Resume,
    /// `/clear`
    Clear,
    /// Auto or manual compaction
    Compact,
    /// Missing or unrecognized
    #[default]
    #[serde(other)]
    Unknown,
}

impl SessionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Resume => "resume",
            Self::Clear => "clear",
            Self::Compact => "compact",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this event continues an earlier session.
    pub fn is_resumed(&self) -> bool {
        matches!(self, Self::Resume | Self::Compact)
    }
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SessionStart hook input received from Claude Code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookInput {
    /// Session ID
    #[serde(default)]
    pub session_id: Option<String>,

    /// Path to the conversation transcript
    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Working directory of the session
    #[serde(default)]
    pub cwd: Option<String>,

    /// Trigger source
    #[serde(default)]
    pub source: SessionSource,

    /// Hook event name
    #[serde(default)]
    pub hook_event_name: Option<String>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl HookInput {
    /// Read and parse hook input from stdin.
    ///
    /// Returns `None` when stdin is a terminal, empty, or not a JSON object.
    pub fn from_stdin() -> Option<Self> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return None;
        }

        let mut input = String::new();
        stdin.lock().read_to_string(&mut input).ok()?;
        Self::parse(&input)
    }

    /// Parse hook input from a raw string.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        serde_json::from_str(raw).ok()
    }

    /// Session ID, if present and non-empty.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Transcript path, empty when absent.
    pub fn transcript_path(&self) -> &str {
        self.transcript_path.as_deref().unwrap_or("")
    }

    /// Working directory, defaulting to the process's current directory.
    pub fn cwd_or_current(&self) -> String {
        match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_else(|_| ".".to_string()),
        }
    }
}
