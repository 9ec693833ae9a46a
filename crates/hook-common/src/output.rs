//! Hook output generation for stdout.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Hook-specific output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Hook event name
    pub hook_event_name: String,

    /// Additional context message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

/// Main hook output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    /// Hook-specific output
    pub hook_specific_output: HookSpecificOutput,
}

impl HookOutput {
    /// Create a new hook output for SessionStart.
    pub fn session_start() -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "SessionStart".to_string(),
                additional_context: None,
            },
        }
    }

    /// Add additional context message.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.hook_specific_output.additional_context = Some(context.into());
        self
    }

    /// Write the output to stdout as a single line.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer(&mut stdout, self)?;
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_start_shape() {
        let output = HookOutput::session_start().with_context("Session: Greg the Recursive");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["hookSpecificOutput"]["hookEventName"], "SessionStart");
        assert_eq!(
            value["hookSpecificOutput"]["additionalContext"],
            "Session: Greg the Recursive"
        );
    }

    #[test]
    fn test_context_omitted_when_unset() {
        let json = serde_json::to_string(&HookOutput::session_start()).unwrap();
        assert!(!json.contains("additionalContext"));
    }
}
