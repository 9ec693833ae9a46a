//! SessionStart hook: Name the session and record it.
//!
//! Looks up (or creates) the session's nickname in the MODLR session store,
//! appends the session to `.claude/sessions.jsonl`, refreshes
//! `.claude/current-session.json`, and injects the session details as
//! context.
//!
//! Fires on: startup, resume, clear, compact.

use hook_common::prelude::*;
use hook_session::{
    NewSession, SessionEntry, SessionJournal, StoreConfig, open_store, resolve,
};

const HOOK_NAME: &str = "session-tracker";

fn main() -> Result<()> {
    // No input, a terminal, or garbage: nothing to do
    let Some(input) = HookInput::from_stdin() else {
        return Ok(());
    };
    let Some(session_id) = input.session_id() else {
        return Ok(());
    };

    let cwd = input.cwd_or_current();
    let project_dir = std::env::var("CLAUDE_PROJECT_DIR").unwrap_or_else(|_| cwd.clone());
    let session = NewSession::new(session_id, cwd, input.transcript_path());
    hook_common::debug::init(&project_dir, input.source.as_str());

    let config = StoreConfig::from_env();
    let store = match open_store(&config) {
        Ok(store) => Some(store),
        Err(e) => {
            let _ = HookDebugLog::new(HOOK_NAME, session_id)
                .with_backend(config.backend_name())
                .with_decision("store-unavailable", &e.to_string())
                .write();
            None
        }
    };

    let resolved = resolve(store.as_deref(), &session);
    let session = session.with_nickname(resolved.nickname.as_str());

    let entry = SessionEntry::new(&session, resolved.full_name, input.source, project_dir);
    SessionJournal::for_project(&entry.project_dir).record(&entry);

    HookOutput::session_start()
        .with_context(format_context(&entry))
        .write_stdout()?;

    Ok(())
}

/// Session details injected into the conversation.
fn format_context(entry: &SessionEntry) -> String {
    let headline = if entry.source.is_resumed() {
        format!("Session: {} (resumed from {})", entry.nickname, entry.source)
    } else {
        format!("Session: {}", entry.session_name)
    };

    [
        headline,
        format!("Session ID: {}", entry.session_id),
        format!("Project: {}", entry.project_dir),
        format!("Transcript: {}", entry.transcript_path),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(session_name: &str, source: SessionSource) -> SessionEntry {
        let session = NewSession::new("abc", "/tmp", "/tmp/t.jsonl").with_nickname("Greg");
        SessionEntry::new(&session, session_name, source, "/work/project")
    }

    #[test]
    fn test_startup_context() {
        let context = format_context(&entry("Greg, Esq.", SessionSource::Startup));
        assert_eq!(
            context,
            "Session: Greg, Esq.\n\
             Session ID: abc\n\
             Project: /work/project\n\
             Transcript: /tmp/t.jsonl"
        );
    }

    #[test]
    fn test_resumed_headline() {
        let context = format_context(&entry("Greg (resumed)", SessionSource::Compact));
        let headline = context.lines().next().unwrap();
        insta::assert_snapshot!(headline, @"Session: Greg (resumed from compact)");
    }

    #[test]
    fn test_clear_keeps_full_name() {
        let context = format_context(&entry("Greg (resumed)", SessionSource::Clear));
        assert_eq!(context.lines().next(), Some("Session: Greg (resumed)"));
        assert_eq!(context.lines().count(), 4);
    }
}
