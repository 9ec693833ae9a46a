//! Get-or-create session naming.

use crate::names::{GeneratedName, generate_name};
use crate::schema::NewSession;
use crate::store::{HOOK_NAME, SessionStore};
use hook_common::HookDebugLog;

/// How a name was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stored nickname reused
    Resumed,
    /// Fresh name stored
    Created,
    /// Fresh name that was not stored
    Unsaved,
    /// No store available
    Ephemeral,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resumed => "resumed",
            Self::Created => "created",
            Self::Unsaved => "unsaved",
            Self::Ephemeral => "ephemeral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Stable short name
    pub nickname: String,
    /// Display name for this run
    pub full_name: String,
    pub outcome: Outcome,
}

impl ResolvedName {
    fn fresh(name: GeneratedName, outcome: Outcome) -> Self {
        Self {
            nickname: name.first,
            full_name: name.full,
            outcome,
        }
    }
}

/// Name a session, reusing the stored nickname when there is one.
///
/// `session.nickname` is ignored; a new record gets the generated first
/// name. Existing records are never modified. With no store, a fresh name
/// is returned and nothing is persisted.
pub fn resolve(store: Option<&dyn SessionStore>, session: &NewSession) -> ResolvedName {
    let Some(store) = store else {
        let resolved = ResolvedName::fresh(generate_name(), Outcome::Ephemeral);
        log_outcome(None, session, &resolved, "no session store available");
        return resolved;
    };

    let existing = store.find(&session.session_id);

    if let Some(nickname) = existing.as_ref().and_then(|r| r.nickname()) {
        let resolved = ResolvedName {
            nickname: nickname.to_string(),
            full_name: format!("{nickname} (resumed)"),
            outcome: Outcome::Resumed,
        };
        log_outcome(Some(store), session, &resolved, "stored nickname reused");
        return resolved;
    }

    let name = generate_name();

    let (outcome, reason) = if existing.is_some() {
        (Outcome::Unsaved, "stored record has no nickname")
    } else if store.create(&session.clone().with_nickname(name.first.as_str())) {
        (Outcome::Created, "new session stored")
    } else {
        (Outcome::Unsaved, "store rejected new session")
    };

    let resolved = ResolvedName::fresh(name, outcome);
    log_outcome(Some(store), session, &resolved, reason);
    resolved
}

fn log_outcome(
    store: Option<&dyn SessionStore>,
    session: &NewSession,
    resolved: &ResolvedName,
    reason: &str,
) {
    let _ = HookDebugLog::new(HOOK_NAME, &session.session_id)
        .with_backend(store.map_or("none", |s| s.backend()))
        .with_decision(resolved.outcome.as_str(), reason)
        .with_context(&resolved.full_name)
        .write();
}
