//! Session naming for Claude Code hooks.
//!
//! Provides:
//! - Whimsical name generation
//! - Session stores (local SQLite, remote HTTP)
//! - Get-or-create resolution
//! - Local session journal

pub mod config;
pub mod journal;
pub mod local;
pub mod names;
pub mod remote;
pub mod resolver;
pub mod schema;
pub mod store;

pub use config::{Backend, StoreConfig};
pub use journal::SessionJournal;
pub use local::LocalStore;
pub use names::{GeneratedName, generate_name};
pub use remote::RemoteStore;
pub use resolver::{Outcome, ResolvedName, resolve};
pub use schema::{NewSession, SessionEntry, SessionRecord};
pub use store::{SessionStore, StoreError, open_store};
