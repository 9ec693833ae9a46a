//! Common utilities for Claude Code hooks.
//!
//! This crate provides shared functionality for Rust-based hooks:
//! - JSON input parsing
//! - JSON output generation
//! - Debug logging

pub mod debug;
pub mod input;
pub mod output;

pub use debug::HookDebugLog;
pub use input::{HookInput, SessionSource};
pub use output::{HookOutput, HookSpecificOutput};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::debug::HookDebugLog;
    pub use crate::input::{HookInput, SessionSource};
    pub use crate::output::HookOutput;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
