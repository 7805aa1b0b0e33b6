//! Common utilities for Cursor lifecycle hooks.
//!
//! This crate provides shared functionality for all Rust-based hooks:
//! - JSON input/output parsing (the host protocol)
//! - `.env` file discovery and layering
//! - Diagnostic logging to stderr

pub mod diagnostics;
pub mod envfile;
pub mod input;
pub mod output;

pub use envfile::EnvSource;
pub use input::{HookInput, TranscriptEntry};
pub use output::HookOutput;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::envfile::EnvSource;
    pub use crate::input::{HookInput, TranscriptEntry};
    pub use crate::output::HookOutput;
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
