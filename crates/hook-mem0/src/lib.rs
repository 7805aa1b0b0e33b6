//! mem0 integration for Cursor lifecycle hooks.
//!
//! Everything the two hook binaries share: typed configuration resolved from
//! the environment, the HTTP client for the hosted mem0 API, transcript
//! normalization, and context formatting. The remote service is treated as a
//! fallible collaborator throughout: every operation returns a typed error
//! the binaries degrade to "no memories" / "save skipped".

pub mod client;
pub mod config;
pub mod format;
pub mod transcript;

pub use client::{MemoryClient, MemoryError, MemoryRecord};
pub use config::{ConfigError, MemoryConfig};
pub use format::format_memories;
pub use transcript::{normalize_transcript, MemoryMessage};
