//! Session-end hook: store the recent transcript in mem0.
//!
//! Normalizes the host-supplied transcript to the most recent messages and
//! saves them under the configured user scope. Like the retrieval hook, every
//! path emits `{"action": "continue"}` and exits 0; a failed save is a warn
//! on stderr, never a host-visible error.

use anyhow::Result;
use hook_common::diagnostics;
use hook_common::prelude::*;
use hook_mem0::{normalize_transcript, MemoryClient, MemoryConfig};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init();

    let Ok(input) = HookInput::from_stdin() else {
        return HookOutput::proceed().write_stdout();
    };
    if input.transcript_entries().is_empty() {
        return HookOutput::proceed().write_stdout();
    }

    let config = match MemoryConfig::resolve(&EnvSource::from_process_env()) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring mem0 configuration: {e}");
            return HookOutput::proceed().write_stdout();
        }
    };
    if !config.has_api_key() {
        return HookOutput::proceed().write_stdout();
    }

    let messages = normalize_transcript(input.transcript_entries(), config.save_limit);
    if !messages.is_empty() {
        match MemoryClient::new(&config) {
            Ok(client) => {
                if let Err(e) = client.add(&messages).await {
                    warn!("transcript save failed: {e}");
                }
            }
            Err(e) => warn!("mem0 client unavailable: {e}"),
        }
    }

    HookOutput::proceed().write_stdout()
}
