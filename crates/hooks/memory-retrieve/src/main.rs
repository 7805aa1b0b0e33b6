//! Prompt-submit hook: inject relevant mem0 memories before each prompt.
//!
//! Searches the hosted memory service for records similar to the submitted
//! prompt and hands them to the host as supplementary context. When auto-save
//! is on, the prompt itself is stored in the background so search latency is
//! not compounded by save latency.
//!
//! Every failure path still emits `{"action": "continue"}` and exits 0: the
//! host's prompt loop must never stall because this integration is
//! unreachable or misconfigured.

use anyhow::Result;
use hook_common::diagnostics;
use hook_common::prelude::*;
use hook_mem0::{format_memories, MemoryClient, MemoryConfig, MemoryMessage};
use std::time::Duration;
use tracing::warn;

/// How long to wait for the background save before moving on without it.
const SAVE_JOIN_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init();

    let Ok(input) = HookInput::from_stdin() else {
        return HookOutput::proceed().write_stdout();
    };
    let Some(prompt) = input.prompt_text() else {
        return HookOutput::proceed().write_stdout();
    };

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

    let client = match MemoryClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            warn!("mem0 client unavailable: {e}");
            return HookOutput::proceed().write_stdout();
        }
    };

    // Kick off the auto-save first so it overlaps the search.
    let save = config.auto_save.then(|| {
        let client = client.clone();
        let message = MemoryMessage::user(prompt);
        tokio::spawn(async move {
            if let Err(e) = client.add(&[message]).await {
                warn!("prompt auto-save failed: {e}");
            }
        })
    });

    let records = match client.search(prompt, config.top_k, config.threshold).await {
        Ok(records) => records,
        Err(e) => {
            warn!("memory search failed: {e}");
            Vec::new()
        }
    };

    // Bounded join: give the save a moment to finish, then abandon it. The
    // task keeps running on the runtime and is discarded at process exit.
    if let Some(handle) = save {
        let _ = tokio::time::timeout(SAVE_JOIN_TIMEOUT, handle).await;
    }

    let context = format_memories(&records);
    let output = if context.is_empty() {
        HookOutput::proceed()
    } else {
        HookOutput::proceed().with_context(context)
    };
    output.write_stdout()
}
