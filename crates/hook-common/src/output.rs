//! Hook output written to stdout.

use serde::{Deserialize, Serialize};

/// The single response document a hook emits to the host.
///
/// `action` is always `"continue"`: these hooks annotate the host's behavior,
/// they never block it. `context` is omitted entirely (not set to an empty
/// string) when there is nothing to add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookOutput {
    pub action: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl HookOutput {
    /// The default "proceed normally" response.
    pub fn proceed() -> Self {
        Self {
            action: "continue".to_string(),
            context: None,
        }
    }

    /// Attach supplementary context for the host to inject.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Serialize to stdout as a single JSON line.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string(self)?);
        Ok(())
    }
}
