//! Hook input parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Main hook input structure received from Cursor.
///
/// Both hook shapes share this type: the prompt-submit hook reads
/// `prompt`/`query`, the session-end hook reads `transcript`/`messages`.
/// Fields this crate does not model are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookInput {
    /// User prompt (prompt-submit hooks)
    #[serde(default)]
    pub prompt: Option<String>,

    /// Alternate field name some host versions use for the prompt
    #[serde(default)]
    pub query: Option<String>,

    /// Session transcript (session-end hooks)
    #[serde(default)]
    pub transcript: Vec<TranscriptEntry>,

    /// Alternate field name for the transcript
    #[serde(default)]
    pub messages: Vec<TranscriptEntry>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One raw transcript entry.
///
/// Entries the host sends that are not `{role, content}` objects still parse
/// (as `Other`) so one junk entry cannot fail the whole document; they are
/// dropped during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranscriptEntry {
    Message {
        #[serde(default)]
        role: Option<String>,
        #[serde(default)]
        content: Option<RawContent>,
    },
    Other(serde_json::Value),
}

/// Raw `content` of a transcript entry: a scalar string, a list of mixed
/// parts, or some other shape we do not understand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Parts(Vec<ContentPart>),
    Other(serde_json::Value),
}

/// One part of a multi-part content list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Tagged {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        text: String,
    },
    Other(serde_json::Value),
}

impl HookInput {
    /// Read and parse hook input from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: HookInput = serde_json::from_str(&input)?;
        Ok(parsed)
    }

    /// Get the submitted prompt: the first non-empty of `prompt`, `query`.
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.query.as_deref().filter(|s| !s.is_empty()))
    }

    /// Get the raw transcript: `transcript` if non-empty, else `messages`.
    pub fn transcript_entries(&self) -> &[TranscriptEntry] {
        if !self.transcript.is_empty() {
            &self.transcript
        } else {
            &self.messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt() {
        let json = r#"{"prompt": "what did we decide about auth?"}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.prompt_text(), Some("what did we decide about auth?"));
    }

    #[test]
    fn test_query_is_prompt_fallback() {
        let json = r#"{"prompt": "", "query": "search this"}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.prompt_text(), Some("search this"));
    }

    #[test]
    fn test_no_prompt() {
        let input: HookInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.prompt_text(), None);
    }

    #[test]
    fn test_transcript_wins_over_messages() {
        let json = r#"{
            "transcript": [{"role": "user", "content": "a"}],
            "messages": [{"role": "user", "content": "b"}]
        }"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transcript_entries().len(), 1);
        let TranscriptEntry::Message { content, .. } = &input.transcript_entries()[0] else {
            panic!("expected a message entry");
        };
        assert!(matches!(content, Some(RawContent::Text(s)) if s == "a"));
    }

    #[test]
    fn test_messages_used_when_transcript_empty() {
        let json = r#"{"messages": [{"role": "assistant", "content": "hi"}]}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transcript_entries().len(), 1);
    }

    #[test]
    fn test_junk_entries_do_not_fail_the_document() {
        let json = r#"{"transcript": [
            {"role": "user", "content": "fine"},
            "not an object",
            {"role": 42, "content": "bad role"},
            {"role": "user", "content": {"nested": true}}
        ]}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.transcript_entries().len(), 4);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let json = r#"{"prompt": "hi", "workspace_roots": ["/w"]}"#;
        let input: HookInput = serde_json::from_str(json).unwrap();
        assert!(input.extra.contains_key("workspace_roots"));
    }
}
