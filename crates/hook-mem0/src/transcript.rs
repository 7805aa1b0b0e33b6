//! Transcript normalization for the session-end save.

use hook_common::input::{ContentPart, RawContent, TranscriptEntry};
use serde::{Deserialize, Serialize};

/// Upper bound on a saved message's content, marker included.
pub const MAX_CONTENT_CHARS: usize = 2000;

const TRUNCATION_MARKER: &str = "...";

/// A message in the shape the mem0 API stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMessage {
    pub role: String,
    pub content: String,
}

impl MemoryMessage {
    /// Wrap a submitted prompt as a single user message for auto-save.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Turn raw transcript entries into messages ready to store.
///
/// Entries without a usable role or content are dropped, then the most recent
/// `limit` survivors are kept in their original order, and each content is
/// capped at [`MAX_CONTENT_CHARS`].
pub fn normalize_transcript(entries: &[TranscriptEntry], limit: usize) -> Vec<MemoryMessage> {
    let mut messages: Vec<MemoryMessage> =
        entries.iter().filter_map(message_from_entry).collect();

    if messages.len() > limit {
        messages.drain(..messages.len() - limit);
    }

    for message in &mut messages {
        message.content = truncate_content(&message.content);
    }

    messages
}

fn message_from_entry(entry: &TranscriptEntry) -> Option<MemoryMessage> {
    let TranscriptEntry::Message { role, content } = entry else {
        return None;
    };
    let role = role.as_deref().filter(|r| !r.is_empty())?;
    let content = flatten_content(content.as_ref()?)?;
    if content.is_empty() {
        return None;
    }
    Some(MemoryMessage {
        role: role.to_string(),
        content,
    })
}

/// Flatten raw content to plain text. Part lists keep only plain strings and
/// parts tagged as text; every other content shape is unusable.
fn flatten_content(content: &RawContent) -> Option<String> {
    match content {
        RawContent::Text(text) => Some(text.clone()),
        RawContent::Parts(parts) => Some(
            parts
                .iter()
                .filter_map(part_text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        RawContent::Other(_) => None,
    }
}

fn part_text(part: &ContentPart) -> Option<&str> {
    match part {
        ContentPart::Text(text) => Some(text),
        ContentPart::Tagged { kind, text } if kind == "text" => Some(text),
        _ => None,
    }
}

/// Cap content at [`MAX_CONTENT_CHARS`] characters, marker included, so
/// re-applying is a no-op.
pub fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_CONTENT_CHARS {
        return content.to_string();
    }
    let kept: String = content
        .chars()
        .take(MAX_CONTENT_CHARS - TRUNCATION_MARKER.chars().count())
        .collect();
    format!("{kept}{TRUNCATION_MARKER}")
}
