//! Rendering retrieved memories into a context block.

use crate::client::MemoryRecord;

/// Header prepended to a non-empty memory block.
pub const MEMORY_SECTION_HEADER: &str = "## Relevant memories from previous conversations:";

/// Render records as a bulleted context block.
///
/// Records with an empty `memory` are skipped; categories, when present,
/// prefix the bullet. Returns the empty string when nothing survives, which
/// callers must treat as "omit the context field".
pub fn format_memories(records: &[MemoryRecord]) -> String {
    let bullets: Vec<String> = records
        .iter()
        .filter(|r| !r.memory.is_empty())
        .map(|r| {
            if r.categories.is_empty() {
                format!("- {}", r.memory)
            } else {
                format!("- [{}] {}", r.categories.join(", "), r.memory)
            }
        })
        .collect();

    if bullets.is_empty() {
        return String::new();
    }

    format!("{}\n{}", MEMORY_SECTION_HEADER, bullets.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(memory: &str, categories: &[&str]) -> MemoryRecord {
        MemoryRecord {
            memory: memory.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            score: 0.9,
        }
    }

    #[test]
    fn test_empty_memories_are_skipped() {
        let records = vec![record("likes dark mode", &["preferences"]), record("", &[])];
        let block = format_memories(&records);
        assert_eq!(
            block,
            "## Relevant memories from previous conversations:\n- [preferences] likes dark mode"
        );
    }

    #[test]
    fn test_multiple_categories() {
        let records = vec![record("uses rust", &["preferences", "languages"])];
        let block = format_memories(&records);
        assert!(block.contains("- [preferences, languages] uses rust"));
    }

    #[test]
    fn test_no_categories_renders_bare_bullet() {
        let records = vec![record("prefers tabs", &[])];
        let block = format_memories(&records);
        assert!(block.ends_with("\n- prefers tabs"));
    }

    #[test]
    fn test_nothing_survives_yields_empty_string() {
        assert_eq!(format_memories(&[]), "");
        assert_eq!(format_memories(&[record("", &["x"])]), "");
    }
}
