//! Optional `.env` file discovery and layering.
//!
//! The host may point hooks at one or more workspace roots through the
//! `CURSOR_HOOK_INPUT` environment variable (a JSON document with a
//! `workspace_roots` array). The first root carrying a `.env` file wins;
//! `./.env` is consulted after that. File values never override the process
//! environment; the merged view is exposed as an immutable [`EnvSource`]
//! instead of being written back into the environment.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::HashMap;

/// Environment variable carrying the host's workspace-discovery document.
pub const HOOK_INPUT_VAR: &str = "CURSOR_HOOK_INPUT";

/// Immutable, layered view of the configuration environment.
///
/// Lookup order: process environment first (a set-but-empty variable still
/// wins), then the first definition found across the discovered `.env` files.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    process: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the process environment and merge in discovered `.env` files.
    pub fn from_process_env() -> Self {
        let process: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        let cwd = std::env::current_dir()
            .ok()
            .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        let paths = discover_env_files(process.get(HOOK_INPUT_VAR).map(String::as_str), &cwd);
        let files = read_env_files(&paths);

        Self { process, files }
    }

    /// Build a source from explicit layers.
    pub fn from_parts(
        process: HashMap<String, String>,
        files: HashMap<String, String>,
    ) -> Self {
        Self { process, files }
    }

    /// Look up a key, process environment first.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.process
            .get(key)
            .or_else(|| self.files.get(key))
            .map(String::as_str)
    }
}

/// Candidate `.env` files, in merge order.
///
/// The `workspace_roots` of the hook-input document are tried in order and
/// only the first root with an existing `.env` is kept; the current
/// directory's `.env` is appended when present. A malformed or absent
/// document contributes no roots.
pub fn discover_env_files(hook_input: Option<&str>, cwd: &Utf8Path) -> Vec<Utf8PathBuf> {
    #[derive(Deserialize)]
    struct WorkspaceInput {
        #[serde(default)]
        workspace_roots: Vec<String>,
    }

    let mut paths = Vec::new();

    if let Some(raw) = hook_input {
        if let Ok(doc) = serde_json::from_str::<WorkspaceInput>(raw) {
            for root in doc.workspace_roots {
                let candidate = Utf8PathBuf::from(root).join(".env");
                if candidate.is_file() {
                    paths.push(candidate);
                    break;
                }
            }
        }
    }

    let local = cwd.join(".env");
    if local.is_file() {
        paths.push(local);
    }

    paths
}

/// Parse the given files, first definition wins. Unreadable files and
/// malformed lines are skipped.
fn read_env_files(paths: &[Utf8PathBuf]) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for path in paths {
        let Ok(iter) = dotenvy::from_path_iter(path) else {
            continue;
        };
        for item in iter {
            let Ok((key, value)) = item else {
                continue;
            };
            values.entry(key).or_insert(value);
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path.to_path_buf()).unwrap()
    }

    #[test]
    fn test_first_workspace_root_with_env_wins() {
        let without = tempdir().unwrap();
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::write(first.path().join(".env"), "A=1\n").unwrap();
        fs::write(second.path().join(".env"), "A=2\n").unwrap();

        let hook_input = serde_json::json!({
            "workspace_roots": [without.path(), first.path(), second.path()]
        })
        .to_string();

        let cwd = tempdir().unwrap();
        let paths = discover_env_files(Some(hook_input.as_str()), &utf8(cwd.path()));
        assert_eq!(paths, vec![utf8(first.path()).join(".env")]);
    }

    #[test]
    fn test_cwd_env_is_appended() {
        let root = tempdir().unwrap();
        let cwd = tempdir().unwrap();
        fs::write(root.path().join(".env"), "A=1\n").unwrap();
        fs::write(cwd.path().join(".env"), "B=2\n").unwrap();

        let hook_input = serde_json::json!({ "workspace_roots": [root.path()] }).to_string();
        let paths = discover_env_files(Some(hook_input.as_str()), &utf8(cwd.path()));
        assert_eq!(
            paths,
            vec![
                utf8(root.path()).join(".env"),
                utf8(cwd.path()).join(".env"),
            ]
        );
    }

    #[test]
    fn test_malformed_hook_input_contributes_no_roots() {
        let cwd = tempdir().unwrap();
        let paths = discover_env_files(Some("not json"), &utf8(cwd.path()));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_first_definition_wins_across_files() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        fs::write(a.path().join(".env"), "KEY=first\nONLY_A=a\n").unwrap();
        fs::write(b.path().join(".env"), "KEY=second\nONLY_B=b\n").unwrap();

        let values = read_env_files(&[
            utf8(a.path()).join(".env"),
            utf8(b.path()).join(".env"),
        ]);
        assert_eq!(values.get("KEY").map(String::as_str), Some("first"));
        assert_eq!(values.get("ONLY_A").map(String::as_str), Some("a"));
        assert_eq!(values.get("ONLY_B").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_process_env_wins_even_when_empty() {
        let source = EnvSource::from_parts(
            HashMap::from([("MEM0_API_KEY".to_string(), String::new())]),
            HashMap::from([("MEM0_API_KEY".to_string(), "from-file".to_string())]),
        );
        assert_eq!(source.get("MEM0_API_KEY"), Some(""));
    }

    #[test]
    fn test_file_value_fills_the_gap() {
        let source = EnvSource::from_parts(
            HashMap::new(),
            HashMap::from([("MEM0_USER_ID".to_string(), "alice".to_string())]),
        );
        assert_eq!(source.get("MEM0_USER_ID"), Some("alice"));
        assert_eq!(source.get("MEM0_TOP_K"), None);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = tempdir().unwrap();
        let values = read_env_files(&[utf8(dir.path()).join("missing.env")]);
        assert!(values.is_empty());
    }
}
