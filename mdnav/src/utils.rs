// src/utils.rs
use crate::models::FrontMatter;
use anyhow::{Context as _, Result, anyhow};
use std::fs;
use std::path::Path;

/// Rewrites a path string to use `/` as the only separator.
///
/// Idempotent; link derivation and ignore matching both rely on it so that
/// results compare equal across platforms.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Parses the YAML front-matter block at the top of a document.
///
/// A document without an opening `---` line, or with an empty block, yields
/// the default (all fields absent). The body after the closing delimiter is
/// not touched.
///
/// # Errors
///
/// Returns an error if the block is present but is not valid YAML.
pub fn parse_front_matter(content: &str) -> Result<FrontMatter> {
    let mut lines = content.lines();

    if lines.next() != Some("---") {
        return Ok(FrontMatter::default());
    }

    let mut block = String::new();
    for line in lines {
        if line == "---" {
            break;
        }
        block.push_str(line);
        block.push('\n');
    }

    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml_ng::from_str(&block).map_err(|e| anyhow!("Failed to parse front matter: {e}"))
}

/// Reads a document and extracts its front matter.
///
/// Unparseable front matter degrades to the empty metadata map after a
/// warning, so every field falls back to its default downstream. An
/// unreadable file is a hard error.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn read_front_matter(path: &Path) -> Result<FrontMatter> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    match parse_front_matter(&content) {
        Ok(matter) => Ok(matter),
        Err(err) => {
            print_warning(&format!(
                "invalid front matter in {}: {err}",
                path.display()
            ));
            Ok(FrontMatter::default())
        }
    }
}

pub fn print_info(message: &str) {
    eprintln!("info: {message}");
}

pub fn print_warning(message: &str) {
    eprintln!("warning: {message}");
}

#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
