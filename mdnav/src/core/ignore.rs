// src/core/ignore.rs
use crate::utils::normalize_path;

/// Substring filters excluding files from sidebar listings.
///
/// Matching is plain substring search against the normalized file path, not
/// glob or regex — a pattern like `draft.*` only matches paths literally
/// containing `draft.*`. An empty list matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<String>,
}

impl IgnoreList {
    #[must_use]
    pub const fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn extend(&mut self, patterns: impl IntoIterator<Item = String>) {
        self.patterns.extend(patterns);
    }

    /// Returns the first pattern contained in `path`, if any.
    ///
    /// The path is normalized before matching so patterns written with `/`
    /// separators behave the same on every platform.
    #[must_use]
    pub fn matched(&self, path: &str) -> Option<&str> {
        let path = normalize_path(path);
        self.patterns
            .iter()
            .find(|pattern| path.contains(pattern.as_str()))
            .map(String::as_str)
    }
}

impl From<&str> for IgnoreList {
    fn from(pattern: &str) -> Self {
        Self::new(vec![pattern.to_owned()])
    }
}

impl From<String> for IgnoreList {
    fn from(pattern: String) -> Self {
        Self::new(vec![pattern])
    }
}

impl From<Vec<String>> for IgnoreList {
    fn from(patterns: Vec<String>) -> Self {
        Self::new(patterns)
    }
}

impl From<&[&str]> for IgnoreList {
    fn from(patterns: &[&str]) -> Self {
        Self::new(patterns.iter().map(|p| (*p).to_owned()).collect())
    }
}
