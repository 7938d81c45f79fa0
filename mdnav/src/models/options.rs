// src/models/options.rs
use crate::core::ignore::IgnoreList;

/// Traversal configuration, threaded read-only through every recursive call.
///
/// The collapse fields are deliberately tri-state: `collapsible` is true for
/// anything other than an explicit `Some(false)`, while `collapsed` is true
/// only for an explicit `Some(true)`.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub files_to_ignore: IgnoreList,
    pub collapsible: Option<bool>,
    pub collapsed: Option<bool>,
}

impl Options {
    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        self.collapsible != Some(false)
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed == Some(true)
    }
}
