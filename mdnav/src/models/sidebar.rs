// src/models/sidebar.rs
use serde::Serialize;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;

/// One markdown document appearing as a navigable leaf in the sidebar.
///
/// A folder's own `index.md` never becomes a `FileEntry`; it is reserved for
/// the folder's metadata. A missing title leaves `text` as `None` — the
/// entry is still navigable by `link`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub link: String,
    pub order: i64,
    /// Front-matter fields other than `title`/`order`, carried verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One subfolder that qualified for inclusion (has a titled `index.md`).
///
/// `items` mixes files and nested folders, sorted ascending by `order` at
/// construction time and never re-sorted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderNode {
    pub text: String,
    pub order: i64,
    pub collapsible: bool,
    pub collapsed: bool,
    pub items: Vec<SidebarItem>,
}

/// A sidebar child: either a document leaf or a nested folder.
///
/// Both variants carry an `order`, so mixed lists sort through the shared
/// accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    File(FileEntry),
    Folder(FolderNode),
}

impl SidebarItem {
    #[must_use]
    pub const fn order(&self) -> i64 {
        match self {
            Self::File(file) => file.order,
            Self::Folder(folder) => folder.order,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::File(file) => file.text.as_deref(),
            Self::Folder(folder) => Some(&folder.text),
        }
    }
}
