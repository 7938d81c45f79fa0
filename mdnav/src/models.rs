// src/models.rs
pub mod frontmatter;
pub mod options;
pub mod sidebar;

pub use self::frontmatter::FrontMatter;
pub use self::options::Options;
pub use self::sidebar::{FileEntry, FolderNode, SidebarItem};
