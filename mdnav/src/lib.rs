// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::Args;
pub use crate::config::Config;
pub use crate::core::ignore::IgnoreList;
pub use crate::core::sidebar::{files_and_order, folders_and_order};
pub use crate::models::{FileEntry, FolderNode, FrontMatter, Options, SidebarItem};
pub use crate::utils::{normalize_path, parse_front_matter, read_front_matter};
