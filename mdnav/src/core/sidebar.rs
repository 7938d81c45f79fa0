// src/core/sidebar.rs
use crate::core::ignore::IgnoreList;
use crate::models::{FileEntry, FolderNode, Options, SidebarItem};
use crate::utils::{is_hidden, normalize_path, print_info, print_warning, read_front_matter};
use anyhow::{Context as _, Result, bail};
use glob::{Pattern, glob};
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The document reserved for folder-level metadata. It never appears as a
/// navigable leaf.
const INDEX_FILE: &str = "index.md";

/// Hard bound on folder nesting. Symlink cycles and pathological trees fail
/// loudly instead of recursing forever.
const MAX_DEPTH: usize = 64;

/// Lists the markdown documents directly inside one folder, ordered for the
/// sidebar.
///
/// The folder's own `index.md` is always excluded. Files whose path contains
/// any ignore pattern are skipped with an informational diagnostic. A file
/// without a `title` field is kept (with a warning) — it is still navigable
/// by link. Missing `order` defaults to 0; the sort is stable, so ties keep
/// the alphabetical listing order.
///
/// # Arguments
///
/// * `root` - The document root; links are the file paths with this prefix
///   stripped. Resolved against the current directory if relative
/// * `folder` - The folder to list, absolute or relative to `root`
/// * `ignore` - Substring filters; a bare `&str` coerces to one pattern
///
/// # Errors
///
/// This function may return an error if:
/// * The folder cannot be enumerated
/// * A listed file cannot be read as UTF-8 text
pub fn files_and_order(
    root: &Path,
    folder: impl AsRef<Path>,
    ignore: impl Into<IgnoreList>,
) -> Result<Vec<FileEntry>> {
    let root = absolute(root)?;
    let dir = resolve(&root, folder.as_ref());
    list_files(&root, &dir, &ignore.into())
}

/// Builds the ordered folder nodes for every qualifying subfolder of one
/// folder, recursively.
///
/// A subfolder qualifies only if it contains an `index.md` whose front
/// matter declares a `title`; a missing index excludes it silently, a
/// missing title excludes it with a warning, and either way everything
/// beneath it stays invisible. Each node's `items` merges the subfolder's
/// direct files with its own nested folder nodes, stable-sorted together by
/// `order`.
///
/// # Arguments
///
/// * `root` - The document root used for link derivation
/// * `folder` - The folder whose subfolders are walked
/// * `options` - Ignore filters and collapse settings, applied unchanged at
///   every level
///
/// # Errors
///
/// This function may return an error if:
/// * A directory cannot be enumerated
/// * An index document cannot be read as UTF-8 text
/// * Nesting exceeds the maximum supported depth
pub fn folders_and_order(
    root: &Path,
    folder: impl AsRef<Path>,
    options: &Options,
) -> Result<Vec<FolderNode>> {
    let root = absolute(root)?;
    let dir = resolve(&root, folder.as_ref());
    walk_folders(&root, &dir, options, 0)
}

fn list_files(root: &Path, dir: &Path, ignore: &IgnoreList) -> Result<Vec<FileEntry>> {
    // The directory component is escaped so folder names containing glob
    // metacharacters (brackets, stars) are matched literally.
    let pattern = format!(
        "{}/*.md",
        Pattern::escape(&normalize_path(&dir.to_string_lossy()))
    );
    let mut entries = Vec::new();

    // glob yields paths in alphabetical order, which becomes the tie-break
    // for equal `order` values through the stable sort below.
    for path in glob(&pattern).with_context(|| format!("Invalid listing pattern: {pattern}"))? {
        let path = path?;
        if path.file_name().is_some_and(|name| name == INDEX_FILE) {
            continue;
        }

        let link = link_for(root, &path);
        if let Some(matched) = ignore.matched(&link) {
            print_info(&format!("ignoring {link} (matched '{matched}')"));
            continue;
        }

        let matter = read_front_matter(&path)?;
        if matter.title.is_none() {
            print_warning(&format!("no title in front matter: {link}"));
        }

        entries.push(FileEntry {
            text: matter.title,
            link,
            order: matter.order.unwrap_or(0),
            extra: matter.extra,
        });
    }

    entries.sort_by_key(|entry| entry.order);
    Ok(entries)
}

fn walk_folders(
    root: &Path,
    dir: &Path,
    options: &Options,
    depth: usize,
) -> Result<Vec<FolderNode>> {
    if depth >= MAX_DEPTH {
        bail!(
            "folder nesting exceeds {MAX_DEPTH} levels at {} (symlink cycle?)",
            dir.display()
        );
    }

    let mut nodes = Vec::new();

    // filter_entry would also veto the walk root itself, which may be a
    // hidden-looking temp directory, so hidden entries are skipped after
    // yield instead.
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() || is_hidden(&entry) {
            continue;
        }

        let subdir = entry.path();
        let index = subdir.join(INDEX_FILE);
        if !index.is_file() {
            // No index document: the subfolder and everything beneath it
            // stays out of the sidebar.
            continue;
        }

        let matter = read_front_matter(&index)?;
        let Some(title) = matter.title else {
            print_warning(&format!(
                "no title in front matter, skipping folder: {}",
                subdir.display()
            ));
            continue;
        };

        let mut items: Vec<SidebarItem> = list_files(root, subdir, &options.files_to_ignore)?
            .into_iter()
            .map(SidebarItem::File)
            .collect();
        items.extend(
            walk_folders(root, subdir, options, depth.saturating_add(1))?
                .into_iter()
                .map(SidebarItem::Folder),
        );
        items.sort_by_key(SidebarItem::order);

        nodes.push(FolderNode {
            text: title,
            order: matter.order.unwrap_or(0),
            collapsible: options.is_collapsible(),
            collapsed: options.is_collapsed(),
            items,
        });
    }

    nodes.sort_by_key(|node| node.order);
    Ok(nodes)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn resolve(root: &Path, folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        folder.to_path_buf()
    } else {
        root.join(folder)
    }
}

fn link_for(root: &Path, path: &Path) -> String {
    let root_str = normalize_path(&root.to_string_lossy());
    let path_str = normalize_path(&path.to_string_lossy());
    // The prefix must end on a separator boundary: a sibling directory that
    // merely shares a name prefix with the root is not inside it.
    let stripped = match path_str.strip_prefix(root_str.trim_end_matches('/')) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => &path_str,
    };

    if stripped.starts_with('/') {
        stripped.to_owned()
    } else {
        format!("/{stripped}")
    }
}
