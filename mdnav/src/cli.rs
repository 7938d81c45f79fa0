// src/cli.rs
use crate::config::Config;
use crate::core::sidebar::{files_and_order, folders_and_order};
use crate::models::SidebarItem;
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Document root to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Partial file names to exclude from listings (comma-separated)
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Mark every folder node as initially collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Mark every folder node as non-collapsible
    #[arg(long)]
    pub no_collapsible: bool,

    /// Emit JSON instead of YAML
    #[arg(short, long)]
    pub json: bool,
}

/// Builds and serializes the sidebar for the configured document root.
///
/// Flags override `mdnav.toml` values; `--ignore` patterns are appended to
/// the configured ones. The top level merges direct documents and folder
/// nodes into one ordered list, the same way each folder node merges its
/// own children.
///
/// # Errors
///
/// This function may return an error if:
/// * The document root cannot be traversed
/// * The configuration file is invalid
/// * The resulting tree cannot be serialized
pub fn render(args: &Args) -> Result<String> {
    let mut options = Config::load(&args.directory)?.into_options();
    if let Some(ignore) = args.ignore.as_deref() {
        options
            .files_to_ignore
            .extend(ignore.split(',').map(|p| p.trim().to_owned()));
    }
    if args.collapsed {
        options.collapsed = Some(true);
    }
    if args.no_collapsible {
        options.collapsible = Some(false);
    }

    let mut sidebar: Vec<SidebarItem> =
        files_and_order(&args.directory, &args.directory, options.files_to_ignore.clone())?
            .into_iter()
            .map(SidebarItem::File)
            .collect();
    sidebar.extend(
        folders_and_order(&args.directory, &args.directory, &options)?
            .into_iter()
            .map(SidebarItem::Folder),
    );
    sidebar.sort_by_key(SidebarItem::order);

    if args.json {
        serde_json::to_string_pretty(&sidebar).context("Failed to serialize sidebar as JSON")
    } else {
        serde_yaml_ng::to_string(&sidebar).context("Failed to serialize sidebar as YAML")
    }
}

/// Renders the sidebar and prints it to stdout.
///
/// # Errors
///
/// See [`render`].
pub fn run(args: Args) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}
