// tests/integration_tests/frontmatter_test.rs
use super::common::create_test_file;
use anyhow::Result;
use mdnav::{IgnoreList, files_and_order, parse_front_matter, read_front_matter};
use serde_yaml_ng::Value;
use tempfile::TempDir;

#[test]
fn test_front_matter_parsing() -> Result<()> {
    let content = "\
---
title: Reference
order: 4
---
# Reference
Some content here.";

    let matter = parse_front_matter(content)?;
    assert_eq!(matter.title.as_deref(), Some("Reference"));
    assert_eq!(matter.order, Some(4));

    let matter = parse_front_matter("# Just content\nNo front matter here.")?;
    assert!(matter.title.is_none());
    assert!(matter.order.is_none());
    Ok(())
}

#[test]
fn test_passthrough_fields_survive_into_entries() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(
        dir.path(),
        "tagged.md",
        "---\ntitle: Tagged\norder: 1\nicon: star\nbadge: new\n---\nBody\n",
    )?;

    let entries = files_and_order(dir.path(), dir.path(), IgnoreList::default())?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].extra["icon"], Value::from("star"));
    assert_eq!(entries[0].extra["badge"], Value::from("new"));
    Ok(())
}

#[test]
fn test_malformed_front_matter_degrades_to_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "broken.md", "---\ntitle: [unclosed\n---\nBody\n")?;

    let matter = read_front_matter(&dir.path().join("broken.md"))?;
    assert!(matter.title.is_none());

    let entries = files_and_order(dir.path(), dir.path(), IgnoreList::default())?;
    assert_eq!(entries.len(), 1, "the document is still listed");
    assert!(entries[0].text.is_none());
    assert_eq!(entries[0].order, 0);
    Ok(())
}
