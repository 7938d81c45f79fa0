// tests/integration_tests/ignore_patterns_test.rs
use super::common::{page, setup_docs_tree};
use anyhow::Result;
use mdnav::{IgnoreList, files_and_order};

#[test]
fn test_matching_file_never_appears() -> Result<()> {
    let dir = setup_docs_tree()?;

    let entries = files_and_order(dir.path(), dir.path(), "draft")?;
    assert_eq!(entries.len(), 3);
    assert!(
        entries.iter().all(|e| !e.link.contains("draft")),
        "draft-notes.md must be filtered despite its title and order"
    );
    Ok(())
}

#[test]
fn test_bare_string_and_sequence_behave_the_same() -> Result<()> {
    let dir = setup_docs_tree()?;

    let from_str = files_and_order(dir.path(), dir.path(), "draft")?;
    let from_vec = files_and_order(dir.path(), dir.path(), vec!["draft".to_owned()])?;
    assert_eq!(from_str, from_vec);
    Ok(())
}

#[test]
fn test_multiple_patterns_all_apply() -> Result<()> {
    let dir = setup_docs_tree()?;

    let entries = files_and_order(
        dir.path(),
        dir.path(),
        IgnoreList::from(["draft", "untitled"].as_slice()),
    )?;
    let links: Vec<&str> = entries.iter().map(|e| e.link.as_str()).collect();
    assert_eq!(links, vec!["/second.md", "/first.md"]);
    Ok(())
}

#[test]
fn test_pattern_matches_against_folder_component() -> Result<()> {
    let dir = setup_docs_tree()?;

    // The pattern names a path component, so every file under guide/ is
    // excluded from that folder's listing.
    let entries = files_and_order(dir.path(), "guide", "guide/")?;
    assert!(entries.is_empty());
    Ok(())
}

#[test]
fn test_regex_metacharacters_are_literal() -> Result<()> {
    let dir = setup_docs_tree()?;
    super::common::create_test_file(dir.path(), "literal/a.b.md", &page("Dotted", 1))?;
    super::common::create_test_file(dir.path(), "literal/axb.md", &page("Cross", 2))?;

    // `a.b` is a substring, not a regex: `axb.md` must survive.
    let entries = files_and_order(dir.path(), "literal", "a.b")?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].link, "/literal/axb.md");
    Ok(())
}

#[test]
fn test_no_patterns_excludes_nothing() -> Result<()> {
    let dir = setup_docs_tree()?;

    let entries = files_and_order(dir.path(), dir.path(), IgnoreList::default())?;
    assert_eq!(entries.len(), 4);
    Ok(())
}
