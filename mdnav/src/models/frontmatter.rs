// src/models/frontmatter.rs
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;

/// Metadata declared in a document's YAML front-matter block.
///
/// `title` and `order` are the fields the sidebar builder acts on; every
/// other declared field is carried verbatim in `extra` so callers can attach
/// their own presentation data to entries.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub order: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
