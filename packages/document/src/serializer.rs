//! Document export/import.
//!
//! The export format is the tree itself: node id, type, props, children.
//! Import validates id uniqueness but nothing else — prop shapes and
//! unknown block types are deliberately accepted.

use crate::{DocumentError, DocumentResult, PageNode};
use std::collections::HashSet;

/// Serialize a page tree to compact JSON.
pub fn to_json(root: &PageNode) -> DocumentResult<String> {
    Ok(serde_json::to_string(root)?)
}

/// Serialize a page tree to pretty-printed JSON (the download format).
pub fn to_json_pretty(root: &PageNode) -> DocumentResult<String> {
    Ok(serde_json::to_string_pretty(root)?)
}

/// Parse a page tree from JSON, rejecting duplicate node ids.
pub fn from_json(json: &str) -> DocumentResult<PageNode> {
    let root: PageNode = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    check_unique_ids(&root, &mut seen)?;
    Ok(root)
}

fn check_unique_ids<'a>(node: &'a PageNode, seen: &mut HashSet<&'a str>) -> DocumentResult<()> {
    if !seen.insert(node.id.as_str()) {
        return Err(DocumentError::DuplicateId(node.id.clone()));
    }
    for child in &node.children {
        check_unique_ids(child, seen)?;
    }
    Ok(())
}
