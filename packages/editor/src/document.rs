//! # Document Handle
//!
//! Core document abstraction for page editing.
//!
//! A Document represents a single page and its editing state.
//! Documents can be:
//! - **Memory-backed**: Temporary, for testing or in-memory editing
//! - **File-backed**: Single-user editing with a `.page.json` on disk
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Export → Save
//!   ↓      ↓       ↓       ↓
//! File   Mutations Code   File
//! ```

use crate::{EditorError, Mutation, MutationResult};
use pagecraft_document::{from_json, to_json_pretty, IdGenerator, PageNode};
use std::path::PathBuf;

/// Editable page document
#[derive(Debug)]
pub struct Document {
    /// Path to source file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each mutation)
    pub version: u64,

    /// Id mint for nodes created in this document
    ids: IdGenerator,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { tree: PageNode },

    /// File-backed (single-user editing)
    File { tree: PageNode, dirty: bool },
}

impl Document {
    /// Fresh document: the initial page is a root Container styled as a
    /// full-height flex column.
    pub fn new(path: PathBuf) -> Self {
        let ids = IdGenerator::new(&path.to_string_lossy());
        Self {
            path,
            version: 0,
            ids,
            storage: DocumentStorage::Memory {
                tree: initial_page(),
            },
        }
    }

    /// Create document from an existing tree (memory-backed)
    pub fn from_tree(path: PathBuf, tree: PageNode) -> Self {
        let mut ids = IdGenerator::new(&path.to_string_lossy());
        ids.resume_above(tree.max_id_suffix(ids.seed()));

        Self {
            path,
            version: 0,
            ids,
            storage: DocumentStorage::Memory { tree },
        }
    }

    /// Load document from a `.page.json` file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let json = std::fs::read_to_string(&path)?;
        let tree = from_json(&json)?;

        // Resume the id counter above anything persisted so fresh nodes
        // cannot collide with loaded ones
        let mut ids = IdGenerator::new(&path.to_string_lossy());
        ids.resume_above(tree.max_id_suffix(ids.seed()));

        Ok(Self {
            path,
            version: 0,
            ids,
            storage: DocumentStorage::File { tree, dirty: false },
        })
    }

    /// Get the current tree
    pub fn tree(&self) -> &PageNode {
        match &self.storage {
            DocumentStorage::Memory { tree } => tree,
            DocumentStorage::File { tree, .. } => tree,
        }
    }

    /// Get mutable tree reference (marks file-backed documents dirty)
    pub fn tree_mut(&mut self) -> &mut PageNode {
        match &mut self.storage {
            DocumentStorage::Memory { tree } => tree,
            DocumentStorage::File { tree, dirty } => {
                *dirty = true;
                tree
            }
        }
    }

    /// Mint a node of the given type with a fresh id, empty props and no
    /// children. The node is not attached until an InsertNode mutation
    /// carries it into the tree.
    pub fn create_node(&mut self, type_name: &str) -> PageNode {
        PageNode::new(self.ids.new_id(), type_name)
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        self.version += 1;

        let inserted_id = match &mutation {
            Mutation::InsertNode { node, .. } => Some(node.id.clone()),
            _ => None,
        };

        let tree = match &mut self.storage {
            DocumentStorage::Memory { tree } => tree,
            DocumentStorage::File { tree, .. } => tree,
        };
        mutation.apply(tree)?;

        if let DocumentStorage::File { dirty, .. } = &mut self.storage {
            *dirty = true;
        }

        Ok(MutationResult {
            version: self.version,
            inserted_id,
        })
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            _ => false,
        }
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { tree, dirty } => {
                std::fs::write(&self.path, to_json_pretty(tree)?)?;
                *dirty = false;
                Ok(())
            }
            _ => Err(EditorError::NotFileBacked),
        }
    }

    /// Export the tree as pretty JSON (the download format)
    pub fn export_json(&self) -> Result<String, EditorError> {
        Ok(to_json_pretty(self.tree())?)
    }
}

/// The starting page of a new document, matching the builder's default
/// canvas.
fn initial_page() -> PageNode {
    PageNode::root()
        .with_prop("padding", "2rem")
        .with_prop("backgroundColor", "#ffffff")
        .with_prop("minHeight", "100vh")
        .with_prop("display", "flex")
        .with_prop("flexDirection", "column")
        .with_prop("gap", "1rem")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_memory_document() {
        let doc = Document::new(PathBuf::from("test.page.json"));

        assert_eq!(doc.version, 0);
        assert!(!doc.is_dirty());

        let tree = doc.tree();
        assert!(tree.is_root());
        assert_eq!(tree.props["padding"], json!("2rem"));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_document_version_increments() {
        let mut doc = Document::new(PathBuf::from("test.page.json"));

        assert_eq!(doc.version, 0);

        // Apply mutation (will fail but still increment version)
        let mutation = Mutation::RemoveNode {
            node_id: "missing".to_string(),
        };

        let _ = doc.apply(mutation);
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn test_create_node_mints_unique_ids() {
        let mut doc = Document::new(PathBuf::from("test.page.json"));

        let a = doc.create_node("Button");
        let b = doc.create_node("Button");

        assert_ne!(a.id, b.id);
        assert!(a.props.is_empty());
        assert!(a.children.is_empty());
    }

    #[test]
    fn test_memory_document_save_fails() {
        let mut doc = Document::new(PathBuf::from("test.page.json"));
        assert!(matches!(doc.save(), Err(EditorError::NotFileBacked)));
    }
}
