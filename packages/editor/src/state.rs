//! The editor store: one document plus the current selection.
//!
//! Operations mirror the UI's store one-for-one: dropping a block inserts
//! a node under the drop target, the inspector merges prop edits, the
//! delete action removes a subtree. All tree changes go through the
//! validated mutation layer.

use crate::{Document, EditorError, Mutation, PageNode};
use serde_json::Value;
use std::collections::HashMap;

/// Single mutable editing session over one document.
#[derive(Debug)]
pub struct EditorState {
    document: Document,

    /// Selection is held by id, not ownership. It may dangle after a
    /// subtree deletion; consumers treat a dangling id as no selection.
    selected: Option<String>,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selected: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn tree(&self) -> &PageNode {
        self.document.tree()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the tree. `None` when nothing is
    /// selected or the id no longer exists.
    pub fn selected_node(&self) -> Option<&PageNode> {
        self.tree().find(self.selected.as_deref()?)
    }

    /// Change the selection. Ids are not validated here; selecting a
    /// missing node simply resolves to nothing.
    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Insert a new node of the given type under a parent (the drop
    /// action). The new node is auto-selected; its id is returned.
    pub fn add_node(
        &mut self,
        parent_id: &str,
        type_name: &str,
        index: Option<usize>,
    ) -> Result<String, EditorError> {
        let node = self.document.create_node(type_name);
        let id = node.id.clone();

        self.document.apply(Mutation::InsertNode {
            parent_id: parent_id.to_string(),
            index,
            node,
        })?;

        // Auto-select new node
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Merge prop values into a node (the inspector edit action).
    pub fn update_node_props(
        &mut self,
        node_id: &str,
        props: HashMap<String, Value>,
    ) -> Result<(), EditorError> {
        self.document.apply(Mutation::UpdateProps {
            node_id: node_id.to_string(),
            props,
        })?;
        Ok(())
    }

    /// Move a node under a new parent at the given index. Same-parent
    /// moves reorder siblings.
    pub fn move_node(
        &mut self,
        node_id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<(), EditorError> {
        self.document.apply(Mutation::MoveNode {
            node_id: node_id.to_string(),
            new_parent_id: new_parent_id.to_string(),
            index,
        })?;
        Ok(())
    }

    /// Remove a node and its subtree. Clears the selection only when the
    /// selected id is the deleted id; a selection further down the
    /// removed subtree is left to dangle.
    pub fn delete_node(&mut self, node_id: &str) -> Result<(), EditorError> {
        self.document.apply(Mutation::RemoveNode {
            node_id: node_id.to_string(),
        })?;

        if self.selected.as_deref() == Some(node_id) {
            self.selected = None;
        }
        Ok(())
    }

    /// Replace the whole tree (the import/reset action) and clear the
    /// selection.
    pub fn set_tree(&mut self, tree: PageNode) -> Result<(), EditorError> {
        self.document.apply(Mutation::ReplaceTree { tree })?;
        self.selected = None;
        Ok(())
    }
}
