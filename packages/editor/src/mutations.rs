//! # Tree Mutations
//!
//! High-level semantic operations on page documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents a semantic operation
//! 2. **Validated**: All mutations validate structural constraints before
//!    touching the tree; a rejected mutation changes nothing
//! 3. **Minimal**: No redundant or overly generic operations
//!
//! ## Mutation Semantics
//!
//! ### InsertNode
//! - New nodes carry empty props and no children
//! - Index is clamped to the parent's child count; absent index appends
//!
//! ### UpdateProps
//! - Merge, not replace: given keys overwrite, untouched keys survive
//! - Prop shapes are never checked against the registry schema
//!
//! ### MoveNode
//! - Atomic relocation of node to new parent
//! - Fails if it would create a cycle (target inside the moved subtree)
//! - Same-parent moves reorder siblings
//!
//! ### RemoveNode
//! - Removes node and all descendants
//! - The root sentinel is immovable and irremovable

use pagecraft_document::{PageNode, ROOT_ID};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a new node under a parent, appending when index is absent
    InsertNode {
        parent_id: String,
        index: Option<usize>,
        node: PageNode,
    },

    /// Merge prop values into a node
    UpdateProps {
        node_id: String,
        props: HashMap<String, Value>,
    },

    /// Move a node to a new parent at index
    MoveNode {
        node_id: String,
        new_parent_id: String,
        index: usize,
    },

    /// Remove a node and its entire subtree
    RemoveNode { node_id: String },

    /// Replace the whole document tree (load/reset path)
    ReplaceTree { tree: PageNode },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("The root node cannot be moved or removed")]
    RootImmutable,

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

impl Mutation {
    /// Apply mutation to the tree with validation
    pub fn apply(&self, tree: &mut PageNode) -> Result<(), MutationError> {
        // Validate first
        self.validate(tree)?;

        match self {
            Mutation::InsertNode {
                parent_id,
                index,
                node,
            } => Self::apply_insert(tree, parent_id, *index, node),

            Mutation::UpdateProps { node_id, props } => {
                Self::apply_update_props(tree, node_id, props)
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => Self::apply_move(tree, node_id, new_parent_id, *index),

            Mutation::RemoveNode { node_id } => Self::apply_remove(tree, node_id),

            Mutation::ReplaceTree { tree: new_tree } => {
                *tree = new_tree.clone();
                Ok(())
            }
        }
    }

    fn apply_insert(
        tree: &mut PageNode,
        parent_id: &str,
        index: Option<usize>,
        node: &PageNode,
    ) -> Result<(), MutationError> {
        let parent = tree
            .find_mut(parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;

        let insert_index = index
            .unwrap_or(parent.children.len())
            .min(parent.children.len());
        parent.children.insert(insert_index, node.clone());
        Ok(())
    }

    fn apply_update_props(
        tree: &mut PageNode,
        node_id: &str,
        props: &HashMap<String, Value>,
    ) -> Result<(), MutationError> {
        let node = tree
            .find_mut(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        for (name, value) in props {
            node.props.insert(name.clone(), value.clone());
        }
        Ok(())
    }

    fn apply_move(
        tree: &mut PageNode,
        node_id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<(), MutationError> {
        // Detach the node from its current parent, then reinsert. The
        // cycle check in validate() guarantees the new parent survives
        // the detach.
        let node_to_move = tree
            .detach(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

        let parent = tree
            .find_mut(new_parent_id)
            .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.to_string()))?;

        let insert_index = index.min(parent.children.len());
        parent.children.insert(insert_index, node_to_move);
        Ok(())
    }

    fn apply_remove(tree: &mut PageNode, node_id: &str) -> Result<(), MutationError> {
        tree.detach(node_id)
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, tree: &PageNode) -> Result<(), MutationError> {
        match self {
            Mutation::InsertNode {
                parent_id, node, ..
            } => {
                tree.find(parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;

                if tree.contains(&node.id) {
                    return Err(MutationError::DuplicateId(node.id.clone()));
                }

                Ok(())
            }

            Mutation::UpdateProps { node_id, .. } => {
                tree.find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                if node_id == ROOT_ID {
                    return Err(MutationError::RootImmutable);
                }

                let node = tree
                    .find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;

                tree.find(new_parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(new_parent_id.clone()))?;

                // Moving a node under itself or one of its descendants
                // would orphan the subtree
                if node.contains(new_parent_id) {
                    return Err(MutationError::CycleDetected);
                }

                Ok(())
            }

            Mutation::RemoveNode { node_id } => {
                if node_id == ROOT_ID {
                    return Err(MutationError::RootImmutable);
                }

                tree.find(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }

            Mutation::ReplaceTree { tree: new_tree } => {
                let mut seen = HashSet::new();
                check_unique(new_tree, &mut seen)
            }
        }
    }
}

fn check_unique<'a>(
    node: &'a PageNode,
    seen: &mut HashSet<&'a str>,
) -> Result<(), MutationError> {
    if !seen.insert(node.id.as_str()) {
        return Err(MutationError::DuplicateId(node.id.clone()));
    }
    for child in &node.children {
        check_unique(child, seen)?;
    }
    Ok(())
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Id of the node the mutation created, if any
    pub inserted_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateProps {
            node_id: "node-123".to_string(),
            props: HashMap::from([("text".to_string(), json!("Hello World"))]),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_unknown_ids() {
        let tree = PageNode::root();

        let mutation = Mutation::UpdateProps {
            node_id: "missing".to_string(),
            props: HashMap::new(),
        };

        assert_eq!(
            mutation.validate(&tree),
            Err(MutationError::NodeNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_failed_mutation_leaves_tree_untouched() {
        let mut tree = PageNode::root();
        tree.children.push(PageNode::new("n-1", "Button"));
        let before = tree.clone();

        let mutation = Mutation::MoveNode {
            node_id: "n-1".to_string(),
            new_parent_id: "missing".to_string(),
            index: 0,
        };

        assert!(mutation.apply(&mut tree).is_err());
        assert_eq!(tree, before);
    }
}
