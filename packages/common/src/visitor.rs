use pagecraft_document::PageNode;
use serde_json::Value;

/// Visitor pattern for traversing page trees immutably
///
/// This trait provides default implementations that walk the entire tree
/// depth-first in child order. Override specific visit_* methods to
/// perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &PageNode) {
        walk_node(self, node);
    }

    fn visit_prop(&mut self, _name: &str, _value: &Value) {
        // Leaf, no children to walk
    }
}

/// Mutable visitor pattern for transforming page trees
///
/// Similar to Visitor, but provides mutable access to nodes.
pub trait VisitorMut: Sized {
    fn visit_node_mut(&mut self, node: &mut PageNode) {
        walk_node_mut(self, node);
    }

    fn visit_prop_mut(&mut self, _name: &str, _value: &mut Value) {
        // Leaf, no children to walk
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &PageNode) {
    for (name, value) in &node.props {
        visitor.visit_prop(name, value);
    }
    for child in &node.children {
        visitor.visit_node(child);
    }
}

pub fn walk_node_mut<V: VisitorMut>(visitor: &mut V, node: &mut PageNode) {
    for (name, value) in &mut node.props {
        visitor.visit_prop_mut(name, value);
    }
    for child in &mut node.children {
        visitor.visit_node_mut(child);
    }
}
