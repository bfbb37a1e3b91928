use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Id of the sentinel node every page tree is rooted at.
pub const ROOT_ID: &str = "root";

/// Block type of the root sentinel.
pub const ROOT_TYPE: &str = "Container";

/// One element in the page tree (a Button, Container, etc. instance).
///
/// The serialized form is the page builder's export format: a JSON object
/// with `id`, `type`, `props` and `children` keys, nested recursively.
/// `props` is intentionally untyped — nothing enforces prop shape against
/// the registry schema, and stale or extraneous keys survive round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    pub id: String,

    /// Registry key (e.g. "Button"). Unknown types are preserved; they
    /// render as placeholders downstream instead of failing.
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub props: HashMap<String, Value>,

    #[serde(default)]
    pub children: Vec<PageNode>,
}

impl PageNode {
    /// New node with empty props and no children.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            props: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// The root sentinel: id "root", type "Container".
    pub fn root() -> Self {
        Self::new(ROOT_ID, ROOT_TYPE)
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    /// Find a node by id in this subtree (self included).
    pub fn find(&self, id: &str) -> Option<&PageNode> {
        if self.id == id {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find a node by id in this subtree, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut PageNode> {
        if self.id == id {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Parent of the node with the given id, by recursive search.
    /// The tree stores no back-references.
    pub fn parent_of(&self, id: &str) -> Option<&PageNode> {
        if self.children.iter().any(|c| c.id == id) {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.parent_of(id) {
                return Some(found);
            }
        }
        None
    }

    /// Whether this subtree contains the given id (self included).
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes in this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PageNode::node_count).sum::<usize>()
    }

    /// Remove the node with the given id from this subtree and return it,
    /// descendants and all. Never detaches self.
    pub fn detach(&mut self, id: &str) -> Option<PageNode> {
        if let Some(pos) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(pos));
        }
        for child in &mut self.children {
            if let Some(removed) = child.detach(id) {
                return Some(removed);
            }
        }
        None
    }

    /// Largest sequential suffix among ids of the form `<seed>-<n>` in
    /// this subtree. Used to resume id generation for loaded documents.
    pub fn max_id_suffix(&self, seed: &str) -> u32 {
        let prefix = format!("{}-", seed);
        let own = self
            .id
            .strip_prefix(&prefix)
            .and_then(|n| n.parse::<u32>().ok())
            .unwrap_or(0);
        self.children
            .iter()
            .map(|c| c.max_id_suffix(seed))
            .fold(own, u32::max)
    }
}

impl Default for PageNode {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> PageNode {
        let mut root = PageNode::root();
        let mut hero = PageNode::new("n-1", "Hero");
        hero.props.insert("title".to_string(), json!("Welcome"));
        let mut container = PageNode::new("n-2", "Container");
        container.children.push(PageNode::new("n-3", "Button"));
        container.children.push(PageNode::new("n-4", "TextBlock"));
        root.children.push(hero);
        root.children.push(container);
        root
    }

    #[test]
    fn test_find_nested() {
        let root = sample_tree();

        assert_eq!(root.find("root").map(|n| n.type_name.as_str()), Some("Container"));
        assert_eq!(root.find("n-3").map(|n| n.type_name.as_str()), Some("Button"));
        assert!(root.find("n-99").is_none());
    }

    #[test]
    fn test_parent_lookup() {
        let root = sample_tree();

        assert_eq!(root.parent_of("n-1").map(|n| n.id.as_str()), Some("root"));
        assert_eq!(root.parent_of("n-4").map(|n| n.id.as_str()), Some("n-2"));
        assert!(root.parent_of("root").is_none());
    }

    #[test]
    fn test_detach_removes_subtree() {
        let mut root = sample_tree();
        assert_eq!(root.node_count(), 5);

        let removed = root.detach("n-2").expect("detach should find n-2");
        assert_eq!(removed.children.len(), 2);
        assert_eq!(root.node_count(), 2);
        assert!(!root.contains("n-3"));
    }

    #[test]
    fn test_detach_never_removes_self() {
        let mut root = sample_tree();
        assert!(root.detach("root").is_none());
    }

    #[test]
    fn test_max_id_suffix() {
        let mut root = PageNode::root();
        root.children.push(PageNode::new("abc-2", "Button"));
        let mut container = PageNode::new("abc-7", "Container");
        container.children.push(PageNode::new("other-12", "Card"));
        root.children.push(container);

        assert_eq!(root.max_id_suffix("abc"), 7);
        assert_eq!(root.max_id_suffix("other"), 12);
        assert_eq!(root.max_id_suffix("missing"), 0);
    }
}
