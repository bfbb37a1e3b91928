//! The built-in block catalog.
//!
//! Static and immutable: entries are defined here, looked up everywhere,
//! and never mutated at runtime. Third-party registration is out of scope.

use crate::schema::{BlockSchema, FieldSchema, PaletteGroup};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lookup table mapping a block type name to its schema.
#[derive(Debug, Clone)]
pub struct Registry {
    blocks: Vec<BlockSchema>,
}

impl Registry {
    /// The five built-in blocks with their stock defaults.
    pub fn built_in() -> Self {
        Self {
            blocks: vec![container(), button(), text_block(), hero(), card()],
        }
    }

    /// Process-wide shared catalog.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::built_in)
    }

    /// Look up a schema by type name. Missing entries are `None`, not an
    /// error: the canvas renders a placeholder, the inspector nothing.
    pub fn get(&self, name: &str) -> Option<&BlockSchema> {
        self.blocks.iter().find(|b| b.name == name)
    }

    pub fn blocks(&self) -> &[BlockSchema] {
        &self.blocks
    }

    /// Field defaults for a block type.
    pub fn default_props(&self, name: &str) -> Option<HashMap<String, Value>> {
        self.get(name).map(BlockSchema::default_props)
    }

    /// Sidebar data source: blocks whose label matches the filter
    /// (case-insensitive), grouped by category in catalog order.
    pub fn palette(&self, filter: &str) -> Vec<PaletteGroup<'_>> {
        let needle = filter.to_lowercase();
        let matches: Vec<&BlockSchema> = self
            .blocks
            .iter()
            .filter(|b| b.label.to_lowercase().contains(&needle))
            .collect();

        let mut groups: Vec<PaletteGroup> = Vec::new();
        for block in matches {
            match groups.iter_mut().find(|g| g.category == block.category) {
                Some(group) => group.blocks.push(block),
                None => groups.push(PaletteGroup {
                    category: &block.category,
                    blocks: vec![block],
                }),
            }
        }
        groups
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::built_in()
    }
}

fn container() -> BlockSchema {
    BlockSchema {
        name: "Container".to_string(),
        label: "Container".to_string(),
        icon: "box".to_string(),
        category: "Layout".to_string(),
        fields: vec![
            FieldSchema::text("padding", "Padding", "20px"),
            FieldSchema::color("backgroundColor", "Background", "transparent"),
            FieldSchema::select("display", "Display", &["block", "flex", "grid"], "flex"),
            FieldSchema::select("flexDirection", "Direction", &["row", "column"], "column"),
            FieldSchema::text("gap", "Gap", "10px"),
            FieldSchema::select(
                "alignItems",
                "Align Items",
                &["stretch", "center", "flex-start", "flex-end"],
                "stretch",
            ),
            FieldSchema::text("minHeight", "Min Height", "100px"),
        ],
    }
}

fn button() -> BlockSchema {
    BlockSchema {
        name: "Button".to_string(),
        label: "Button".to_string(),
        icon: "mouse-pointer-click".to_string(),
        category: "Basic".to_string(),
        fields: vec![
            FieldSchema::text("text", "Label", "Get Started"),
            FieldSchema::select(
                "variant",
                "Variant",
                &["primary", "secondary", "outline", "ghost", "gradient"],
                "primary",
            ),
            FieldSchema::select("size", "Size", &["sm", "md", "lg"], "md"),
            FieldSchema::boolean("fullWidth", "Full Width", false),
        ],
    }
}

fn text_block() -> BlockSchema {
    BlockSchema {
        name: "TextBlock".to_string(),
        label: "Text Block".to_string(),
        icon: "type".to_string(),
        category: "Typography".to_string(),
        fields: vec![
            FieldSchema::text("content", "Content", "Edit text..."),
            FieldSchema::text("fontSize", "Size", "16px"),
            FieldSchema::color("color", "Color", "#000000"),
            FieldSchema::select("textAlign", "Align", &["left", "center", "right"], "left"),
        ],
    }
}

fn hero() -> BlockSchema {
    BlockSchema {
        name: "Hero".to_string(),
        label: "Hero Header".to_string(),
        icon: "layout".to_string(),
        category: "Sections".to_string(),
        fields: vec![
            FieldSchema::text("title", "Title", "Build Something Amazing"),
            FieldSchema::text(
                "subtitle",
                "Subtitle",
                "Create stunning websites without writing a line of code",
            ),
            FieldSchema::image(
                "backgroundImage",
                "Image URL",
                "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&q=80",
            ),
            FieldSchema::select("align", "Align", &["left", "center", "right"], "center"),
            FieldSchema::select("theme", "Theme", &["light", "dark"], "dark"),
        ],
    }
}

fn card() -> BlockSchema {
    BlockSchema {
        name: "Card".to_string(),
        label: "Feature Card".to_string(),
        icon: "image".to_string(),
        category: "Basic".to_string(),
        fields: vec![
            FieldSchema::text("title", "Title", "Feature Card"),
            FieldSchema::text(
                "description",
                "Description",
                "Add a description to highlight your features.",
            ),
            FieldSchema::image(
                "image",
                "Image URL",
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2064&auto=format&fit=crop",
            ),
            FieldSchema::select(
                "accentColor",
                "Accent",
                &["blue", "indigo", "purple", "pink"],
                "blue",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use serde_json::json;

    #[test]
    fn test_built_in_catalog() {
        let registry = Registry::built_in();

        assert_eq!(registry.blocks().len(), 5);
        for name in ["Container", "Button", "TextBlock", "Hero", "Card"] {
            assert!(registry.get(name).is_some(), "missing block: {}", name);
        }
        assert!(registry.get("Carousel").is_none());
    }

    #[test]
    fn test_field_order_preserved() {
        let registry = Registry::built_in();
        let button = registry.get("Button").unwrap();

        let names: Vec<&str> = button.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["text", "variant", "size", "fullWidth"]);
    }

    #[test]
    fn test_default_props() {
        let registry = Registry::built_in();
        let defaults = registry.default_props("Button").unwrap();

        assert_eq!(defaults["text"], json!("Get Started"));
        assert_eq!(defaults["variant"], json!("primary"));
        assert_eq!(defaults["fullWidth"], json!(false));
        assert!(registry.default_props("Carousel").is_none());
    }

    #[test]
    fn test_select_options() {
        let registry = Registry::built_in();
        let field = registry.get("Container").unwrap().field("display").unwrap();

        assert_eq!(field.kind, FieldKind::Select);
        assert_eq!(field.options, vec!["block", "flex", "grid"]);
    }

    #[test]
    fn test_palette_groups_by_category() {
        let registry = Registry::built_in();
        let groups = registry.palette("");

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Layout", "Basic", "Typography", "Sections"]);

        let basic = groups.iter().find(|g| g.category == "Basic").unwrap();
        let labels: Vec<&str> = basic.blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Button", "Feature Card"]);
    }

    #[test]
    fn test_palette_search_is_case_insensitive() {
        let registry = Registry::built_in();
        let groups = registry.palette("hero");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Sections");
        assert_eq!(groups[0].blocks[0].name, "Hero");

        assert!(registry.palette("zzz").is_empty());
    }
}
