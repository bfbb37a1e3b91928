use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Editable field kinds the property inspector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Color,
    Number,
    Select,
    Boolean,
    Image,
}

/// One editable prop of a block. Fields are kept as an ordered sequence:
/// the inspector renders them and the React compiler emits props in
/// authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub label: String,
    pub default: Value,

    /// Select fields only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldSchema {
    pub fn text(name: &str, label: &str, default: &str) -> Self {
        Self::plain(name, FieldKind::Text, label, Value::from(default))
    }

    pub fn color(name: &str, label: &str, default: &str) -> Self {
        Self::plain(name, FieldKind::Color, label, Value::from(default))
    }

    pub fn image(name: &str, label: &str, default: &str) -> Self {
        Self::plain(name, FieldKind::Image, label, Value::from(default))
    }

    pub fn boolean(name: &str, label: &str, default: bool) -> Self {
        Self::plain(name, FieldKind::Boolean, label, Value::from(default))
    }

    pub fn number(name: &str, label: &str, default: f64) -> Self {
        Self::plain(name, FieldKind::Number, label, Value::from(default))
    }

    pub fn select(name: &str, label: &str, options: &[&str], default: &str) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::plain(name, FieldKind::Select, label, Value::from(default))
        }
    }

    fn plain(name: &str, kind: FieldKind, label: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            default,
            options: Vec::new(),
            placeholder: None,
        }
    }
}

/// Schema for one block type: display metadata plus its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Unique internal name (the registry key, e.g. "Hero").
    pub name: String,
    /// Display name (e.g. "Hero Header").
    pub label: String,
    pub icon: String,
    pub category: String,
    pub fields: Vec<FieldSchema>,
}

impl BlockSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field defaults as a prop map.
    pub fn default_props(&self) -> HashMap<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect()
    }
}

/// One sidebar section: a category and the blocks filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGroup<'a> {
    pub category: &'a str,
    pub blocks: Vec<&'a BlockSchema>,
}
