//! Property-inspector form model.
//!
//! The properties panel is a generated form: one input per schema field,
//! pre-filled with the node's prop value or the schema default. This
//! module derives that form; rendering it is a front-end concern.

use crate::EditorState;
use pagecraft_registry::{FieldKind, Registry};
use serde_json::Value;

/// The edit form for the currently selected node.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorForm {
    pub node_id: String,
    pub type_name: String,
    pub fields: Vec<FormField>,
}

/// One form input: schema metadata plus the effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub label: String,
    pub value: Value,
    pub options: Vec<String>,
    pub placeholder: Option<String>,
}

/// Derive the inspector form for the current selection.
///
/// Returns `None` when nothing is selected, the selected id no longer
/// resolves, or the block type has no schema — in each case the panel
/// renders nothing.
pub fn inspect(state: &EditorState, registry: &Registry) -> Option<InspectorForm> {
    let node = state.selected_node()?;
    let schema = registry.get(&node.type_name)?;

    let fields = schema
        .fields
        .iter()
        .map(|field| FormField {
            name: field.name.clone(),
            kind: field.kind,
            label: field.label.clone(),
            value: node
                .props
                .get(&field.name)
                .cloned()
                .unwrap_or_else(|| field.default.clone()),
            options: field.options.clone(),
            placeholder: field.placeholder.clone(),
        })
        .collect();

    Some(InspectorForm {
        node_id: node.id.clone(),
        type_name: node.type_name.clone(),
        fields,
    })
}
