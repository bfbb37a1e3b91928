use crate::context::{CompileOptions, CompilerContext};
use pagecraft_common::{walk_node, Visitor};
use pagecraft_document::PageNode;
use pagecraft_registry::Registry;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compile a page tree to a self-contained React module: one import per
/// block type used, plus an exported page component wrapping the tree.
pub fn compile_page(
    tree: &PageNode,
    registry: &Registry,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let ctx = CompilerContext::new(options);

    compile_imports(tree, &ctx);
    compile_component(tree, registry, &ctx)?;

    Ok(ctx.get_output())
}

/// Collects distinct block types in first-encounter order.
struct ImportCollector {
    types: Vec<String>,
}

impl Visitor for ImportCollector {
    fn visit_node(&mut self, node: &PageNode) {
        let name = component_name(&node.type_name);
        if !self.types.iter().any(|t| t == name) {
            self.types.push(name.to_string());
        }
        walk_node(self, node);
    }
}

fn compile_imports(tree: &PageNode, ctx: &CompilerContext) {
    // Import React
    ctx.add_line("import React from 'react';");

    // One import per distinct block type, in traversal order
    let mut collector = ImportCollector { types: Vec::new() };
    collector.visit_node(tree);

    for name in &collector.types {
        ctx.add_line(&format!(
            "import {{ {} }} from './components/user/{}';",
            name, name
        ));
    }

    ctx.add("\n");
}

fn compile_component(
    tree: &PageNode,
    registry: &Registry,
    ctx: &CompilerContext,
) -> Result<(), CompileError> {
    ctx.add_line(&format!(
        "export default function {}() {{",
        ctx.options.component_name
    ));
    ctx.indent();

    ctx.add_line("return (");
    ctx.indent();

    ctx.add_line("<div style={{ minHeight: '100vh', width: '100%' }}>");
    ctx.indent();
    compile_node(tree, registry, ctx)?;
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line(");");

    ctx.dedent();
    ctx.add_line("}");
    Ok(())
}

fn compile_node(
    node: &PageNode,
    registry: &Registry,
    ctx: &CompilerContext,
) -> Result<(), CompileError> {
    let name = component_name(&node.type_name);

    let props = format_props(node, registry)?;
    let open = if props.is_empty() {
        format!("<{}", name)
    } else {
        format!("<{} {}", name, props.join(" "))
    };

    if node.children.is_empty() {
        ctx.add_line(&format!("{} />", open));
    } else {
        ctx.add_line(&format!("{}>", open));
        ctx.indent();
        for child in &node.children {
            compile_node(child, registry, ctx)?;
        }
        ctx.dedent();
        ctx.add_line(&format!("</{}>", name));
    }

    Ok(())
}

/// Stringify props per value kind: strings as `k="v"`, numbers and
/// booleans as `k={v}`, anything else as embedded JSON. A prop named
/// `children` never renders as an attribute.
fn format_props(node: &PageNode, registry: &Registry) -> Result<Vec<String>, CompileError> {
    let mut rendered = Vec::new();

    for name in ordered_prop_names(node, registry) {
        if name == "children" {
            continue;
        }

        let value = &node.props[name];
        rendered.push(match value {
            Value::String(s) => format!("{}=\"{}\"", name, s),
            Value::Number(n) => format!("{}={{{}}}", name, n),
            Value::Bool(b) => format!("{}={{{}}}", name, b),
            other => format!("{}={{{}}}", name, serde_json::to_string(other)?),
        });
    }

    Ok(rendered)
}

/// Props emit in registry-schema order, with keys the schema does not
/// know about following alphabetically. The source map is unordered, so
/// this keeps output deterministic.
fn ordered_prop_names<'a>(node: &'a PageNode, registry: &'a Registry) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();

    if let Some(schema) = registry.get(component_name(&node.type_name)) {
        for field in &schema.fields {
            if node.props.contains_key(&field.name) {
                names.push(field.name.as_str());
            }
        }
    }

    let mut rest: Vec<&str> = node
        .props
        .keys()
        .map(String::as_str)
        .filter(|k| !names.contains(k))
        .collect();
    rest.sort_unstable();
    names.extend(rest);

    names
}

/// The internal name `root` never leaks into generated code.
fn component_name(type_name: &str) -> &str {
    if type_name == "root" {
        "Container"
    } else {
        type_name
    }
}
