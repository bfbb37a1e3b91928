use pagecraft_document::PageNode;
use pagecraft_registry::Registry;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap output in a full document (doctype, head, body)
    pub standalone: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            standalone: true,
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.repeat(self.depth);
            self.add(&indent);
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render a page tree to static HTML — the canvas preview, minus the
/// interactivity. Block renderers mirror the builder's user components;
/// unknown block types render a visible placeholder instead of failing.
pub fn compile_to_html(
    tree: &PageNode,
    registry: &Registry,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    if ctx.options.standalone {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();

        compile_head(&mut ctx);

        ctx.add_line("<body>");
        ctx.indent();
        compile_node(tree, registry, &mut ctx)?;
        ctx.dedent();
        ctx.add_line("</body>");

        ctx.dedent();
        ctx.add_line("</html>");
    } else {
        compile_node(tree, registry, &mut ctx)?;
    }

    Ok(ctx.get_output())
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<title>Pagecraft Page</title>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(
    node: &PageNode,
    registry: &Registry,
    ctx: &mut Context,
) -> Result<(), CompileError> {
    // Effective props: the node's values over the schema defaults
    let props = effective_props(node, registry);

    match node.type_name.as_str() {
        // Legacy exports carried type "root" on the sentinel
        "Container" | "root" => compile_container(node, registry, &props, ctx),
        "Button" => {
            compile_button(&props, ctx);
            Ok(())
        }
        "TextBlock" => {
            compile_text_block(&props, ctx);
            Ok(())
        }
        "Hero" => {
            compile_hero(&props, ctx);
            Ok(())
        }
        "Card" => {
            compile_card(&props, ctx);
            Ok(())
        }
        other => {
            ctx.add_line(&format!(
                "<div class=\"pc-unknown\">Unknown component: {}</div>",
                escape_html(other)
            ));
            Ok(())
        }
    }
}

fn compile_container(
    node: &PageNode,
    registry: &Registry,
    props: &HashMap<String, Value>,
    ctx: &mut Context,
) -> Result<(), CompileError> {
    let style = style_attr(
        props,
        &[
            ("padding", "padding"),
            ("backgroundColor", "background-color"),
            ("display", "display"),
            ("flexDirection", "flex-direction"),
            ("gap", "gap"),
            ("alignItems", "align-items"),
            ("minHeight", "min-height"),
        ],
    );

    if node.children.is_empty() {
        ctx.add_line(&format!("<div{}></div>", style));
        return Ok(());
    }

    ctx.add_line(&format!("<div{}>", style));
    ctx.indent();
    for child in &node.children {
        compile_node(child, registry, ctx)?;
    }
    ctx.dedent();
    ctx.add_line("</div>");
    Ok(())
}

fn compile_button(props: &HashMap<String, Value>, ctx: &mut Context) {
    let mut classes = format!(
        "btn btn-{} btn-{}",
        str_prop(props, "variant"),
        str_prop(props, "size")
    );
    if bool_prop(props, "fullWidth") {
        classes.push_str(" btn-block");
    }

    ctx.add_line(&format!(
        "<button class=\"{}\">{}</button>",
        classes,
        escape_html(&str_prop(props, "text"))
    ));
}

fn compile_text_block(props: &HashMap<String, Value>, ctx: &mut Context) {
    let style = style_attr(
        props,
        &[
            ("fontSize", "font-size"),
            ("color", "color"),
            ("textAlign", "text-align"),
        ],
    );

    ctx.add_line(&format!(
        "<p{}>{}</p>",
        style,
        escape_html(&str_prop(props, "content"))
    ));
}

fn compile_hero(props: &HashMap<String, Value>, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<section class=\"hero hero-{}\" style=\"background-image: url('{}'); text-align: {}\">",
        str_prop(props, "theme"),
        escape_html(&str_prop(props, "backgroundImage")),
        str_prop(props, "align")
    ));
    ctx.indent();
    ctx.add_line(&format!("<h1>{}</h1>", escape_html(&str_prop(props, "title"))));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&str_prop(props, "subtitle"))));
    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_card(props: &HashMap<String, Value>, ctx: &mut Context) {
    let title = str_prop(props, "title");

    ctx.add_line(&format!(
        "<div class=\"card card-{}\">",
        str_prop(props, "accentColor")
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(&str_prop(props, "image")),
        escape_html(&title)
    ));
    ctx.add_line(&format!("<h3>{}</h3>", escape_html(&title)));
    ctx.add_line(&format!(
        "<p>{}</p>",
        escape_html(&str_prop(props, "description"))
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}

fn effective_props(node: &PageNode, registry: &Registry) -> HashMap<String, Value> {
    // Legacy sentinels typed "root" render with Container defaults
    let schema_name = if node.type_name == "root" {
        "Container"
    } else {
        node.type_name.as_str()
    };

    let mut props = registry.default_props(schema_name).unwrap_or_default();
    for (name, value) in &node.props {
        props.insert(name.clone(), value.clone());
    }
    props
}

fn str_prop(props: &HashMap<String, Value>, name: &str) -> String {
    match props.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn bool_prop(props: &HashMap<String, Value>, name: &str) -> bool {
    matches!(props.get(name), Some(Value::Bool(true)))
}

/// Inline style attribute (with leading space) from the given
/// prop-name → css-property pairs; absent props are skipped.
fn style_attr(props: &HashMap<String, Value>, mapping: &[(&str, &str)]) -> String {
    let declarations: Vec<String> = mapping
        .iter()
        .filter(|(prop, _)| props.contains_key(*prop))
        .map(|(prop, css)| format!("{}: {}", css, escape_html(&str_prop(props, prop))))
        .collect();

    if declarations.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", declarations.join("; "))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
