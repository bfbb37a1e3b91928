use crate::{compile_to_html, CompileOptions};
use pagecraft_document::PageNode;
use pagecraft_registry::Registry;
use serde_json::json;

fn compile(tree: &PageNode) -> String {
    compile_to_html(tree, Registry::global(), CompileOptions::default())
        .expect("Failed to compile")
}

fn fragment(tree: &PageNode) -> String {
    let options = CompileOptions {
        standalone: false,
        ..CompileOptions::default()
    };
    compile_to_html(tree, Registry::global(), options).expect("Failed to compile")
}

#[test]
fn test_standalone_document_framing() {
    let result = compile(&PageNode::root());

    println!("Generated HTML:\n{}", result);

    assert!(result.starts_with("<!DOCTYPE html>"));
    assert!(result.contains("<meta charset=\"UTF-8\">"));
    assert!(result.contains("<title>Pagecraft Page</title>"));
    assert!(result.contains("<body>"));
    assert!(result.contains("</html>"));
}

#[test]
fn test_container_inline_styles() {
    let tree = PageNode::root()
        .with_prop("padding", "2rem")
        .with_prop("backgroundColor", "#ffffff")
        .with_prop("flexDirection", "row");

    let result = fragment(&tree);

    assert!(result.contains("padding: 2rem"));
    assert!(result.contains("background-color: #ffffff"));
    assert!(result.contains("flex-direction: row"));
    // Untouched props render their schema defaults, as the live canvas does
    assert!(result.contains("display: flex"));
}

#[test]
fn test_button_classes_and_label() {
    let mut root = PageNode::root();
    root.children.push(
        PageNode::new("n-1", "Button")
            .with_prop("text", "Buy now")
            .with_prop("variant", "outline")
            .with_prop("fullWidth", true),
    );

    let result = fragment(&root);

    assert!(result.contains("<button class=\"btn btn-outline btn-md btn-block\">Buy now</button>"));
}

#[test]
fn test_text_block() {
    let mut root = PageNode::root();
    root.children.push(
        PageNode::new("n-1", "TextBlock")
            .with_prop("content", "Hello")
            .with_prop("textAlign", "center"),
    );

    let result = fragment(&root);

    assert!(result.contains("text-align: center"));
    assert!(result.contains(">Hello</p>"));
    // Defaults fill the gaps
    assert!(result.contains("font-size: 16px"));
}

#[test]
fn test_hero_section() {
    let mut root = PageNode::root();
    root.children.push(
        PageNode::new("n-1", "Hero")
            .with_prop("title", "Launch day")
            .with_prop("theme", "light")
            .with_prop("backgroundImage", "https://example.com/bg.jpg"),
    );

    let result = fragment(&root);

    println!("Generated HTML:\n{}", result);

    assert!(result.contains("<section class=\"hero hero-light\""));
    assert!(result.contains("background-image: url('https://example.com/bg.jpg')"));
    assert!(result.contains("<h1>Launch day</h1>"));
    // Subtitle falls back to the schema default
    assert!(result.contains("<p>Create stunning websites"));
}

#[test]
fn test_card_markup() {
    let mut root = PageNode::root();
    root.children.push(
        PageNode::new("n-1", "Card")
            .with_prop("title", "Fast")
            .with_prop("description", "Ship in minutes")
            .with_prop("accentColor", "purple"),
    );

    let result = fragment(&root);

    assert!(result.contains("<div class=\"card card-purple\">"));
    assert!(result.contains("alt=\"Fast\""));
    assert!(result.contains("<h3>Fast</h3>"));
    assert!(result.contains("<p>Ship in minutes</p>"));
}

#[test]
fn test_unknown_type_renders_placeholder() {
    let mut root = PageNode::root();
    root.children.push(PageNode::new("n-1", "Carousel"));

    let result = fragment(&root);

    assert!(result.contains("<div class=\"pc-unknown\">Unknown component: Carousel</div>"));
}

#[test]
fn test_text_is_escaped() {
    let mut root = PageNode::root();
    root.children.push(
        PageNode::new("n-1", "TextBlock").with_prop("content", "<script>alert(1)</script>"),
    );

    let result = fragment(&root);

    assert!(!result.contains("<script>"));
    assert!(result.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn test_non_string_prop_values_render() {
    let mut root = PageNode::root();
    root.children
        .push(PageNode::new("n-1", "TextBlock").with_prop("fontSize", json!(18)));

    let result = fragment(&root);

    assert!(result.contains("font-size: 18"));
}

#[test]
fn test_compact_output() {
    let options = CompileOptions {
        pretty: false,
        standalone: false,
        ..CompileOptions::default()
    };

    let mut root = PageNode::root();
    root.children.push(PageNode::new("n-1", "Button"));

    let result = compile_to_html(&root, Registry::global(), options).unwrap();

    assert!(!result.contains('\n'));
    assert!(result.contains("<button"));
}

#[test]
fn test_nested_containers() {
    let mut root = PageNode::root();
    let mut inner = PageNode::new("n-1", "Container");
    inner
        .children
        .push(PageNode::new("n-2", "TextBlock").with_prop("content", "Deep"));
    root.children.push(inner);

    let result = fragment(&root);

    // Two container divs, text nested innermost
    assert_eq!(result.matches("</div>").count(), 2);
    assert!(result.contains(">Deep</p>"));
}
