//! Rendering of Contentful rich text documents to sanitized HTML.
//!
//! A document is a tree of `{"nodeType", "content", "data"}` nodes with
//! `text` leaves carrying `value` and `marks`. Unknown node types render
//! their children so new block types degrade to plain text.

use quick_xml::escape::escape;
use serde_json::Value;

/// Render a rich text document. Returns `None` when the field is not a
/// rich text document or renders to nothing.
pub fn render_html(document: &Value) -> Option<String> {
    if document.get("nodeType").and_then(Value::as_str).is_none() {
        return None;
    }

    let mut html = String::new();
    render_node(document, &mut html);

    let clean = ammonia::clean(&html);
    if clean.trim().is_empty() {
        None
    } else {
        Some(clean)
    }
}

fn render_node(node: &Value, out: &mut String) {
    let node_type = node.get("nodeType").and_then(Value::as_str).unwrap_or("");

    match node_type {
        "text" => render_text(node, out),
        "hr" => out.push_str("<hr>"),
        "hyperlink" => {
            let uri = node
                .get("data")
                .and_then(|d| d.get("uri"))
                .and_then(Value::as_str)
                .unwrap_or("");
            out.push_str(&format!("<a href=\"{}\">", escape(uri)));
            render_children(node, out);
            out.push_str("</a>");
        }
        other => match block_tag(other) {
            Some(tag) => {
                out.push_str(&format!("<{}>", tag));
                render_children(node, out);
                out.push_str(&format!("</{}>", tag));
            }
            None => render_children(node, out),
        },
    }
}

fn render_children(node: &Value, out: &mut String) {
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            render_node(child, out);
        }
    }
}

fn block_tag(node_type: &str) -> Option<&'static str> {
    let tag = match node_type {
        "paragraph" => "p",
        "heading-1" => "h1",
        "heading-2" => "h2",
        "heading-3" => "h3",
        "heading-4" => "h4",
        "heading-5" => "h5",
        "heading-6" => "h6",
        "unordered-list" => "ul",
        "ordered-list" => "ol",
        "list-item" => "li",
        "blockquote" => "blockquote",
        "table" => "table",
        "table-row" => "tr",
        "table-cell" => "td",
        "table-header-cell" => "th",
        _ => return None,
    };
    Some(tag)
}

fn render_text(node: &Value, out: &mut String) {
    let value = node.get("value").and_then(Value::as_str).unwrap_or("");
    let marks: Vec<&'static str> = node
        .get("marks")
        .and_then(Value::as_array)
        .map(|marks| {
            marks
                .iter()
                .filter_map(|m| m.get("type").and_then(Value::as_str))
                .filter_map(mark_tag)
                .collect()
        })
        .unwrap_or_default();

    for tag in &marks {
        out.push_str(&format!("<{}>", tag));
    }
    out.push_str(&escape(value));
    for tag in marks.iter().rev() {
        out.push_str(&format!("</{}>", tag));
    }
}

fn mark_tag(mark: &str) -> Option<&'static str> {
    match mark {
        "bold" => Some("strong"),
        "italic" => Some("em"),
        "underline" => Some("u"),
        "code" => Some("code"),
        "superscript" => Some("sup"),
        "subscript" => Some("sub"),
        _ => None,
    }
}
