//! HTML output for inline nodes.

use std::fmt::Write as _;

use crate::node::{Node, NodeKind};

/// Render nodes as an HTML fragment.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node);
    }
    return out;
}

/// Append one node to `out`.
fn render_node(out: &mut String, node: &Node) {
    match node {
        Node::Problematic { message_index, rawtext } => {
            let _ = write!(
                out,
                "<span class=\"problematic\" data-message=\"{message_index}\">{}</span>",
                escape(rawtext)
            );
        },
        Node::Reference { options, refuri, text, .. } => {
            let _ = write!(out, "<a class=\"reference external\" href=\"{}\"", escape(refuri));
            for (key, value) in options {
                let _ = write!(out, " data-{}=\"{}\"", escape(key), escape(value));
            }
            let _ = write!(out, ">{}</a>", escape(text));
        },
        Node::Styled { kind, text, .. } => {
            let (open, close) = match kind {
                NodeKind::Emphasis => ("<em>", "</em>"),
                NodeKind::Literal => ("<code class=\"docutils literal\">", "</code>"),
                NodeKind::Strong => ("<strong>", "</strong>"),
            };
            let _ = write!(out, "{open}{}{close}", escape(text));
        },
        Node::Text(text) => out.push_str(&escape(text)),
    }
    return;
}

/// Escape text for use in element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    return out;
}
