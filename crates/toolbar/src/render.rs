//! Mapping from document kinds to HTML element tags, and the document→HTML
//! pass consuming it. Both mappings are total: unrecognized kinds degrade to
//! a neutral container instead of failing.

use plume_editor_core::{Document, Mark, Node, TextNode};

pub fn block_element_tag(kind: &str) -> &'static str {
    match kind {
        "block_quote" => "blockquote",
        "bulleted_list" => "ul",
        "heading_one" => "h1",
        "heading_two" => "h2",
        "list_item" => "li",
        "numbered_list" => "ol",
        _ => "div",
    }
}

pub fn mark_element_tag(kind: &str) -> &'static str {
    match kind {
        "bold" => "strong",
        "code" => "code",
        "italic" => "em",
        "underlined" => "u",
        _ => "span",
    }
}

pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.children {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => {
            let tag = block_element_tag(&el.kind);
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in &el.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Node::Text(text) => write_text(out, text),
    }
}

fn write_text(out: &mut String, text: &TextNode) {
    let active: Vec<&'static str> = Mark::ALL
        .into_iter()
        .filter(|mark| text.marks.has(*mark))
        .map(|mark| mark_element_tag(mark.kind()))
        .collect();

    for tag in &active {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }
    escape_into(out, &text.text);
    for tag in active.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
