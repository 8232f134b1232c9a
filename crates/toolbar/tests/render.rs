use plume_editor_core::{Document, Mark, Marks, Node};
use plume_toolbar::{block_element_tag, mark_element_tag, to_html};

#[test]
fn known_block_kinds_map_to_their_tags() {
    assert_eq!(block_element_tag("block_quote"), "blockquote");
    assert_eq!(block_element_tag("bulleted_list"), "ul");
    assert_eq!(block_element_tag("heading_one"), "h1");
    assert_eq!(block_element_tag("heading_two"), "h2");
    assert_eq!(block_element_tag("list_item"), "li");
    assert_eq!(block_element_tag("numbered_list"), "ol");
}

#[test]
fn unknown_block_kinds_degrade_to_div() {
    assert_eq!(block_element_tag("unknown-type"), "div");
    assert_eq!(block_element_tag(""), "div");
    // Paragraphs have no dedicated tag; they render as the neutral container.
    assert_eq!(block_element_tag("paragraph"), "div");
}

#[test]
fn mark_kinds_map_to_inline_tags_with_span_fallback() {
    assert_eq!(mark_element_tag("bold"), "strong");
    assert_eq!(mark_element_tag("code"), "code");
    assert_eq!(mark_element_tag("italic"), "em");
    assert_eq!(mark_element_tag("underlined"), "u");
    assert_eq!(mark_element_tag("blink"), "span");
}

#[test]
fn html_output_nests_block_and_mark_tags() {
    let doc = Document {
        children: vec![
            Node::element(
                "heading_one",
                vec![Node::text("Title", Marks::default())],
            ),
            Node::element(
                "paragraph",
                vec![
                    Node::text("plain ", Marks::default()),
                    Node::text("strong", Marks::default().with(Mark::Bold, true)),
                ],
            ),
            Node::element(
                "bulleted_list",
                vec![Node::element(
                    "list_item",
                    vec![Node::text("item", Marks::default())],
                )],
            ),
        ],
    };

    assert_eq!(
        to_html(&doc),
        "<h1>Title</h1><div>plain <strong>strong</strong></div><ul><li>item</li></ul>"
    );
}

#[test]
fn stacked_marks_nest_in_declaration_order() {
    let marks = Marks::default()
        .with(Mark::Bold, true)
        .with(Mark::Code, true);
    let doc = Document {
        children: vec![Node::element("paragraph", vec![Node::text("x", marks)])],
    };

    assert_eq!(to_html(&doc), "<div><strong><code>x</code></strong></div>");
}

#[test]
fn text_content_is_escaped() {
    let doc = Document {
        children: vec![Node::paragraph("a < b && c > d")],
    };

    assert_eq!(to_html(&doc), "<div>a &lt; b &amp;&amp; c &gt; d</div>");
}
