use plume_editor_core::{Document, Editor, Mark, Marks, Node, Point, Selection};

fn collapsed_at_start() -> Selection {
    Selection::collapsed(Point::new(vec![0, 0], 0))
}

#[test]
fn empty_document_gets_an_empty_paragraph() {
    let editor = Editor::new(Document::default(), collapsed_at_start());

    assert_eq!(editor.doc().children.len(), 1);
    let Node::Element(block) = &editor.doc().children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(block.kind, "paragraph");
    assert_eq!(
        block.children,
        vec![Node::text("", Marks::default())]
    );
}

#[test]
fn inline_block_without_leaf_gets_an_empty_one() {
    let doc = Document {
        children: vec![Node::element("heading_one", Vec::new())],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    let Node::Element(block) = &editor.doc().children[0] else {
        panic!("expected heading");
    };
    assert_eq!(block.kind, "heading_one");
    assert_eq!(block.children, vec![Node::text("", Marks::default())]);
}

#[test]
fn adjacent_leaves_with_equal_marks_merge() {
    let doc = Document {
        children: vec![Node::element(
            "paragraph",
            vec![
                Node::text("foo", Marks::default()),
                Node::text("bar", Marks::default()),
                Node::text("baz", Marks::default().with(Mark::Code, true)),
            ],
        )],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    let Node::Element(block) = &editor.doc().children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        block.children,
        vec![
            Node::text("foobar", Marks::default()),
            Node::text("baz", Marks::default().with(Mark::Code, true)),
        ]
    );
}

#[test]
fn empty_list_containers_dissolve() {
    let doc = Document {
        children: vec![
            Node::element("bulleted_list", Vec::new()),
            Node::paragraph("kept"),
        ],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    assert_eq!(editor.doc().children.len(), 1);
    let Node::Element(block) = &editor.doc().children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(block.kind, "paragraph");
}

#[test]
fn adjacent_same_kind_containers_merge() {
    let doc = Document {
        children: vec![
            Node::element(
                "numbered_list",
                vec![Node::element(
                    "list_item",
                    vec![Node::text("one", Marks::default())],
                )],
            ),
            Node::element(
                "numbered_list",
                vec![Node::element(
                    "list_item",
                    vec![Node::text("two", Marks::default())],
                )],
            ),
        ],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    assert_eq!(editor.doc().children.len(), 1);
    let Node::Element(container) = &editor.doc().children[0] else {
        panic!("expected container");
    };
    assert_eq!(container.kind, "numbered_list");
    assert_eq!(container.children.len(), 2);
}

#[test]
fn containers_of_different_kinds_stay_separate() {
    let doc = Document {
        children: vec![
            Node::element(
                "numbered_list",
                vec![Node::element(
                    "list_item",
                    vec![Node::text("one", Marks::default())],
                )],
            ),
            Node::element(
                "bulleted_list",
                vec![Node::element(
                    "list_item",
                    vec![Node::text("two", Marks::default())],
                )],
            ),
        ],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    assert_eq!(editor.doc().children.len(), 2);
}

#[test]
fn orphan_list_item_becomes_a_paragraph() {
    let doc = Document {
        children: vec![Node::element(
            "list_item",
            vec![Node::text("stray", Marks::default())],
        )],
    };
    let editor = Editor::new(doc, collapsed_at_start());

    let Node::Element(block) = &editor.doc().children[0] else {
        panic!("expected block");
    };
    assert_eq!(block.kind, "paragraph");
}

#[test]
fn selection_is_clamped_onto_existing_text() {
    let doc = Document {
        children: vec![Node::paragraph("hi")],
    };
    let editor = Editor::new(doc, Selection::collapsed(Point::new(vec![5, 9], 42)));

    assert_eq!(editor.selection().focus.path, vec![0, 0]);
    assert_eq!(editor.selection().focus.offset, 2);
}
