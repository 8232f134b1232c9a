use plume_editor_core::{Document, Editor, Mark, Node, Point, Selection};

fn kinds(doc: &Document) -> Vec<&str> {
    doc.children
        .iter()
        .filter_map(|n| match n {
            Node::Element(el) => Some(el.kind.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn undo_and_redo_a_block_kind_change() {
    let mut editor = Editor::new(
        Document {
            children: vec![Node::paragraph("hello")],
        },
        Selection::collapsed(Point::new(vec![0, 0], 3)),
    );

    let change = editor.change().set_block("heading_two").unwrap();
    editor.apply(change.finish()).unwrap();
    assert_eq!(kinds(editor.doc()), vec!["heading_two"]);
    assert!(editor.can_undo());
    assert!(!editor.can_redo());

    assert!(editor.undo());
    assert_eq!(kinds(editor.doc()), vec!["paragraph"]);
    assert_eq!(editor.selection().focus.offset, 3);
    assert!(editor.can_redo());

    assert!(editor.redo());
    assert_eq!(kinds(editor.doc()), vec!["heading_two"]);
    assert!(editor.can_undo());
}

#[test]
fn undo_a_list_wrap_restores_the_paragraphs() {
    let mut editor = Editor::new(
        Document {
            children: vec![Node::paragraph("a"), Node::paragraph("b")],
        },
        Selection {
            anchor: Point::new(vec![0, 0], 0),
            focus: Point::new(vec![1, 0], 1),
        },
    );

    let change = editor
        .change()
        .set_block("list_item")
        .unwrap()
        .wrap_block("bulleted_list")
        .unwrap();
    editor.apply(change.finish()).unwrap();
    assert_eq!(kinds(editor.doc()), vec!["bulleted_list"]);

    assert!(editor.undo());
    assert_eq!(kinds(editor.doc()), vec!["paragraph", "paragraph"]);
    assert_eq!(editor.selection().anchor.path, vec![0, 0]);
    assert_eq!(editor.selection().focus.path, vec![1, 0]);
    assert_eq!(editor.selection().focus.offset, 1);

    assert!(editor.redo());
    assert_eq!(kinds(editor.doc()), vec!["bulleted_list"]);
    assert_eq!(editor.selection().focus.path, vec![0, 1, 0]);
}

#[test]
fn a_new_change_clears_the_redo_stack() {
    let mut editor = Editor::new(
        Document {
            children: vec![Node::paragraph("x")],
        },
        Selection::collapsed(Point::new(vec![0, 0], 0)),
    );

    let change = editor.change().set_block("block_quote").unwrap();
    editor.apply(change.finish()).unwrap();
    assert!(editor.undo());
    assert!(editor.can_redo());

    let change = editor.change().toggle_mark(Mark::Bold).unwrap();
    editor.apply(change.finish()).unwrap();
    assert!(!editor.can_redo());
}

#[test]
fn undo_on_a_fresh_editor_is_a_noop() {
    let mut editor = Editor::default();
    assert!(!editor.undo());
    assert!(!editor.redo());
}
