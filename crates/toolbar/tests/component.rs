use plume_editor_core::{Mark, Point, Selection};
use plume_toolbar::{
    BlockType, EditorValue, KeyChord, RichTextEditor, ToolbarControl, standard_toolbar,
};

fn editor_with_hello() -> RichTextEditor {
    let value = EditorValue::from_json_str(
        r#"{ "document": [ { "type": "paragraph", "children": [{ "text": "hello" }] } ] }"#,
    )
    .unwrap();
    let mut editor = RichTextEditor::from_value(value);
    editor.editor_mut().set_selection(Selection {
        anchor: Point::new(vec![0, 0], 0),
        focus: Point::new(vec![0, 0], 5),
    });
    editor
}

#[test]
fn bold_hotkey_is_consumed_and_applies_the_mark() {
    let mut editor = editor_with_hello();

    let handled = editor.handle_key(&KeyChord::primary("b")).unwrap();
    assert!(handled);
    assert_eq!(editor.to_html(), "<div><strong>hello</strong></div>");
    assert!(editor.formatting().has_mark(Mark::Bold));

    let handled = editor.handle_key(&KeyChord::primary("b")).unwrap();
    assert!(handled);
    assert_eq!(editor.to_html(), "<div>hello</div>");
    assert!(!editor.formatting().has_mark(Mark::Bold));
}

#[test]
fn unmapped_chords_leave_the_document_alone() {
    let mut editor = editor_with_hello();
    let before = editor.value();

    let handled = editor.handle_key(&KeyChord::primary("x")).unwrap();
    assert!(!handled);
    assert_eq!(editor.value(), before);
}

#[test]
fn toolbar_buttons_report_active_state() {
    let mut editor = editor_with_hello();

    let toolbar = standard_toolbar();
    let state = editor.formatting();
    assert!(toolbar.iter().all(|b| !b.is_active(&state)));

    editor.press(ToolbarControl::Mark(Mark::Italic)).unwrap();
    editor.press(ToolbarControl::Block(BlockType::HeadingOne)).unwrap();

    let state = editor.formatting();
    let active: Vec<&str> = toolbar
        .iter()
        .filter(|b| b.is_active(&state))
        .map(|b| b.icon)
        .collect();
    assert_eq!(active, vec!["format_italic", "looks_one"]);
}

#[test]
fn toolbar_has_the_nine_standard_controls_in_order() {
    let icons: Vec<&str> = standard_toolbar().iter().map(|b| b.icon).collect();
    assert_eq!(
        icons,
        vec![
            "format_bold",
            "format_italic",
            "format_underlined",
            "code",
            "looks_one",
            "looks_two",
            "format_quote",
            "format_list_numbered",
            "format_list_bulleted",
        ]
    );
}

#[test]
fn block_buttons_drive_the_resolver_end_to_end() {
    let mut editor = editor_with_hello();

    editor
        .press(ToolbarControl::Block(BlockType::BulletedList))
        .unwrap();
    assert_eq!(editor.to_html(), "<ul><li>hello</li></ul>");

    editor
        .press(ToolbarControl::Block(BlockType::NumberedList))
        .unwrap();
    assert_eq!(editor.to_html(), "<ol><li>hello</li></ol>");

    editor
        .press(ToolbarControl::Block(BlockType::NumberedList))
        .unwrap();
    assert_eq!(editor.to_html(), "<div>hello</div>");
}

#[test]
fn content_round_trips_back_out_through_value() {
    let mut editor = editor_with_hello();
    editor.toggle_mark(Mark::Underlined).unwrap();

    let json = editor.value().to_json_pretty().unwrap();
    let reloaded = RichTextEditor::from_value(EditorValue::from_json_str(&json).unwrap());
    assert_eq!(reloaded.to_html(), "<div><u>hello</u></div>");
}
