use plume_editor_core::{Mark, Marks, Node};
use plume_toolbar::EditorValue;

const INITIAL: &str = r#"{
    "schema": "plume",
    "version": 1,
    "document": [
        { "type": "heading-one", "children": [{ "text": "Welcome" }] },
        {
            "type": "paragraph",
            "children": [
                { "text": "Some " },
                { "text": "rich", "bold": true, "italic": true },
                { "text": " text." }
            ]
        },
        {
            "type": "bulleted-list",
            "children": [
                { "type": "list-item", "children": [{ "text": "first" }] },
                { "type": "list-item", "children": [{ "text": "second" }] }
            ]
        }
    ]
}"#;

#[test]
fn initial_value_parses_into_internal_kinds() {
    let value = EditorValue::from_json_str(INITIAL).unwrap();
    let doc = value.into_document();

    let kinds: Vec<&str> = doc
        .children
        .iter()
        .filter_map(|n| match n {
            Node::Element(el) => Some(el.kind.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec!["heading_one", "paragraph", "bulleted_list"]);

    let Node::Element(paragraph) = &doc.children[1] else {
        panic!("expected paragraph");
    };
    let Node::Text(styled) = &paragraph.children[1] else {
        panic!("expected styled leaf");
    };
    assert_eq!(styled.text, "rich");
    assert_eq!(
        styled.marks,
        Marks::default()
            .with(Mark::Bold, true)
            .with(Mark::Italic, true)
    );

    let Node::Element(container) = &doc.children[2] else {
        panic!("expected list container");
    };
    assert_eq!(container.children.len(), 2);
    let Node::Element(item) = &container.children[0] else {
        panic!("expected list item");
    };
    assert_eq!(item.kind, "list_item");
}

#[test]
fn schema_and_version_default_when_absent() {
    let value =
        EditorValue::from_json_str(r#"{ "document": [] }"#).unwrap();
    assert_eq!(value.schema, "plume");
    assert_eq!(value.version, 1);
}

#[test]
fn document_round_trips_through_the_value_layer() {
    let value = EditorValue::from_json_str(INITIAL).unwrap();
    let doc = value.clone().into_document();
    let back = EditorValue::from_document(&doc);
    assert_eq!(back.document, value.document);
}

#[test]
fn unknown_types_pass_through_unchanged() {
    let value = EditorValue::from_json_str(
        r#"{ "document": [ { "type": "callout", "children": [{ "text": "hi" }] } ] }"#,
    )
    .unwrap();
    let doc = value.into_document();

    let Node::Element(el) = &doc.children[0] else {
        panic!("expected element");
    };
    assert_eq!(el.kind, "callout");

    let back = EditorValue::from_document(&doc);
    let json = back.to_json_pretty().unwrap();
    assert!(json.contains("\"callout\""));
}

#[test]
fn malformed_json_surfaces_the_parse_error() {
    assert!(EditorValue::from_json_str("{ not json").is_err());
    assert!(EditorValue::from_json_str(r#"{ "document": 7 }"#).is_err());
}
