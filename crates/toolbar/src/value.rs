//! A versioned, Slate-compatible JSON wrapper for the initial-document blob
//! and for persisting editor content. Element `type` names use the dash
//! spelling of the source format; unknown types pass through untouched so a
//! round trip never loses them.

use serde::{Deserialize, Serialize};

use plume_editor_core::{Document, ElementNode, Marks, Node, TextNode};

const DEFAULT_SCHEMA: &str = "plume";
const DEFAULT_VERSION: u32 = 1;

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

fn default_version() -> u32 {
    DEFAULT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorValue {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub document: Vec<SlateNode>,
}

impl EditorValue {
    pub fn from_document(document: &Document) -> Self {
        Self {
            schema: default_schema(),
            version: default_version(),
            document: document.children.iter().map(node_to_slate).collect(),
        }
    }

    pub fn into_document(self) -> Document {
        Document {
            children: self.document.iter().map(slate_to_node).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlateNode {
    Text(SlateText),
    Element(SlateElement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SlateElement {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub children: Vec<SlateNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SlateText {
    pub text: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn kind_to_slate(kind: &str) -> String {
    match kind {
        "heading_one" => "heading-one".to_string(),
        "heading_two" => "heading-two".to_string(),
        "block_quote" => "block-quote".to_string(),
        "list_item" => "list-item".to_string(),
        "bulleted_list" => "bulleted-list".to_string(),
        "numbered_list" => "numbered-list".to_string(),
        other => other.to_string(),
    }
}

fn kind_from_slate(kind: &str) -> String {
    match kind {
        "heading-one" => "heading_one".to_string(),
        "heading-two" => "heading_two".to_string(),
        "block-quote" => "block_quote".to_string(),
        "list-item" => "list_item".to_string(),
        "bulleted-list" => "bulleted_list".to_string(),
        "numbered-list" => "numbered_list".to_string(),
        other => other.to_string(),
    }
}

fn node_to_slate(node: &Node) -> SlateNode {
    match node {
        Node::Element(el) => SlateNode::Element(SlateElement {
            kind: kind_to_slate(&el.kind),
            children: el.children.iter().map(node_to_slate).collect(),
        }),
        Node::Text(text) => SlateNode::Text(SlateText {
            text: text.text.clone(),
            bold: text.marks.bold,
            italic: text.marks.italic,
            underlined: text.marks.underlined,
            code: text.marks.code,
        }),
    }
}

fn slate_to_node(node: &SlateNode) -> Node {
    match node {
        SlateNode::Element(el) => Node::Element(ElementNode {
            kind: kind_from_slate(&el.kind),
            children: el.children.iter().map(slate_to_node).collect(),
        }),
        SlateNode::Text(text) => Node::Text(TextNode {
            text: text.text.clone(),
            marks: Marks {
                bold: text.bold,
                italic: text.italic,
                underlined: text.underlined,
                code: text.code,
            },
        }),
    }
}
