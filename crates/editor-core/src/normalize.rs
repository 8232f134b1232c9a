//! Structural repair passes. Each pass inspects a snapshot and emits ops; the
//! editor applies them and re-runs the pipeline until it reaches a fixed
//! point (bounded by `EditorConfig::max_normalize_iterations`).

use crate::core::{Document, Marks, Node, Point, Selection, TextNode, is_list_container};
use crate::ops::{Op, Path};
use crate::query::node_at;

pub trait NormalizePass: Send + Sync {
    fn id(&self) -> &'static str;
    fn run(&self, doc: &Document) -> Vec<Op>;
}

const PASSES: &[&dyn NormalizePass] = &[
    &EnsureNonEmptyDocument,
    &EnsureInlineBlockHasTextLeaf,
    &MergeAdjacentTextLeaves,
    &DissolveEmptyListContainers,
    &MergeAdjacentListContainers,
    &ParagraphizeOrphanListItems,
];

pub(crate) fn repair_ops(doc: &Document) -> Vec<Op> {
    for pass in PASSES {
        let ops = pass.run(doc);
        if !ops.is_empty() {
            return ops;
        }
    }
    Vec::new()
}

struct EnsureNonEmptyDocument;

impl NormalizePass for EnsureNonEmptyDocument {
    fn id(&self) -> &'static str {
        "core.ensure_non_empty_document"
    }

    fn run(&self, doc: &Document) -> Vec<Op> {
        if doc.children.is_empty() {
            return vec![Op::InsertNode {
                path: vec![0],
                node: Node::paragraph(""),
            }];
        }
        Vec::new()
    }
}

struct EnsureInlineBlockHasTextLeaf;

impl NormalizePass for EnsureInlineBlockHasTextLeaf {
    fn id(&self) -> &'static str {
        "core.ensure_inline_block_has_text_leaf"
    }

    fn run(&self, doc: &Document) -> Vec<Op> {
        let mut ops = Vec::new();

        fn walk(children: &[Node], path: &mut Path, ops: &mut Vec<Op>) {
            for (ix, node) in children.iter().enumerate() {
                let Node::Element(el) = node else {
                    continue;
                };

                path.push(ix);

                if is_list_container(&el.kind) {
                    walk(&el.children, path, ops);
                } else {
                    let has_text = el.children.iter().any(|n| matches!(n, Node::Text(_)));
                    if !has_text {
                        let mut insert_path = path.clone();
                        insert_path.push(0);
                        ops.push(Op::InsertNode {
                            path: insert_path,
                            node: Node::Text(TextNode {
                                text: String::new(),
                                marks: Marks::default(),
                            }),
                        });
                    }
                }

                path.pop();
            }
        }

        walk(&doc.children, &mut Vec::new(), &mut ops);
        ops
    }
}

struct MergeAdjacentTextLeaves;

impl NormalizePass for MergeAdjacentTextLeaves {
    fn id(&self) -> &'static str {
        "core.merge_adjacent_text_leaves"
    }

    fn run(&self, doc: &Document) -> Vec<Op> {
        let mut ops = Vec::new();

        fn walk(children: &[Node], path: &mut Path, ops: &mut Vec<Op>) {
            for (ix, node) in children.iter().enumerate() {
                let Node::Element(el) = node else {
                    continue;
                };

                path.push(ix);

                if is_list_container(&el.kind) {
                    walk(&el.children, path, ops);
                } else if el.children.len() >= 2 {
                    let mut ix = el.children.len();
                    while ix > 0 {
                        ix -= 1;
                        let Node::Text(right) = &el.children[ix] else {
                            continue;
                        };

                        let mut start = ix;
                        while start > 0 {
                            let Some(Node::Text(left)) = el.children.get(start - 1) else {
                                break;
                            };
                            if left.marks != right.marks {
                                break;
                            }
                            start -= 1;
                        }

                        if start == ix {
                            continue;
                        }

                        let Some(Node::Text(first)) = el.children.get(start) else {
                            continue;
                        };
                        let mut appended = String::new();
                        for node in el.children.iter().take(ix + 1).skip(start + 1) {
                            if let Node::Text(t) = node {
                                appended.push_str(&t.text);
                            }
                        }

                        if !appended.is_empty() {
                            let mut insert_text_path = path.clone();
                            insert_text_path.push(start);
                            ops.push(Op::InsertText {
                                path: insert_text_path,
                                offset: first.text.len(),
                                text: appended,
                            });
                        }

                        for remove_ix in (start + 1..=ix).rev() {
                            let mut remove_path = path.clone();
                            remove_path.push(remove_ix);
                            ops.push(Op::RemoveNode { path: remove_path });
                        }

                        ix = start;
                    }
                }

                path.pop();
            }
        }

        walk(&doc.children, &mut Vec::new(), &mut ops);
        ops
    }
}

struct DissolveEmptyListContainers;

impl NormalizePass for DissolveEmptyListContainers {
    fn id(&self) -> &'static str {
        "list.dissolve_empty_containers"
    }

    fn run(&self, doc: &Document) -> Vec<Op> {
        fn walk(children: &[Node], path: &mut Path) -> Option<Op> {
            for (ix, node) in children.iter().enumerate() {
                let Node::Element(el) = node else {
                    continue;
                };
                path.push(ix);
                if is_list_container(&el.kind) {
                    if el.children.is_empty() {
                        let op = Op::RemoveNode { path: path.clone() };
                        path.pop();
                        return Some(op);
                    }
                    if let Some(op) = walk(&el.children, path) {
                        path.pop();
                        return Some(op);
                    }
                }
                path.pop();
            }
            None
        }

        walk(&doc.children, &mut Vec::new())
            .into_iter()
            .collect()
    }
}

struct MergeAdjacentListContainers;

impl NormalizePass for MergeAdjacentListContainers {
    fn id(&self) -> &'static str {
        "list.merge_adjacent_containers"
    }

    // One merge per run; sibling indices shift, so the fixpoint loop picks up
    // any remaining pairs.
    fn run(&self, doc: &Document) -> Vec<Op> {
        fn first_merge(children: &[Node], path: &mut Path) -> Option<Vec<Op>> {
            for (ix, node) in children.iter().enumerate() {
                let Node::Element(left) = node else {
                    continue;
                };
                if is_list_container(&left.kind) {
                    if let Some(Node::Element(right)) = children.get(ix + 1) {
                        if right.kind == left.kind {
                            let mut ops = Vec::new();
                            for (i, child) in right.children.iter().enumerate() {
                                let mut insert_path = path.clone();
                                insert_path.push(ix);
                                insert_path.push(left.children.len() + i);
                                ops.push(Op::InsertNode {
                                    path: insert_path,
                                    node: child.clone(),
                                });
                            }
                            let mut remove_path = path.clone();
                            remove_path.push(ix + 1);
                            ops.push(Op::RemoveNode { path: remove_path });
                            return Some(ops);
                        }
                    }

                    path.push(ix);
                    if let Some(ops) = first_merge(&left.children, path) {
                        path.pop();
                        return Some(ops);
                    }
                    path.pop();
                }
            }
            None
        }

        first_merge(&doc.children, &mut Vec::new()).unwrap_or_default()
    }
}

struct ParagraphizeOrphanListItems;

impl NormalizePass for ParagraphizeOrphanListItems {
    fn id(&self) -> &'static str {
        "list.paragraphize_orphan_items"
    }

    fn run(&self, doc: &Document) -> Vec<Op> {
        let mut ops = Vec::new();

        fn walk(children: &[Node], inside_container: bool, path: &mut Path, ops: &mut Vec<Op>) {
            for (ix, node) in children.iter().enumerate() {
                let Node::Element(el) = node else {
                    continue;
                };
                path.push(ix);
                if is_list_container(&el.kind) {
                    walk(&el.children, true, path, ops);
                } else if el.kind == "list_item" && !inside_container {
                    ops.push(Op::SetNodeKind {
                        path: path.clone(),
                        kind: "paragraph".to_string(),
                    });
                }
                path.pop();
            }
        }

        walk(&doc.children, false, &mut Vec::new(), &mut ops);
        ops
    }
}

/// Move both selection points onto existing text leaves, clamping offsets.
pub(crate) fn normalize_selection(doc: &Document, selection: &Selection) -> Selection {
    let fallback = first_text_point(doc).unwrap_or(Point {
        path: vec![0],
        offset: 0,
    });

    let anchor = normalize_point_to_existing_text(doc, &selection.anchor).unwrap_or_else(|| {
        normalize_point_to_existing_text(doc, &selection.focus).unwrap_or_else(|| fallback.clone())
    });
    let focus =
        normalize_point_to_existing_text(doc, &selection.focus).unwrap_or_else(|| anchor.clone());

    Selection { anchor, focus }
}

fn first_text_point(doc: &Document) -> Option<Point> {
    fn walk(children: &[Node], path: &mut Path) -> Option<Point> {
        for (ix, node) in children.iter().enumerate() {
            path.push(ix);
            match node {
                Node::Text(_) => {
                    let point = Point {
                        path: path.clone(),
                        offset: 0,
                    };
                    path.pop();
                    return Some(point);
                }
                Node::Element(el) => {
                    if let Some(point) = walk(&el.children, path) {
                        path.pop();
                        return Some(point);
                    }
                }
            }
            path.pop();
        }
        None
    }

    walk(&doc.children, &mut Vec::new())
}

fn normalize_point_to_existing_text(doc: &Document, point: &Point) -> Option<Point> {
    if point.path.is_empty() || doc.children.is_empty() {
        return None;
    }

    fn first_text_descendant(children: &[Node], path: &mut Path) -> Option<Point> {
        for (ix, node) in children.iter().enumerate() {
            path.push(ix);
            match node {
                Node::Text(_) => {
                    let point = Point {
                        path: path.clone(),
                        offset: 0,
                    };
                    path.pop();
                    return Some(point);
                }
                Node::Element(el) => {
                    if let Some(point) = first_text_descendant(&el.children, path) {
                        path.pop();
                        return Some(point);
                    }
                }
            }
            path.pop();
        }
        None
    }

    let mut resolved_path: Path = Vec::new();
    let mut children: &[Node] = &doc.children;

    for &wanted in &point.path {
        if children.is_empty() {
            break;
        }
        let ix = wanted.min(children.len() - 1);
        resolved_path.push(ix);
        match &children[ix] {
            Node::Text(t) => {
                return Some(Point {
                    path: resolved_path,
                    offset: crate::core::clamp_to_char_boundary(&t.text, point.offset),
                });
            }
            Node::Element(el) => {
                children = &el.children;
            }
        }
    }

    let node = node_at(doc, &resolved_path)?;
    match node {
        Node::Text(t) => Some(Point {
            path: resolved_path,
            offset: crate::core::clamp_to_char_boundary(&t.text, point.offset),
        }),
        Node::Element(el) => first_text_descendant(&el.children, &mut resolved_path),
    }
}
