//! Read-only lookups over a document snapshot: path resolution, the inline
//! blocks covered by a selection, ancestor searches, and mark activity.

use crate::core::{Document, ElementNode, Mark, Node, Point, Selection, is_list_container};
use crate::ops::Path;

pub fn node_at<'a>(doc: &'a Document, path: &[usize]) -> Option<&'a Node> {
    if path.is_empty() {
        return None;
    }

    let mut node = doc.children.get(path[0])?;
    for &ix in path.iter().skip(1) {
        node = match node {
            Node::Element(el) => el.children.get(ix)?,
            Node::Text(_) => return None,
        };
    }
    Some(node)
}

pub fn children_at<'a>(doc: &'a Document, parent_path: &[usize]) -> Option<&'a [Node]> {
    if parent_path.is_empty() {
        return Some(&doc.children);
    }
    match node_at(doc, parent_path)? {
        Node::Element(el) => Some(&el.children),
        Node::Text(_) => None,
    }
}

/// Anchor and focus in document order (a selection may be backwards).
pub fn ordered_points(sel: &Selection) -> (Point, Point) {
    let a = &sel.anchor;
    let f = &sel.focus;
    if (a.path.as_slice(), a.offset) <= (f.path.as_slice(), f.offset) {
        (a.clone(), f.clone())
    } else {
        (f.clone(), a.clone())
    }
}

/// All inline blocks (elements holding text leaves) in document order.
/// List containers are descended into, not collected.
pub fn inline_blocks<'a>(doc: &'a Document) -> Vec<(Path, &'a ElementNode)> {
    fn walk<'a>(children: &'a [Node], path: &mut Path, out: &mut Vec<(Path, &'a ElementNode)>) {
        for (ix, node) in children.iter().enumerate() {
            let Node::Element(el) = node else {
                continue;
            };
            path.push(ix);
            if is_list_container(&el.kind) {
                walk(&el.children, path, out);
            } else {
                out.push((path.clone(), el));
            }
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(&doc.children, &mut Vec::new(), &mut out);
    out
}

/// The inline blocks intersected by the selection, in document order. Empty
/// when either endpoint does not sit in a known inline block.
pub fn inline_blocks_in_selection<'a>(
    doc: &'a Document,
    sel: &Selection,
) -> Vec<(Path, &'a ElementNode)> {
    let (start, end) = ordered_points(sel);
    let Some(start_block) = start.path.split_last().map(|(_, p)| p.to_vec()) else {
        return Vec::new();
    };
    let Some(end_block) = end.path.split_last().map(|(_, p)| p.to_vec()) else {
        return Vec::new();
    };

    let blocks = inline_blocks(doc);
    let Some(start_ix) = blocks.iter().position(|(p, _)| *p == start_block) else {
        return Vec::new();
    };
    let Some(end_ix) = blocks.iter().position(|(p, _)| *p == end_block) else {
        return Vec::new();
    };
    let (start_ix, end_ix) = if start_ix <= end_ix {
        (start_ix, end_ix)
    } else {
        (end_ix, start_ix)
    };

    blocks
        .into_iter()
        .take(end_ix + 1)
        .skip(start_ix)
        .collect()
}

/// Nearest node at or above `path` whose kind is `kind`.
pub fn nearest_ancestor_of_kind(doc: &Document, point_path: &[usize], kind: &str) -> Option<Path> {
    let mut path: Path = point_path.to_vec();
    while !path.is_empty() {
        if let Some(Node::Element(el)) = node_at(doc, &path) {
            if el.kind == kind {
                return Some(path);
            }
        }
        path.pop();
    }
    None
}

/// Nearest enclosing list container at or above `path`.
pub fn nearest_list_container<'a>(
    doc: &'a Document,
    point_path: &[usize],
) -> Option<(Path, &'a ElementNode)> {
    let mut path: Path = point_path.to_vec();
    while !path.is_empty() {
        if let Some(Node::Element(el)) = node_at(doc, &path) {
            if is_list_container(&el.kind) {
                return Some((path, el));
            }
        }
        path.pop();
    }
    None
}

/// Whether the mark is active for the selection: for a caret, the marks of
/// the focus leaf; for a range, active only if every covered leaf carries it.
pub fn selection_has_mark(doc: &Document, sel: &Selection, mark: Mark) -> bool {
    if sel.is_collapsed() {
        return match node_at(doc, &sel.focus.path) {
            Some(Node::Text(t)) => t.marks.has(mark),
            _ => false,
        };
    }

    let (start, end) = ordered_points(sel);
    let blocks = inline_blocks_in_selection(doc, sel);
    if blocks.is_empty() {
        return false;
    }
    let last_ix = blocks.len() - 1;

    let start_inline_ix = start.path.last().copied().unwrap_or(0);
    let end_inline_ix = end.path.last().copied().unwrap_or(0);

    for (block_ix, (_, el)) in blocks.iter().enumerate() {
        let children = el.children.as_slice();
        let total_len = total_inline_text_len(children);
        if total_len == 0 {
            continue;
        }

        let start_global = if block_ix == 0 {
            point_global_offset(children, start_inline_ix, start.offset)
        } else {
            0
        };
        let end_global = if block_ix == last_ix {
            point_global_offset(children, end_inline_ix, end.offset)
        } else {
            total_len
        };
        if start_global >= end_global {
            continue;
        }

        let mut cursor = 0usize;
        for node in children {
            let Node::Text(t) = node else {
                continue;
            };
            let node_start = cursor;
            let node_end = cursor + t.text.len();
            cursor = node_end;

            if end_global <= node_start || start_global >= node_end {
                continue;
            }
            if !t.marks.has(mark) {
                return false;
            }
        }
    }

    true
}

pub(crate) fn total_inline_text_len(children: &[Node]) -> usize {
    children
        .iter()
        .map(|node| match node {
            Node::Text(t) => t.text.len(),
            Node::Element(_) => 0,
        })
        .sum()
}

/// Byte offset of an inline point within its block, counting across leaves.
pub(crate) fn point_global_offset(children: &[Node], child_ix: usize, offset: usize) -> usize {
    let mut global = 0usize;
    for (ix, node) in children.iter().enumerate() {
        let Node::Text(t) = node else {
            continue;
        };
        if ix == child_ix {
            return global + offset.min(t.text.len());
        }
        global += t.text.len();
    }
    global
}

/// Inverse of [`point_global_offset`] against a rebuilt child list.
pub(crate) fn point_for_global_offset(
    block_path: &[usize],
    children: &[Node],
    global: usize,
) -> Point {
    let mut cursor = 0usize;
    let mut last_text: Option<(usize, usize)> = None;

    for (ix, node) in children.iter().enumerate() {
        let Node::Text(t) = node else {
            continue;
        };
        let node_start = cursor;
        let node_end = cursor + t.text.len();
        cursor = node_end;
        last_text = Some((ix, t.text.len()));

        if global <= node_end {
            let mut path = block_path.to_vec();
            path.push(ix);
            return Point::new(path, global - node_start);
        }
    }

    let (ix, len) = last_text.unwrap_or((0, 0));
    let mut path = block_path.to_vec();
    path.push(ix);
    Point::new(path, len)
}
