//! The mutation seam: a snapshot-backed builder that turns high-level edits
//! (`toggle_mark`, `set_block`, `wrap_block`, `unwrap_block`) into an explicit
//! list of ops. Each call computes its ops against the evolving preview
//! snapshot, so chained edits observe one another; `finish` yields the
//! recorded transaction with the remapped selection.

use crate::core::{
    ApplyError, Document, Editor, ElementNode, Mark, Marks, Node, Point, Selection, TextNode,
    apply_op_to, clamp_to_char_boundary,
};
use crate::ops::{Op, Path, Transaction};
use crate::query::{
    children_at, inline_blocks_in_selection, nearest_ancestor_of_kind, node_at, ordered_points,
    point_for_global_offset, point_global_offset, selection_has_mark, total_inline_text_len,
};

#[derive(Debug, Clone)]
pub struct ChangeError {
    message: String,
}

impl ChangeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplyError> for ChangeError {
    fn from(value: ApplyError) -> Self {
        ChangeError::new(format!("failed to apply edit: {value:?}"))
    }
}

pub struct Change {
    doc: Document,
    selection: Selection,
    ops: Vec<Op>,
    source: Option<String>,
}

impl Editor {
    pub fn change(&self) -> Change {
        Change {
            doc: self.doc().clone(),
            selection: self.selection().clone(),
            ops: Vec::new(),
            source: None,
        }
    }
}

impl Change {
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn finish(self) -> Transaction {
        let tx = Transaction::new(self.ops).selection_after(self.selection);
        match self.source {
            Some(source) => tx.source(source),
            None => tx,
        }
    }

    /// Flip the mark for the selection: removed if every covered leaf carries
    /// it, applied otherwise.
    pub fn toggle_mark(self, mark: Mark) -> Result<Self, ChangeError> {
        let on = !selection_has_mark(&self.doc, &self.selection, mark);
        self.set_mark(mark, on)
    }

    pub fn add_mark(self, mark: Mark) -> Result<Self, ChangeError> {
        self.set_mark(mark, true)
    }

    pub fn remove_mark(self, mark: Mark) -> Result<Self, ChangeError> {
        self.set_mark(mark, false)
    }

    fn set_mark(mut self, mark: Mark, on: bool) -> Result<Self, ChangeError> {
        let sel = self.selection.clone();
        let apply = move |mut marks: Marks| {
            marks.set(mark, on);
            marks
        };

        let (ops, selection_after) = if sel.is_collapsed() {
            caret_mark_ops(&self.doc, &sel.focus, &apply)?
        } else {
            range_mark_ops(&self.doc, &sel, &apply)?
        };

        self.record(ops)?;
        self.selection = selection_after;
        Ok(self)
    }

    /// Set the kind of every inline block intersecting the selection.
    pub fn set_block(mut self, kind: &str) -> Result<Self, ChangeError> {
        let mut ops = Vec::new();
        for (path, el) in inline_blocks_in_selection(&self.doc, &self.selection) {
            if el.kind != kind {
                ops.push(Op::SetNodeKind {
                    path,
                    kind: kind.to_string(),
                });
            }
        }
        self.record(ops)?;
        Ok(self)
    }

    /// Wrap the contiguous sibling range of blocks covered by the selection
    /// in a new element of `kind`.
    pub fn wrap_block(mut self, kind: &str) -> Result<Self, ChangeError> {
        let sel = self.selection.clone();
        let (start, end) = ordered_points(&sel);
        let start_block_path = start
            .path
            .split_last()
            .map(|(_, p)| p.to_vec())
            .ok_or_else(|| ChangeError::new("selection start is not in a text block"))?;
        let end_block_path = end
            .path
            .split_last()
            .map(|(_, p)| p.to_vec())
            .ok_or_else(|| ChangeError::new("selection end is not in a text block"))?;

        let (start_ix, start_parent) = start_block_path
            .split_last()
            .ok_or_else(|| ChangeError::new("selection start is not a block node"))?;
        let (end_ix, end_parent) = end_block_path
            .split_last()
            .ok_or_else(|| ChangeError::new("selection end is not a block node"))?;

        if start_parent != end_parent {
            return Err(ChangeError::new(
                "selection must be within a single block container",
            ));
        }

        let (start_ix, end_ix) = if start_ix <= end_ix {
            (*start_ix, *end_ix)
        } else {
            (*end_ix, *start_ix)
        };
        let parent_path = start_parent.to_vec();

        let Some(parent_children) = children_at(&self.doc, &parent_path) else {
            return Err(ChangeError::new("selection parent is not a container"));
        };
        if start_ix >= parent_children.len() || end_ix >= parent_children.len() {
            return Err(ChangeError::new("selection block range is out of bounds"));
        }

        let selected: Vec<Node> = parent_children
            .iter()
            .cloned()
            .take(end_ix + 1)
            .skip(start_ix)
            .collect();

        let wrapper = Node::Element(ElementNode {
            kind: kind.to_string(),
            children: selected,
        });

        let mut ops: Vec<Op> = Vec::new();
        for ix in (start_ix..=end_ix).rev() {
            let mut path = parent_path.clone();
            path.push(ix);
            ops.push(Op::RemoveNode { path });
        }
        let mut insert_path = parent_path.clone();
        insert_path.push(start_ix);
        ops.push(Op::InsertNode {
            path: insert_path,
            node: wrapper,
        });

        let remap_point = |point: &Point| -> Point {
            if !point.path.starts_with(&parent_path) || point.path.len() < parent_path.len() + 2 {
                return point.clone();
            }
            let block_ix = point.path[parent_path.len()];
            if block_ix < start_ix || block_ix > end_ix {
                return point.clone();
            }
            let mut new_path = parent_path.clone();
            new_path.push(start_ix);
            new_path.push(block_ix - start_ix);
            new_path.extend_from_slice(&point.path[parent_path.len() + 1..]);
            Point {
                path: new_path,
                offset: point.offset,
            }
        };

        let selection_after = Selection {
            anchor: remap_point(&sel.anchor),
            focus: remap_point(&sel.focus),
        };

        self.record(ops)?;
        self.selection = selection_after;
        Ok(self)
    }

    /// Splice the children of the nearest enclosing element of `kind` into
    /// its parent. No-op when the selection is not inside one.
    pub fn unwrap_block(mut self, kind: &str) -> Result<Self, ChangeError> {
        let sel = self.selection.clone();
        let Some(wrapper_path) = nearest_ancestor_of_kind(&self.doc, &sel.focus.path, kind) else {
            return Ok(self);
        };
        let (wrapper_ix, parent_path) = wrapper_path
            .split_last()
            .map(|(ix, p)| (*ix, p.to_vec()))
            .ok_or_else(|| ChangeError::new("invalid wrapper path"))?;

        let Some(Node::Element(wrapper)) = node_at(&self.doc, &wrapper_path).cloned() else {
            return Err(ChangeError::new("wrapper node not found"));
        };

        let children = wrapper.children;

        let mut ops: Vec<Op> = Vec::new();
        ops.push(Op::RemoveNode {
            path: wrapper_path.clone(),
        });
        for (i, node) in children.into_iter().enumerate() {
            let mut path = parent_path.clone();
            path.push(wrapper_ix + i);
            ops.push(Op::InsertNode { path, node });
        }

        let remap_point = |point: &Point| -> Point {
            if point.path.len() < wrapper_path.len() + 1 {
                return point.clone();
            }
            if !point.path.starts_with(&wrapper_path) {
                return point.clone();
            }
            let inner_ix = point.path[wrapper_path.len()];
            let mut new_path = parent_path.clone();
            new_path.push(wrapper_ix + inner_ix);
            new_path.extend_from_slice(&point.path[wrapper_path.len() + 1..]);
            Point {
                path: new_path,
                offset: point.offset,
            }
        };

        let selection_after = Selection {
            anchor: remap_point(&sel.anchor),
            focus: remap_point(&sel.focus),
        };

        self.record(ops)?;
        self.selection = selection_after;
        Ok(self)
    }

    fn record(&mut self, ops: Vec<Op>) -> Result<(), ChangeError> {
        for op in ops {
            apply_op_to(&mut self.doc, &mut self.selection, op.clone())?;
            self.ops.push(op);
        }
        Ok(())
    }
}

fn caret_mark_ops(
    doc: &Document,
    focus: &Point,
    apply: &dyn Fn(Marks) -> Marks,
) -> Result<(Vec<Op>, Selection), ChangeError> {
    let (child_ix, block_path) = focus
        .path
        .split_last()
        .ok_or_else(|| ChangeError::new("selection is not in a text node"))?;

    let Some(Node::Element(el)) = node_at(doc, block_path) else {
        return Err(ChangeError::new("selection is not in a text block"));
    };
    let Some(Node::Text(text)) = el.children.get(*child_ix) else {
        return Err(ChangeError::new("selection is not in a text node"));
    };

    let cursor = clamp_to_char_boundary(&text.text, focus.offset);
    let marks_before = text.marks;
    let marks_after = apply(marks_before);

    if text.text.is_empty() {
        let selection_after = Selection::collapsed(Point::new(focus.path.clone(), 0));
        return Ok((
            vec![Op::SetTextMarks {
                path: focus.path.clone(),
                marks: marks_after,
            }],
            selection_after,
        ));
    }

    // Split the leaf at the caret and seed an empty leaf carrying the new
    // marks; subsequent insertion inherits them.
    let mut replacement: Vec<Node> = Vec::new();
    let base_child_ix = *child_ix;
    let mut caret_child_ix = base_child_ix;

    let left = text.text.get(..cursor).unwrap_or("").to_string();
    let right = text.text.get(cursor..).unwrap_or("").to_string();

    if !left.is_empty() {
        replacement.push(Node::Text(TextNode {
            text: left,
            marks: marks_before,
        }));
        caret_child_ix += 1;
    }

    replacement.push(Node::Text(TextNode {
        text: String::new(),
        marks: marks_after,
    }));

    if !right.is_empty() {
        replacement.push(Node::Text(TextNode {
            text: right,
            marks: marks_before,
        }));
    }

    let mut ops: Vec<Op> = Vec::new();
    ops.push(Op::RemoveNode {
        path: focus.path.clone(),
    });
    for (i, node) in replacement.into_iter().enumerate() {
        let mut path = block_path.to_vec();
        path.push(base_child_ix + i);
        ops.push(Op::InsertNode { path, node });
    }

    let mut caret_path = block_path.to_vec();
    caret_path.push(caret_child_ix);
    let selection_after = Selection::collapsed(Point::new(caret_path, 0));
    Ok((ops, selection_after))
}

fn range_mark_ops(
    doc: &Document,
    sel: &Selection,
    apply: &dyn Fn(Marks) -> Marks,
) -> Result<(Vec<Op>, Selection), ChangeError> {
    let (start, end) = ordered_points(sel);
    let blocks = inline_blocks_in_selection(doc, sel);
    if blocks.is_empty() {
        return Err(ChangeError::new("selection is not in a text block"));
    }
    let last_ix = blocks.len() - 1;

    let start_inline_ix = start.path.last().copied().unwrap_or(0);
    let end_inline_ix = end.path.last().copied().unwrap_or(0);

    let mut ops: Vec<Op> = Vec::new();
    let mut new_anchor = sel.anchor.clone();
    let mut new_focus = sel.focus.clone();

    for (block_ix, (block_path, el)) in blocks.iter().enumerate() {
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

        let new_children = apply_marks_in_block(children, start_global, end_global, apply);

        for child_ix in (0..children.len()).rev() {
            let mut remove_path = block_path.clone();
            remove_path.push(child_ix);
            ops.push(Op::RemoveNode { path: remove_path });
        }
        for (child_ix, node) in new_children.iter().cloned().enumerate() {
            let mut insert_path = block_path.clone();
            insert_path.push(child_ix);
            ops.push(Op::InsertNode {
                path: insert_path,
                node,
            });
        }

        if is_point_in_block(&new_anchor, block_path) {
            let global = point_global_offset(
                children,
                new_anchor.path.last().copied().unwrap_or(0),
                new_anchor.offset,
            );
            new_anchor = point_for_global_offset(block_path, &new_children, global);
        }
        if is_point_in_block(&new_focus, block_path) {
            let global = point_global_offset(
                children,
                new_focus.path.last().copied().unwrap_or(0),
                new_focus.offset,
            );
            new_focus = point_for_global_offset(block_path, &new_children, global);
        }
    }

    Ok((
        ops,
        Selection {
            anchor: new_anchor,
            focus: new_focus,
        },
    ))
}

fn is_point_in_block(point: &Point, block_path: &[usize]) -> bool {
    point.path.len() == block_path.len() + 1 && point.path.starts_with(block_path)
}

fn apply_marks_in_block(
    children: &[Node],
    start: usize,
    end: usize,
    apply: &dyn Fn(Marks) -> Marks,
) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(children.len());
    let mut cursor = 0usize;

    for node in children {
        let Node::Text(t) = node else {
            out.push(node.clone());
            continue;
        };

        let node_start = cursor;
        let node_end = cursor + t.text.len();
        cursor = node_end;

        if t.text.is_empty() || node_end <= start || node_start >= end {
            out.push(node.clone());
            continue;
        }

        let seg_start = clamp_to_char_boundary(&t.text, start.max(node_start) - node_start);
        let seg_end = clamp_to_char_boundary(&t.text, end.min(node_end) - node_start);
        if seg_start >= seg_end {
            out.push(node.clone());
            continue;
        }

        let before = &t.text[..seg_start];
        let middle = &t.text[seg_start..seg_end];
        let after = &t.text[seg_end..];

        if !before.is_empty() {
            out.push(Node::text(before, t.marks));
        }
        out.push(Node::text(middle, apply(t.marks)));
        if !after.is_empty() {
            out.push(Node::text(after, t.marks));
        }
    }

    out
}
