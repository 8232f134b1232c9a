//! A read-only snapshot of what is active at the current selection, derived
//! fresh from the editor whenever the toolbar or a resolver needs it.

use std::collections::BTreeSet;

use plume_editor_core::{
    Editor, ElementKind, Mark, Marks, inline_blocks_in_selection, nearest_list_container,
    selection_has_mark,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattingState {
    marks: Marks,
    block_kinds: Vec<ElementKind>,
    list_kinds: BTreeSet<ElementKind>,
}

impl FormattingState {
    pub fn capture(editor: &Editor) -> Self {
        let doc = editor.doc();
        let sel = editor.selection();

        let mut marks = Marks::default();
        for mark in Mark::ALL {
            marks.set(mark, selection_has_mark(doc, sel, mark));
        }

        let blocks = inline_blocks_in_selection(doc, sel);
        let block_kinds = blocks.iter().map(|(_, el)| el.kind.clone()).collect();

        let mut list_kinds = BTreeSet::new();
        for (path, _) in &blocks {
            if let Some((_, container)) = nearest_list_container(doc, path) {
                list_kinds.insert(container.kind.clone());
            }
        }

        Self {
            marks,
            block_kinds,
            list_kinds,
        }
    }

    /// Marks active across the whole selection.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.has(mark)
    }

    /// Kinds of the inline blocks covered by the selection, in document
    /// order. List containers are not inline blocks and never appear here.
    pub fn block_kinds(&self) -> &[ElementKind] {
        &self.block_kinds
    }

    pub fn has_block(&self, kind: &str) -> bool {
        self.block_kinds.iter().any(|k| k == kind)
    }

    pub fn is_in_list(&self) -> bool {
        self.has_block("list_item")
    }

    /// Whether some covered block is wrapped in a container of `kind`.
    pub fn is_in_list_of(&self, kind: &str) -> bool {
        self.list_kinds.contains(kind)
    }
}
