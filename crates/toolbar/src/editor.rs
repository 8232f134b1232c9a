//! The headless editor component: an editor-core instance plus the toolbar,
//! hotkey, and rendering wiring. Keyboard and button input comes in as plain
//! values; the embedder renders `to_html()` and the toolbar state however it
//! likes.

use plume_editor_core::{ChangeError, Editor, Mark};

use crate::buttons::{ToolbarButton, ToolbarControl, standard_toolbar};
use crate::formatting::FormattingState;
use crate::hotkeys::{KeyChord, mark_for_chord};
use crate::render::to_html;
use crate::toggle::{BlockType, Edit, MarkToggle, resolve_block_toggle};
use crate::value::EditorValue;

pub struct RichTextEditor {
    editor: Editor,
    toolbar: Vec<ToolbarButton>,
}

impl Default for RichTextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RichTextEditor {
    pub fn new() -> Self {
        Self {
            editor: Editor::default(),
            toolbar: standard_toolbar(),
        }
    }

    /// Mount over an initial-document blob. The selection starts collapsed at
    /// the first text leaf.
    pub fn from_value(value: EditorValue) -> Self {
        let doc = value.into_document();
        let selection = plume_editor_core::Selection::collapsed(plume_editor_core::Point::new(
            vec![0, 0],
            0,
        ));
        Self {
            editor: Editor::new(doc, selection),
            toolbar: standard_toolbar(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn toolbar(&self) -> &[ToolbarButton] {
        &self.toolbar
    }

    pub fn formatting(&self) -> FormattingState {
        FormattingState::capture(&self.editor)
    }

    /// Dispatch a key chord. Returns `true` when the chord was consumed (the
    /// embedder must then suppress default handling); unmapped chords return
    /// `false` and must propagate.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Result<bool, ChangeError> {
        let Some(mark) = mark_for_chord(chord) else {
            return Ok(false);
        };
        self.toggle_mark(mark)?;
        Ok(true)
    }

    pub fn press(&mut self, control: ToolbarControl) -> Result<(), ChangeError> {
        match control {
            ToolbarControl::Mark(mark) => self.toggle_mark(mark),
            ToolbarControl::Block(block) => self.toggle_block(block),
        }
    }

    pub fn toggle_mark(&mut self, mark: Mark) -> Result<(), ChangeError> {
        let state = self.formatting();
        let change = match MarkToggle::resolve(state.has_mark(mark)) {
            MarkToggle::Apply => self.editor.change().add_mark(mark)?,
            MarkToggle::Remove => self.editor.change().remove_mark(mark)?,
        };
        self.editor
            .apply(change.source(format!("toolbar:mark:{}", mark.kind())).finish())
            .map_err(ChangeError::from)
    }

    pub fn toggle_block(&mut self, requested: BlockType) -> Result<(), ChangeError> {
        let state = self.formatting();
        let action = resolve_block_toggle(state.block_toggle_context(requested), requested);

        let mut change = self.editor.change();
        for edit in action.edits() {
            change = match edit {
                Edit::SetBlock(t) => change.set_block(t.kind())?,
                Edit::WrapBlock(t) => change.wrap_block(t.kind())?,
                Edit::UnwrapBlock(t) => change.unwrap_block(t.kind())?,
            };
        }

        self.editor
            .apply(
                change
                    .source(format!("toolbar:block:{}", requested.kind()))
                    .finish(),
            )
            .map_err(ChangeError::from)
    }

    pub fn to_html(&self) -> String {
        to_html(self.editor.doc())
    }

    pub fn value(&self) -> EditorValue {
        EditorValue::from_document(self.editor.doc())
    }
}
