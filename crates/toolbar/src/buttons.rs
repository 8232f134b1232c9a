//! The toolbar model: one entry per formatting control, in display order,
//! with the icon name the UI shows and the active-state query the pressed
//! styling is driven by.

use plume_editor_core::Mark;

use crate::formatting::FormattingState;
use crate::toggle::BlockType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarControl {
    Mark(Mark),
    Block(BlockType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub icon: &'static str,
    pub control: ToolbarControl,
}

impl ToolbarButton {
    pub fn mark(icon: &'static str, mark: Mark) -> Self {
        Self {
            icon,
            control: ToolbarControl::Mark(mark),
        }
    }

    pub fn block(icon: &'static str, block: BlockType) -> Self {
        Self {
            icon,
            control: ToolbarControl::Block(block),
        }
    }

    pub fn is_active(&self, state: &FormattingState) -> bool {
        match self.control {
            ToolbarControl::Mark(mark) => state.has_mark(mark),
            ToolbarControl::Block(block) => state.has_block(block.kind()),
        }
    }
}

pub fn standard_toolbar() -> Vec<ToolbarButton> {
    vec![
        ToolbarButton::mark("format_bold", Mark::Bold),
        ToolbarButton::mark("format_italic", Mark::Italic),
        ToolbarButton::mark("format_underlined", Mark::Underlined),
        ToolbarButton::mark("code", Mark::Code),
        ToolbarButton::block("looks_one", BlockType::HeadingOne),
        ToolbarButton::block("looks_two", BlockType::HeadingTwo),
        ToolbarButton::block("format_quote", BlockType::BlockQuote),
        ToolbarButton::block("format_list_numbered", BlockType::NumberedList),
        ToolbarButton::block("format_list_bulleted", BlockType::BulletedList),
    ]
}
