//! Pure toggle resolution: given what is active at the selection and a
//! requested formatting action, decide the edits to issue. The list handling
//! is deliberately asymmetric (same-type toggles collapse to the default
//! block and strip both containers; other-type toggles rewrap in place) and
//! the lowered edit order matches the observable order of the resulting
//! document changes.

use crate::formatting::FormattingState;

pub const DEFAULT_BLOCK: BlockType = BlockType::Paragraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    BlockQuote,
    ListItem,
    BulletedList,
    NumberedList,
}

impl BlockType {
    pub const ALL: [BlockType; 7] = [
        BlockType::Paragraph,
        BlockType::HeadingOne,
        BlockType::HeadingTwo,
        BlockType::BlockQuote,
        BlockType::ListItem,
        BlockType::BulletedList,
        BlockType::NumberedList,
    ];

    pub fn kind(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::HeadingOne => "heading_one",
            BlockType::HeadingTwo => "heading_two",
            BlockType::BlockQuote => "block_quote",
            BlockType::ListItem => "list_item",
            BlockType::BulletedList => "bulleted_list",
            BlockType::NumberedList => "numbered_list",
        }
    }

    pub fn from_kind(kind: &str) -> Option<Self> {
        BlockType::ALL.into_iter().find(|t| t.kind() == kind)
    }

    pub fn is_list(self) -> bool {
        matches!(self, BlockType::BulletedList | BlockType::NumberedList)
    }

    /// The other list container kind; identity for non-list types.
    fn counterpart(self) -> BlockType {
        match self {
            BlockType::BulletedList => BlockType::NumberedList,
            BlockType::NumberedList => BlockType::BulletedList,
            other => other,
        }
    }
}

/// Outcome of toggling a mark: a pure flip of its active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkToggle {
    Apply,
    Remove,
}

impl MarkToggle {
    pub fn resolve(active: bool) -> Self {
        if active {
            MarkToggle::Remove
        } else {
            MarkToggle::Apply
        }
    }
}

/// What the resolver needs to know about the selection for one requested
/// block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockToggleContext {
    /// The requested type is already among the selected blocks.
    pub requested_active: bool,
    /// The selection sits on list items.
    pub in_list: bool,
    /// Some selected block has a nearest list container of the requested
    /// type.
    pub in_requested_list: bool,
}

impl FormattingState {
    pub fn block_toggle_context(&self, requested: BlockType) -> BlockToggleContext {
        BlockToggleContext {
            requested_active: self.has_block(requested.kind()),
            in_list: self.is_in_list(),
            in_requested_list: self.is_in_list_of(requested.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    /// Plain toggle outside any list.
    SetBlock(BlockType),
    /// Leaving a list: retype the blocks, then strip both container kinds.
    SetBlockAndUnwrapLists(BlockType),
    /// Entering a list from plain blocks: retype to list items, then wrap.
    WrapInList(BlockType),
    /// Already listed, other kind requested: swap the container in place.
    SwitchListTo(BlockType),
}

/// A single call on the document change seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    SetBlock(BlockType),
    WrapBlock(BlockType),
    UnwrapBlock(BlockType),
}

impl BlockAction {
    /// The ordered seam calls realizing this action. Both container kinds are
    /// unwrapped when leaving a list; only the absent one is a no-op.
    pub fn edits(self) -> Vec<Edit> {
        match self {
            BlockAction::SetBlock(t) => vec![Edit::SetBlock(t)],
            BlockAction::SetBlockAndUnwrapLists(t) => vec![
                Edit::SetBlock(t),
                Edit::UnwrapBlock(BlockType::BulletedList),
                Edit::UnwrapBlock(BlockType::NumberedList),
            ],
            BlockAction::WrapInList(t) => {
                vec![Edit::SetBlock(BlockType::ListItem), Edit::WrapBlock(t)]
            }
            BlockAction::SwitchListTo(t) => {
                vec![Edit::UnwrapBlock(t.counterpart()), Edit::WrapBlock(t)]
            }
        }
    }
}

pub fn resolve_block_toggle(ctx: BlockToggleContext, requested: BlockType) -> BlockAction {
    if !requested.is_list() {
        let next = if ctx.requested_active {
            DEFAULT_BLOCK
        } else {
            requested
        };
        if ctx.in_list {
            BlockAction::SetBlockAndUnwrapLists(next)
        } else {
            BlockAction::SetBlock(next)
        }
    } else if ctx.in_list && ctx.in_requested_list {
        BlockAction::SetBlockAndUnwrapLists(DEFAULT_BLOCK)
    } else if ctx.in_list {
        BlockAction::SwitchListTo(requested)
    } else {
        BlockAction::WrapInList(requested)
    }
}
