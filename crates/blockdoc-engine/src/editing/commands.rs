use crate::schema::{Alignment, BlockData, CardItem, MIN_CARDS};

/// One edit operation against an [`super::EditorDocument`].
///
/// Commands carry replacement values, not diffs: a block widget reports its
/// whole new data slice and the document swaps it in. Incoming data is
/// re-normalized (level/cards-per-row clamps) on application.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Insert a new block at `index` (clamped to the end). A fresh id is
    /// generated when the block carries none.
    InsertBlock { index: usize, data: BlockData },
    /// Remove the block with the given id.
    RemoveBlock { id: String },
    /// Move the block with the given id to position `to`.
    MoveBlock { id: String, to: usize },
    /// Replace a block's data slice wholesale.
    ReplaceData { id: String, data: BlockData },
    /// Set or clear the text-align tune on a block.
    SetAlignment {
        id: String,
        alignment: Option<Alignment>,
    },
    /// Append a card to a content-cards block.
    AddCard { id: String, card: CardItem },
    /// Remove a card from a content-cards block. Rejected when it would
    /// leave fewer than [`MIN_CARDS`] cards.
    RemoveCard { id: String, index: usize },
    /// Change the grid width of a content-cards block (clamped to [2,5]).
    SetCardsPerRow { id: String, cards_per_row: u8 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no block with id {0:?}")]
    UnknownBlock(String),
    #[error("index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("block {0:?} is not a content cards block")]
    NotACardGrid(String),
    #[error("block {0:?} cannot hold an uploaded image")]
    NotAnImageHost(String),
    #[error("card index {index} out of range for {len} cards")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("a content cards block keeps at least {MIN_CARDS} cards")]
    CardFloor,
}
