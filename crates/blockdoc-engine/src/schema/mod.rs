//! The block catalog: document structure, per-type data shapes, and tunes.
//!
//! The wire format is `{ "blocks": [{ "id"?, "type", "data", "tunes"? }] }`.
//! Block order is significant and preserved verbatim. Decoding is tolerant:
//! an unrecognized `type`, or a recognized `type` whose `data` payload does
//! not match its shape, becomes [`BlockData::Unknown`] and round-trips its
//! payload untouched instead of failing the whole document.

pub mod blocks;
pub mod document;
pub mod tunes;

pub use blocks::{
    BlockData, CardItem, ContentCardsData, ColumnData, CtaData, CtaKind, HeaderData,
    HorizontalAlign, ImageData, ImageFile, ImagePosition, LinkTarget, ListData, ListStyle,
    ParagraphData, TableData, YoutubeData, MAX_CARDS_PER_ROW, MAX_HEADER_LEVEL, MIN_CARDS,
    MIN_CARDS_PER_ROW, MIN_HEADER_LEVEL,
};
pub use document::{Block, Document};
pub use tunes::{Alignment, LinkTune, TextAlignTune, Tunes};
