//! Per-block-type render functions, dispatched on the data variant.

mod cards;
mod column;
mod cta;
mod header;
mod image;
mod list;
mod paragraph;
mod table;
mod youtube;

use blockdoc_engine::schema::{Block, BlockData};

use crate::RenderOptions;

/// Render one block into `out`. Unknown types contribute nothing - the
/// catalog is forward-compatible with content saved by newer versions.
pub(crate) fn render_block(out: &mut String, block: &Block, opts: &RenderOptions) {
    match &block.data {
        BlockData::Paragraph(data) => paragraph::render(out, data, &block.tunes, opts),
        BlockData::Header(data) => header::render(out, data, &block.tunes),
        BlockData::List(data) => list::render(out, data, &block.tunes),
        BlockData::Table(data) => table::render(out, data, &block.tunes),
        BlockData::Image(data) => image::render(out, data, &block.tunes),
        BlockData::Youtube(data) => youtube::render(out, data),
        BlockData::Column(data) => column::render(out, data, opts),
        BlockData::ContentCards(data) => cards::render(out, data),
        BlockData::Cta(data) => cta::render(out, data),
        BlockData::Unknown { .. } => {}
    }
}
