/*!
 * # blockdoc-render
 *
 * Deterministic, pure rendering of block documents to presentation HTML.
 *
 * [`render`] is total over any well-typed document: a block of a known
 * type never panics, even with missing optional fields (the dependent
 * visual element is omitted), and unknown block types are skipped
 * silently. Legacy raw-HTML content is injected verbatim - sanitization is
 * a write-time contract, not a render-time one.
 *
 * The renderer holds no state and performs no I/O; it is safe to call
 * repeatedly and concurrently.
 */

mod blocks;
mod markup;
mod readmore;

use blockdoc_engine::schema::Document;
use blockdoc_engine::store::StoredContent;

/// Knobs for preview behavior. Word thresholds count words of the
/// text-only projection, not characters.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Paragraphs longer than this many words render as a collapsed
    /// preview with an expand affordance.
    pub paragraph_preview_words: usize,
    /// Same, for column block descriptions.
    pub description_preview_words: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paragraph_preview_words: 60,
            description_preview_words: 20,
        }
    }
}

/// Render a document with default options.
pub fn render(doc: &Document) -> String {
    render_with(doc, &RenderOptions::default())
}

/// Render a document. Blocks render in order; a block that cannot produce
/// output (unknown type, missing destination, unparseable media URL)
/// contributes nothing and never aborts its siblings.
pub fn render_with(doc: &Document, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        blocks::render_block(&mut out, block, opts);
    }
    out
}

/// Render stored content: documents through the block pipeline, legacy
/// HTML injected as-is.
pub fn render_stored(content: &StoredContent) -> String {
    render_stored_with(content, &RenderOptions::default())
}

pub fn render_stored_with(content: &StoredContent, opts: &RenderOptions) -> String {
    match content {
        StoredContent::Document(doc) => render_with(doc, opts),
        StoredContent::LegacyHtml(raw) => raw.clone(),
    }
}
