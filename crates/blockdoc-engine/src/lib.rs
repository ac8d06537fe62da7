/*!
 * # blockdoc-engine
 *
 * Core engine for block-based rich-text documents: an ordered sequence of
 * typed blocks (paragraphs, headers, lists, tables, images, embeds, column
 * layouts, card grids, call-to-action buttons), stored as a single JSON
 * string and rendered deterministically downstream.
 *
 * ## Architecture Overview
 *
 * - **`schema`**: the block catalog. `Document` / `Block` / `BlockData` form
 *   a closed tagged union over the wire `type` string, with an `Unknown`
 *   variant that preserves unrecognized payloads verbatim so newer content
 *   loads without error on older code.
 * - **`html`**: a lossless fragment lexer (Logos), a small node tree, and
 *   the write-time sanitizer that strips disallowed inline styles and
 *   collapses redundant styling wrappers to a fixpoint.
 * - **`store`**: the adapter between the stored text column and the typed
 *   model, with a legacy raw-HTML fallback for pre-migration content.
 * - **`media`**: YouTube URL parsing, link normalization, WhatsApp link
 *   synthesis.
 * - **`editing`**: command-based mutation of a document with a version
 *   counter and an injected change observer; uploads are a capability
 *   handed in by the host, never performed by the engine.
 *
 * The engine performs no I/O of its own. The owning surface loads the raw
 * string, calls [`store::parse`], edits through [`editing::EditorDocument`],
 * and persists whatever [`store::serialize`] returns.
 */

pub mod editing;
pub mod html;
pub mod media;
pub mod schema;
pub mod store;

// Re-export key types for easier usage
pub use editing::{Cmd, EditError, EditorDocument};
pub use schema::{Alignment, Block, BlockData, Document, Tunes};
pub use store::StoredContent;
