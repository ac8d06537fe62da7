//! HTML fragment model and the write-time sanitizer.
//!
//! Fragments inside text-bearing block data (paragraph text, header text,
//! list items, table cells) are small, flat snippets produced by a
//! contenteditable surface. This module gives them a lossless tokenizer
//! ([`lexer`]), a forgiving node tree ([`tree`]), the normalization pass
//! that runs before persistence ([`sanitize`]), and the text projection
//! helpers the renderer shares ([`text`]).

pub mod lexer;
pub mod sanitize;
pub mod text;
pub mod tree;

pub use sanitize::sanitize;
pub use text::{inline_text_align, plain_text, truncate_words, word_count};
