//! Adapter between the stored text column and the typed document model.
//!
//! A stored field holds either a JSON block document or, for pre-migration
//! rows, a raw HTML string. The two are distinguished purely structurally:
//! parseable JSON carrying a `blocks` array is a document, everything else
//! is legacy HTML. Both states are valid and must render without error, so
//! [`parse`] is infallible.

use serde_json::Value;

use crate::html;
use crate::schema::Document;

/// One stored content field, as the persistence layer hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredContent {
    Document(Document),
    /// Pre-migration raw HTML, rendered verbatim downstream. Sanitization
    /// is a write-time contract and never applies to legacy reads.
    LegacyHtml(String),
}

impl StoredContent {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            StoredContent::Document(doc) => Some(doc),
            StoredContent::LegacyHtml(_) => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredContent::LegacyHtml(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Parse a stored field.
///
/// Falls back to [`StoredContent::LegacyHtml`] whenever the field is not a
/// JSON object with a `blocks` array - malformed JSON is a recovered state,
/// never a surfaced failure.
pub fn parse(raw: &str) -> StoredContent {
    let has_blocks_array = matches!(
        serde_json::from_str::<Value>(raw),
        Ok(Value::Object(ref map)) if map.get("blocks").is_some_and(Value::is_array)
    );
    if !has_blocks_array {
        tracing::debug!("stored field is not a block document; treating as legacy HTML");
        return StoredContent::LegacyHtml(raw.to_string());
    }

    match serde_json::from_str::<Document>(raw) {
        Ok(doc) => StoredContent::Document(doc),
        Err(err) => {
            // A blocks array whose entries don't decode (e.g. non-object
            // blocks) gets the same fallback as non-JSON content
            tracing::debug!(%err, "block document failed to decode; treating as legacy HTML");
            StoredContent::LegacyHtml(raw.to_string())
        }
    }
}

/// Serialize a document to its stored JSON string.
///
/// Every rich-text fragment field (per the catalog's sanitize whitelist) is
/// run through the sanitizer immediately before encoding - sanitization
/// happens at serialization time, not at keystroke time, so in-editor state
/// may be transiently dirty.
pub fn serialize(doc: &Document) -> Result<String, StoreError> {
    let mut doc = doc.clone();
    for block in &mut doc.blocks {
        block.data.sanitize_fragments(&mut |fragment| html::sanitize(fragment));
    }
    serde_json::to_string(&doc).map_err(StoreError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Block, BlockData, ListData, ListStyle, ParagraphData};
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_html_parses_as_legacy() {
        let content = parse("<p>Hello</p>");
        assert_eq!(content, StoredContent::LegacyHtml("<p>Hello</p>".into()));
    }

    #[test]
    fn invalid_json_parses_as_legacy() {
        assert!(parse("{not json").is_legacy());
        assert!(parse("").is_legacy());
    }

    #[test]
    fn json_without_blocks_array_parses_as_legacy() {
        assert!(parse(r#"{"title":"no blocks here"}"#).is_legacy());
        assert!(parse(r#"{"blocks":"not an array"}"#).is_legacy());
        assert!(parse(r#"[1,2,3]"#).is_legacy());
    }

    #[test]
    fn block_document_parses_as_document() {
        let content = parse(r#"{"blocks":[{"type":"paragraph","data":{"text":"Hi"}}]}"#);
        let doc = content.as_document().expect("should parse as document");
        assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0].data {
            BlockData::Paragraph(p) => assert_eq!(p.text, "Hi"),
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_blocks_fall_back_to_legacy() {
        assert!(parse(r#"{"blocks":[42]}"#).is_legacy());
    }

    #[test]
    fn serialize_sanitizes_paragraph_text() {
        let doc = Document {
            blocks: vec![Block::new(BlockData::Paragraph(ParagraphData {
                text: r#"<span style="font-family: Arial">Hi</span>"#.into(),
            }))],
        };
        let raw = serialize(&doc).unwrap();
        assert!(raw.contains("<span>Hi</span>"), "raw was {raw}");
    }

    #[test]
    fn serialize_sanitizes_each_list_item() {
        let doc = Document {
            blocks: vec![Block::new(BlockData::List(ListData {
                style: ListStyle::Unordered,
                items: vec![
                    r#"<span style="background-color: red">a</span>"#.into(),
                    "b".into(),
                ],
            }))],
        };
        let raw = serialize(&doc).unwrap();
        assert!(raw.contains("<span>a</span>"), "raw was {raw}");
    }

    #[test]
    fn serialize_does_not_mutate_the_input() {
        let dirty = r#"<span style="font-family: Arial">Hi</span>"#;
        let doc = Document {
            blocks: vec![Block::new(BlockData::Paragraph(ParagraphData {
                text: dirty.into(),
            }))],
        };
        serialize(&doc).unwrap();
        match &doc.blocks[0].data {
            BlockData::Paragraph(p) => assert_eq!(p.text, dirty),
            other => panic!("expected paragraph, got {other:?}"),
        }
    }
}
