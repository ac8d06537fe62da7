use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{BlockData, Tunes};

/// An ordered sequence of blocks representing one stored rich-text field.
///
/// Order is significant and preserved verbatim across save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find a block by its identifier.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id.as_deref() == Some(id))
    }
}

/// One typed, self-contained unit of document content.
///
/// The `id` is stable across edits and used for list reconciliation by the
/// editing surface; it carries no semantic meaning and is optional on the
/// wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Option<String>,
    pub data: BlockData,
    pub tunes: Tunes,
}

impl Block {
    pub fn new(data: BlockData) -> Self {
        Self {
            id: None,
            data: data.normalized(),
            tunes: Tunes::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_tunes(mut self, tunes: Tunes) -> Self {
        self.tunes = tunes;
        self
    }
}

/// Wire shape of a block: `{ id?, type, data, tunes? }`.
///
/// `Block` gets hand-written serde impls through this struct because the
/// unknown-type fallback (keep `type` + `data` verbatim, never error) is not
/// expressible with serde's derived enum taggings.
#[derive(Serialize, Deserialize)]
struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Tunes::is_empty")]
    tunes: Tunes,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, data) = self
            .data
            .to_wire()
            .map_err(serde::ser::Error::custom)?;
        RawBlock {
            id: self.id.clone(),
            kind,
            data,
            tunes: self.tunes.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        if raw.kind.is_empty() {
            return Err(D::Error::custom("block is missing a type"));
        }
        Ok(Block {
            id: raw.id,
            data: BlockData::from_wire(raw.kind, raw.data),
            tunes: raw.tunes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Alignment, ParagraphData, TextAlignTune};
    use pretty_assertions::assert_eq;

    #[test]
    fn block_round_trips_with_id_and_tunes() {
        let json = r#"{"id":"abc123","type":"paragraph","data":{"text":"Hi"},"tunes":{"textAlignTune":{"alignment":"center"}}}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.id.as_deref(), Some("abc123"));
        assert_eq!(block.tunes.alignment(), Some(Alignment::Center));
        match &block.data {
            BlockData::Paragraph(p) => assert_eq!(p.text, "Hi"),
            other => panic!("expected paragraph, got {other:?}"),
        }

        let encoded = serde_json::to_string(&block).unwrap();
        let reparsed: Block = serde_json::from_str(&encoded).unwrap();
        assert_eq!(block, reparsed);
    }

    #[test]
    fn block_without_id_or_tunes_omits_them() {
        let block = Block::new(BlockData::Paragraph(ParagraphData { text: "Hi".into() }));
        let encoded = serde_json::to_string(&block).unwrap();
        assert_eq!(encoded, r#"{"type":"paragraph","data":{"text":"Hi"}}"#);
    }

    #[test]
    fn unknown_block_type_round_trips() {
        let json = r#"{"type":"futureBlock","data":{"shiny":true}}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.data.kind(), "futureBlock");
        let encoded = serde_json::to_string(&block).unwrap();
        assert_eq!(encoded, json);
    }

    #[test]
    fn document_preserves_block_order() {
        let json = r#"{"blocks":[
            {"type":"header","data":{"text":"Title","level":1}},
            {"type":"paragraph","data":{"text":"One"}},
            {"type":"paragraph","data":{"text":"Two"}}
        ]}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let kinds: Vec<&str> = doc.blocks.iter().map(|b| b.data.kind()).collect();
        assert_eq!(kinds, vec!["header", "paragraph", "paragraph"]);
    }

    #[test]
    fn missing_type_is_rejected() {
        let result = serde_json::from_str::<Block>(r#"{"data":{"text":"Hi"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn block_lookup_by_id() {
        let doc = Document {
            blocks: vec![
                Block::new(BlockData::Paragraph(ParagraphData::default())).with_id("a"),
                Block::new(BlockData::Paragraph(ParagraphData::default())).with_id("b"),
            ],
        };
        assert!(doc.block("b").is_some());
        assert!(doc.block("missing").is_none());
    }

    #[test]
    fn tune_setter_builds() {
        let block = Block::new(BlockData::Paragraph(ParagraphData::default())).with_tunes(Tunes {
            text_align: Some(TextAlignTune {
                alignment: Alignment::Right,
            }),
            ..Default::default()
        });
        assert_eq!(block.tunes.alignment(), Some(Alignment::Right));
    }
}
