use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text alignment carried by the text-align tune.
///
/// `justify` is only reachable through the tune; the per-field alignment
/// hints on image/cta data use [`super::HorizontalAlign`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Left
    }
}

/// The text-align tune payload: `{ "alignment": "left"|"center"|"right"|"justify" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAlignTune {
    #[serde(default)]
    pub alignment: Alignment,
}

/// The link tune payload attached to image blocks: wraps the rendered image
/// in an anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTune {
    pub url: String,
}

/// Cross-cutting decorations attachable to any block.
///
/// Tunes this engine does not recognize are preserved verbatim in `extra`
/// so that saving a document never drops decorations written by a newer
/// editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Tunes {
    #[serde(
        rename = "textAlignTune",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text_align: Option<TextAlignTune>,

    #[serde(rename = "linkTune", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkTune>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Tunes {
    pub fn is_empty(&self) -> bool {
        self.text_align.is_none() && self.link.is_none() && self.extra.is_empty()
    }

    /// Alignment requested by the text-align tune, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        self.text_align.as_ref().map(|t| t.alignment)
    }
}
