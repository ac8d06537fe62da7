use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest header level the catalog accepts.
pub const MIN_HEADER_LEVEL: u8 = 1;
/// Highest header level the catalog accepts.
pub const MAX_HEADER_LEVEL: u8 = 6;
/// Header level used when the payload does not carry one.
pub const DEFAULT_HEADER_LEVEL: u8 = 2;

/// A content-cards block never drops below this many cards.
pub const MIN_CARDS: usize = 2;
/// Bounds for the cards-per-row grid setting.
pub const MIN_CARDS_PER_ROW: u8 = 2;
pub const MAX_CARDS_PER_ROW: u8 = 5;

/// Per-type block payload, tagged on the wire by the `type` string.
///
/// The catalog is closed for known types (exhaustive matches downstream) but
/// forward-compatible: anything this version does not recognize decodes into
/// [`BlockData::Unknown`], which keeps the original `type` and `data`
/// verbatim for round-tripping and renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Paragraph(ParagraphData),
    Header(HeaderData),
    List(ListData),
    Table(TableData),
    Image(ImageData),
    Youtube(YoutubeData),
    Column(ColumnData),
    ContentCards(ContentCardsData),
    Cta(CtaData),
    Unknown { kind: String, data: Value },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphData {
    /// HTML fragment. Sanitized at serialization time, not at keystroke time.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    #[serde(default)]
    pub text: String,
    /// Clamped to `[MIN_HEADER_LEVEL, MAX_HEADER_LEVEL]` on decode.
    #[serde(default = "default_header_level")]
    pub level: u8,
}

fn default_header_level() -> u8 {
    DEFAULT_HEADER_LEVEL
}

impl Default for HeaderData {
    fn default() -> Self {
        Self {
            text: String::new(),
            level: DEFAULT_HEADER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListData {
    #[serde(default)]
    pub style: ListStyle,
    /// HTML fragments, each sanitized independently.
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableData {
    /// Rows of HTML-fragment cells. Rows are padded to a uniform column
    /// count on decode; the first row renders as the header row.
    #[serde(default)]
    pub content: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    #[serde(default)]
    pub url: String,
}

/// Alignment hint carried inside block data (images, CTAs). Unlike the
/// text-align tune this never justifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Upload-service result; its `url` wins over the flat `url` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<HorizontalAlign>,
    #[serde(default)]
    pub with_border: bool,
    #[serde(default)]
    pub with_background: bool,
    #[serde(default)]
    pub stretched: bool,
}

impl ImageData {
    /// The authoritative image URL: `file.url` first, then `url`. Empty
    /// strings count as absent; with neither, the block renders nothing.
    pub fn resolved_url(&self) -> Option<&str> {
        self.file
            .as_ref()
            .map(|f| f.url.as_str())
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                self.url
                    .as_deref()
                    .filter(|u| !u.trim().is_empty())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YoutubeData {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// Drives pane order and the full-bleed background treatment.
    #[serde(default)]
    pub image_position: ImagePosition,
    #[serde(default)]
    pub heading: String,
    /// HTML fragment; shares the paragraph preview/truncation machinery.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_alt_text: Option<String>,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCardsData {
    #[serde(default)]
    pub cards: Vec<CardItem>,
    /// Clamped to `[MIN_CARDS_PER_ROW, MAX_CARDS_PER_ROW]` on decode.
    #[serde(default = "default_cards_per_row")]
    pub cards_per_row: u8,
}

fn default_cards_per_row() -> u8 {
    3
}

impl Default for ContentCardsData {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            cards_per_row: default_cards_per_row(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CtaKind {
    #[default]
    Url,
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SelfWindow,
    #[serde(rename = "_blank")]
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CtaData {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: CtaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

impl BlockData {
    /// The wire `type` string for this payload.
    pub fn kind(&self) -> &str {
        match self {
            BlockData::Paragraph(_) => "paragraph",
            BlockData::Header(_) => "header",
            BlockData::List(_) => "list",
            BlockData::Table(_) => "table",
            BlockData::Image(_) => "image",
            BlockData::Youtube(_) => "youtube",
            BlockData::Column(_) => "column",
            BlockData::ContentCards(_) => "contentCards",
            BlockData::Cta(_) => "cta",
            BlockData::Unknown { kind, .. } => kind,
        }
    }

    /// Decode a wire `type` + `data` pair.
    ///
    /// Unrecognized types, and recognized types whose payload does not
    /// decode, fall back to [`BlockData::Unknown`] with the payload kept
    /// verbatim. Decoding a block therefore never fails.
    pub fn from_wire(kind: String, data: Value) -> Self {
        fn typed<T>(kind: &str, data: &Value, wrap: fn(T) -> BlockData) -> BlockData
        where
            T: serde::de::DeserializeOwned,
        {
            match serde_json::from_value::<T>(data.clone()) {
                Ok(payload) => wrap(payload),
                Err(_) => BlockData::Unknown {
                    kind: kind.to_string(),
                    data: data.clone(),
                },
            }
        }

        let decoded = match kind.as_str() {
            "paragraph" => typed(&kind, &data, BlockData::Paragraph),
            "header" => typed(&kind, &data, BlockData::Header),
            "list" => typed(&kind, &data, BlockData::List),
            "table" => typed(&kind, &data, BlockData::Table),
            "image" => typed(&kind, &data, BlockData::Image),
            "youtube" => typed(&kind, &data, BlockData::Youtube),
            "column" => typed(&kind, &data, BlockData::Column),
            "contentCards" => typed(&kind, &data, BlockData::ContentCards),
            "cta" => typed(&kind, &data, BlockData::Cta),
            _ => BlockData::Unknown { kind, data },
        };
        decoded.normalized()
    }

    /// Encode back to the wire `type` + `data` pair.
    pub fn to_wire(&self) -> Result<(String, Value), serde_json::Error> {
        let data = match self {
            BlockData::Paragraph(d) => serde_json::to_value(d)?,
            BlockData::Header(d) => serde_json::to_value(d)?,
            BlockData::List(d) => serde_json::to_value(d)?,
            BlockData::Table(d) => serde_json::to_value(d)?,
            BlockData::Image(d) => serde_json::to_value(d)?,
            BlockData::Youtube(d) => serde_json::to_value(d)?,
            BlockData::Column(d) => serde_json::to_value(d)?,
            BlockData::ContentCards(d) => serde_json::to_value(d)?,
            BlockData::Cta(d) => serde_json::to_value(d)?,
            BlockData::Unknown { data, .. } => data.clone(),
        };
        Ok((self.kind().to_string(), data))
    }

    /// Enforce the catalog invariants that are clamps rather than rejections:
    /// header level into `[1,6]`, cards-per-row into `[2,5]`, table rows
    /// padded to a uniform column count.
    pub fn normalized(mut self) -> Self {
        match &mut self {
            BlockData::Header(h) => {
                h.level = h.level.clamp(MIN_HEADER_LEVEL, MAX_HEADER_LEVEL);
            }
            BlockData::ContentCards(c) => {
                c.cards_per_row = c.cards_per_row.clamp(MIN_CARDS_PER_ROW, MAX_CARDS_PER_ROW);
            }
            BlockData::Table(t) => {
                let width = t.content.iter().map(Vec::len).max().unwrap_or(0);
                for row in &mut t.content {
                    row.resize(width, String::new());
                }
            }
            _ => {}
        }
        self
    }

    /// Apply `f` to every data field that may legally carry an HTML fragment
    /// with attributes: paragraph text, header text, list items, table
    /// cells. This is the per-type sanitize whitelist; all other fields are
    /// plain values and never pass through the sanitizer.
    pub fn sanitize_fragments(&mut self, f: &mut dyn FnMut(&str) -> String) {
        match self {
            BlockData::Paragraph(p) => p.text = f(&p.text),
            BlockData::Header(h) => h.text = f(&h.text),
            BlockData::List(l) => {
                for item in &mut l.items {
                    *item = f(item);
                }
            }
            BlockData::Table(t) => {
                for row in &mut t.content {
                    for cell in row {
                        *cell = f(cell);
                    }
                }
            }
            _ => {}
        }
    }
}
