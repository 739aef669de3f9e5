//! Paragraph and inline-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_margin: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_margin: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<i16>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shading_on: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_tint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_left_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_right_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_top_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading_bottom_offset: Option<i64>,

    /// Inline items in reading order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InlineItem>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_item(TextRun::new(text));
        p
    }

    /// Add an inline item.
    pub fn add_item(&mut self, item: impl Into<InlineItem>) {
        self.items.push(item.into());
    }

    /// Add an inline item and return self.
    pub fn with_item(mut self, item: impl Into<InlineItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Concatenated text of all text runs; objects and breaks contribute nothing.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .filter_map(|item| match item {
                InlineItem::TextRun(run) => Some(run.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "itemType")]
pub enum InlineItem {
    /// A run of text with consistent styling
    #[serde(rename = "TEXT_RUN")]
    TextRun(TextRun),

    /// An anchored image, group or inline text frame
    #[serde(rename = "INLINE_OBJECT")]
    InlineObject(InlineObject),

    /// A line, column or page break
    #[serde(rename = "BREAK")]
    Break(Break),
}

/// Discriminant of [`InlineItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    TextRun,
    InlineObject,
    Break,
}

impl ItemKind {
    /// The engine's tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::TextRun => "TEXT_RUN",
            ItemKind::InlineObject => "INLINE_OBJECT",
            ItemKind::Break => "BREAK",
        }
    }
}

impl InlineItem {
    /// Get the item's kind tag.
    pub fn kind(&self) -> ItemKind {
        match self {
            InlineItem::TextRun(_) => ItemKind::TextRun,
            InlineItem::InlineObject(_) => ItemKind::InlineObject,
            InlineItem::Break(_) => ItemKind::Break,
        }
    }
}

impl From<TextRun> for InlineItem {
    fn from(run: TextRun) -> Self {
        InlineItem::TextRun(run)
    }
}

impl From<InlineObject> for InlineItem {
    fn from(obj: InlineObject) -> Self {
        InlineItem::InlineObject(obj)
    }
}

impl From<Break> for InlineItem {
    fn from(brk: Break) -> Self {
        InlineItem::Break(brk)
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_style_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,

    /// Font size in hundredths of a point
    #[serde(
        rename = "fontSizeHwpunits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<i16>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub subscript: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub superscript: bool,
}

impl TextRun {
    /// Create a new text run with no styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set font family and size (hundredths of a point) and return self.
    pub fn with_font(mut self, family: impl Into<String>, size: i32) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size);
        self
    }

    /// Font size in points.
    pub fn font_size_pt(&self) -> Option<f64> {
        self.font_size.map(|size| f64::from(size) / 100.0)
    }
}

/// An object anchored inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ObjectKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_height: Option<i32>,
    #[serde(default)]
    pub has_image_data: bool,

    /// Paragraphs of an inline text frame
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<Paragraph>,
}

impl InlineObject {
    /// Create an inline object of the given kind.
    pub fn new(kind: ObjectKind, source_id: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            source_id: Some(source_id.into()),
            ..Default::default()
        }
    }

    /// Add a paragraph (inline text frames only) and return self.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }
}

/// What an inline object holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    Image,
    RenderedGroup,
    InlineTextFrame,
    #[serde(other)]
    Unknown,
}

impl ObjectKind {
    /// The engine's tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Image => "IMAGE",
            ObjectKind::RenderedGroup => "RENDERED_GROUP",
            ObjectKind::InlineTextFrame => "INLINE_TEXT_FRAME",
            ObjectKind::Unknown => "UNKNOWN",
        }
    }
}

/// A forced break inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Break {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_type: Option<BreakType>,
}

impl Break {
    /// Create a break of the given type.
    pub fn new(break_type: BreakType) -> Self {
        Self {
            break_type: Some(break_type),
        }
    }
}

/// Kind of forced break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakType {
    Line,
    Column,
    Page,
    #[serde(other)]
    Unknown,
}

impl BreakType {
    /// The engine's tag for this break type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakType::Line => "LINE",
            BreakType::Column => "COLUMN",
            BreakType::Page => "PAGE",
            BreakType::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text_skips_objects() {
        let para = Paragraph::new()
            .with_item(TextRun::new("Hello "))
            .with_item(InlineObject::new(ObjectKind::Image, "img1"))
            .with_item(Break::new(BreakType::Line))
            .with_item(TextRun::new("world"));
        assert_eq!(para.plain_text(), "Hello world");
    }

    #[test]
    fn test_font_size_pt() {
        let run = TextRun::new("x").with_font("Noto Sans", 1050);
        assert_eq!(run.font_size_pt(), Some(10.5));
        assert_eq!(TextRun::new("y").font_size_pt(), None);
    }

    #[test]
    fn test_item_tags() {
        let json = r#"[
            {"itemType":"TEXT_RUN","text":"a","fontSizeHwpunits":1000},
            {"itemType":"INLINE_OBJECT","kind":"INLINE_TEXT_FRAME","sourceId":"f9",
             "paragraphs":[{"items":[{"itemType":"TEXT_RUN","text":"inner"}]}]},
            {"itemType":"BREAK","breakType":"COLUMN"}
        ]"#;
        let items: Vec<InlineItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].kind(), ItemKind::TextRun);
        assert_eq!(items[1].kind(), ItemKind::InlineObject);
        assert_eq!(items[2].kind(), ItemKind::Break);

        match &items[1] {
            InlineItem::InlineObject(obj) => {
                assert_eq!(obj.kind, Some(ObjectKind::InlineTextFrame));
                assert_eq!(obj.paragraphs[0].plain_text(), "inner");
            }
            other => panic!("unexpected item: {:?}", other),
        }
    }
}
