//! Document-level types.

use super::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of an AST snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Path of the artifact the engine converted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Source format tag (e.g. "IDML")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_format: Option<String>,

    /// Sections (one per page) in reading order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    /// Pre-rendered page backgrounds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backgrounds: Vec<PageBackground>,

    /// Font table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontDef>,

    /// Paragraph style table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraph_styles: Vec<StyleDef>,

    /// Character style table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub character_styles: Vec<StyleDef>,

    /// Color swatches (reference → hex)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get a section by zero-based index.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Font definition from the document's font table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_type: Option<String>,
}

/// Paragraph or character style definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub based_on_style_ref: Option<String>,
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
}

/// Pre-rendered background image metadata for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBackground {
    #[serde(default)]
    pub page_number: i32,
    #[serde(default)]
    pub page_width: i64,
    #[serde(default)]
    pub page_height: i64,
    #[serde(default)]
    pub pixel_width: i32,
    #[serde(default)]
    pub pixel_height: i32,
    #[serde(default)]
    pub has_png_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(doc.section(0).is_none());
    }

    #[test]
    fn test_omitted_fields_default() {
        let doc: Document = serde_json::from_str(r#"{"sourceFormat":"IDML"}"#).unwrap();
        assert_eq!(doc.source_format.as_deref(), Some("IDML"));
        assert!(doc.sections.is_empty());
        assert!(doc.colors.is_empty());
    }

    #[test]
    fn test_style_font_size_rename() {
        let style: StyleDef =
            serde_json::from_str(r#"{"styleId":"P1","fontSizeHwpunits":1050}"#).unwrap();
        assert_eq!(style.font_size, Some(1050));
    }
}
