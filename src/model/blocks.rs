use super::common::BlockCommon;
use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};

/// Text content block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 1 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Heading1Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 2 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Heading2Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 3 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Heading3Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    pub checked: bool,
}

/// Quote block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuoteBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    /// Emoji icon; external and file icons are not representable as text.
    pub emoji: Option<String>,
    pub content: TextBlockContent,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub language: String,
    pub content: TextBlockContent,
}

/// Divider block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

/// Table of contents block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableOfContentsBlock {
    pub common: BlockCommon,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageBlock {
    pub common: BlockCommon,
    pub source: Option<ImageSource>,
    pub caption: Vec<RichTextItem>,
}

impl ImageBlock {
    /// The image URL, or an empty string when no source is present.
    pub fn url(&self) -> &str {
        match &self.source {
            Some(ImageSource::External { url }) | Some(ImageSource::File { url }) => url,
            None => "",
        }
    }
}

/// Where an image is hosted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Linked from an external URL
    External { url: String },
    /// Uploaded to Notion (URL is a signed, expiring link)
    File { url: String },
}

/// Block of a type this exporter does not render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}
