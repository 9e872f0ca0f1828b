use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of rich text content.
///
/// Only `text` spans carry renderable content; mentions, equations and any
/// other span kind keep their tag so callers can see what was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Other(String),
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
}

impl RichTextItem {
    /// Create a plain text item, the most common rich text variant.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
        }
    }

    /// Returns the same item with the given annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns the same item with a hyperlink attached (text spans only).
    pub fn with_link(mut self, url: &str) -> Self {
        if let RichTextType::Text { link, .. } = &mut self.text_type {
            *link = Some(Link {
                url: url.to_string(),
            });
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// Select option
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Date value with optional end date, kept as the API's ISO strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    pub end: Option<String>,
}

/// User reference as found in `created_by` / `last_edited_by` values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or_default())
    }
}
