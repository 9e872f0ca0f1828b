// src/formatting/rich_text.rs
//! Inline rendering of annotated rich text spans.

use crate::types::{Annotations, RichTextItem, RichTextType};

/// Renders spans into one inline Markdown string.
///
/// Only `text` spans contribute; mentions, equations and other kinds are
/// dropped. Spans are concatenated in order with no separator.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items
        .iter()
        .filter_map(|item| match &item.text_type {
            RichTextType::Text { content, link } => Some(MarkdownStyleRenderer::apply_styles(
                content,
                &item.annotations,
                link.as_ref().map(|l| l.url.as_str()),
            )),
            RichTextType::Other(kind) => {
                log::trace!("Dropping rich text span of kind '{}'", kind);
                None
            }
        })
        .collect()
}

/// Renderer for text annotations to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Wraps bold, then italic, then strikethrough, then code, then the link.
    ///
    /// Each wrap encloses the previous result, so a bold code span renders
    /// as `` `**x**` ``.
    pub fn apply_styles(content: &str, annotations: &Annotations, link: Option<&str>) -> String {
        let mut result = content.to_string();

        if annotations.bold {
            result = format!("**{}**", result);
        }
        if annotations.italic {
            result = format!("*{}*", result);
        }
        if annotations.strikethrough {
            result = format!("~~{}~~", result);
        }
        if annotations.code {
            result = format!("`{}`", result);
        }

        if let Some(url) = link {
            result = format!("[{}]({})", result, url);
        }

        result
    }
}
