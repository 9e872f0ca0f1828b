// src/formatting/block_renderer.rs
//! Block rendering: one typed block to one Markdown fragment.
//!
//! Fragments carry their own trailing newlines; a document body is the plain
//! concatenation of fragments. A block's fetched children follow the parent
//! as siblings, one level deep.

use super::rich_text::rich_text_to_markdown;
use crate::constants::{
    DEFAULT_CALLOUT_ICON, DIVIDER_TOKEN, NUMBERED_LIST_MARKER, TABLE_OF_CONTENTS_TOKEN,
};
use crate::model::*;

/// Formats Notion blocks as Markdown fragments.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownBlockRenderer;

impl BlockVisitor for MarkdownBlockRenderer {
    type Output = String;

    fn visit_paragraph(&mut self, content: &TextBlockContent) -> String {
        format!("{}\n\n", rich_text_to_markdown(&content.rich_text))
    }

    fn visit_heading(&mut self, level: u8, content: &TextBlockContent) -> String {
        format!(
            "{} {}\n\n",
            "#".repeat(level as usize),
            rich_text_to_markdown(&content.rich_text)
        )
    }

    fn visit_bulleted_list_item(&mut self, content: &TextBlockContent) -> String {
        format!("- {}\n", rich_text_to_markdown(&content.rich_text))
    }

    fn visit_numbered_list_item(&mut self, content: &TextBlockContent) -> String {
        format!(
            "{} {}\n",
            NUMBERED_LIST_MARKER,
            rich_text_to_markdown(&content.rich_text)
        )
    }

    fn visit_todo(&mut self, todo: &ToDoBlock) -> String {
        let checkbox = if todo.checked { "[x]" } else { "[ ]" };
        format!(
            "{} {}\n",
            checkbox,
            rich_text_to_markdown(&todo.content.rich_text)
        )
    }

    fn visit_quote(&mut self, content: &TextBlockContent) -> String {
        format!("> {}\n\n", rich_text_to_markdown(&content.rich_text))
    }

    fn visit_callout(&mut self, callout: &CalloutBlock) -> String {
        let icon = callout.emoji.as_deref().unwrap_or(DEFAULT_CALLOUT_ICON);
        format!(
            "{} {}\n\n",
            icon,
            rich_text_to_markdown(&callout.content.rich_text)
        )
    }

    fn visit_code(&mut self, code: &CodeBlock) -> String {
        format!(
            "```{}\n{}\n```\n\n",
            code.language,
            rich_text_to_markdown(&code.content.rich_text)
        )
    }

    fn visit_divider(&mut self) -> String {
        format!("{}\n\n", DIVIDER_TOKEN)
    }

    fn visit_table_of_contents(&mut self) -> String {
        format!("{}\n\n", TABLE_OF_CONTENTS_TOKEN)
    }

    fn visit_image(&mut self, image: &ImageBlock) -> String {
        let caption = rich_text_to_markdown(&image.caption);
        // The caption is repeated after the image when present.
        let trailing = if caption.is_empty() {
            String::new()
        } else {
            format!(" {}", caption)
        };
        format!("![{}]({}){}\n\n", caption, image.url(), trailing)
    }

    fn visit_unsupported(&mut self, block_type: &str) -> String {
        format!("<!-- Unsupported block: {} -->\n\n", block_type)
    }
}

/// Renders a single block's own fragment, ignoring its children.
pub fn render_block(block: &Block) -> String {
    block.accept(&mut MarkdownBlockRenderer)
}

/// Renders a block followed by each of its direct children.
///
/// Grandchildren are never rendered.
pub fn render_block_with_children(block: &Block) -> String {
    let mut output = render_block(block);
    for child in block.children() {
        output.push_str(&render_block(child));
    }
    output
}

/// Renders a slice of top-level blocks into a document body.
pub fn render_blocks(blocks: &[Block]) -> String {
    log::debug!("Rendering {} blocks", blocks.len());
    blocks.iter().map(render_block_with_children).collect()
}
