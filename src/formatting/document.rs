// src/formatting/document.rs
//! Page documents: metadata header, divider, rendered blocks.

use super::block_renderer::render_blocks;
use crate::constants::{DIVIDER_TOKEN, EXPORT_TIMESTAMP_FORMAT};
use crate::model::Page;
use chrono::NaiveDateTime;

/// Composes a page and its fetched blocks into a Markdown document.
///
/// `exported_at` is the local time of the export; it fills the `Created`
/// line of the header.
pub fn compose_page_document(page: &Page, exported_at: NaiveDateTime) -> String {
    let header = compose_header(page, exported_at);
    let body = render_blocks(&page.blocks);
    [header, body].concat()
}

fn compose_header(page: &Page, exported_at: NaiveDateTime) -> String {
    format!(
        "# {}\n**Created**: {}\n**Notion Page ID**: {}\n**URL**: {}\n\n{}\n\n",
        page.title(),
        exported_at.format(EXPORT_TIMESTAMP_FORMAT),
        page.id,
        page.id.canonical_url(),
        DIVIDER_TOKEN,
    )
}
