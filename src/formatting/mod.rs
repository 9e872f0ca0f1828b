// src/formatting/mod.rs
//! Renders Notion data structures into Markdown.
//!
//! Everything here is a pure function of its input; nothing fetches or writes.

pub mod block_renderer;
pub mod document;
pub mod properties;
pub mod rich_text;
pub mod table;

pub use block_renderer::{render_block, render_block_with_children, render_blocks};
pub use document::compose_page_document;
pub use properties::{escape_table_cell, render_property_cell};
pub use rich_text::rich_text_to_markdown;
pub use table::{compose_database_table, format_record_timestamp, TableBuilder};
