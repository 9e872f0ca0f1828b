// src/lib.rs
//! notion2markdown library: exports Notion pages and databases as Markdown.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExporterConfig`
//! - **Domain model**: `Page`, `Database`, `Block`, `PropertyValue`, etc.
//! - **Domain types**: `NotionId`, `ApiKey`, `PageId`, `RichTextItem`, etc.
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers
//! - **Formatting**: `render_blocks`, `compose_page_document`, `TableBuilder`
//! - **Export**: `NotionExporter`, `parse_selection`, doctor checks

mod api;
mod config;
pub mod constants;
mod diagnostics;
mod error;
mod exporter;
mod formatting;
mod model;
mod output;
mod selection;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    load_config_file, map_string_leaves, resolve_placeholders, validate_token, Command,
    CommandLineInput, ExportCommand, ExporterConfig, FileConfig, NotionSection,
};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BlockVisitor, Database, DatabaseProperty, DatabaseTitle, Page, PageTitle,
    PropertyTypeValue, PropertyValue,
};

// --- Block Types ---
pub use crate::model::blocks::{
    BulletedListItemBlock, CalloutBlock, CodeBlock, DividerBlock, Heading1Block, Heading2Block,
    Heading3Block, ImageBlock, ImageSource, NumberedListItemBlock, ParagraphBlock, QuoteBlock,
    TableOfContentsBlock, TextBlockContent, ToDoBlock, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DatabaseId, DateValue, Link, NotionId, PageId, PropertyName,
    RichTextItem, RichTextType, SelectOption, User, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{
        parse_blocks_response, parse_database_response, parse_page_response,
        parse_pages_response,
    },
    NotionHttpClient, NotionRepository,
};

// --- Formatting ---
pub use crate::formatting::{
    compose_database_table, compose_page_document, escape_table_cell, format_record_timestamp,
    render_block, render_block_with_children, render_blocks, render_property_cell,
    rich_text_to_markdown, TableBuilder,
};

// --- Output ---
pub use crate::output::{page_filename, sanitize_title, table_filename, write_document};

// --- Export ---
pub use crate::diagnostics::{
    check_api, check_output_dir, run_doctor, suggests_setup, CheckOutcome, DoctorReport,
    SETUP_INSTRUCTIONS,
};
pub use crate::exporter::{BulkExportReport, DatabaseInfo, NotionExporter, RecordFailure};
pub use crate::selection::parse_selection;
