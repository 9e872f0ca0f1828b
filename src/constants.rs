// src/constants.rs
//! Domain constants that define the fixed vocabulary of exported documents.
//!
//! Everything a reader sees in an exported file that is not Notion content
//! lives here: placeholders, glyphs, labels and filename suffixes.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Notion API version sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Base of the canonical links written into exported documents.
pub const NOTION_WEB_BASE_URL: &str = "https://notion.so";

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Block rendering
// ---------------------------------------------------------------------------

/// Icon used for callouts that carry no emoji.
pub const DEFAULT_CALLOUT_ICON: &str = "💡";

/// Cross-reference token standing in for a table of contents block.
pub const TABLE_OF_CONTENTS_TOKEN: &str = "[[TOC]]";

/// Marker written for every numbered list item.
pub const NUMBERED_LIST_MARKER: &str = "1.";

/// Horizontal rule token.
pub const DIVIDER_TOKEN: &str = "---";

// ---------------------------------------------------------------------------
// Property cells and tables
// ---------------------------------------------------------------------------

/// Cell text for a title property with no content.
pub const UNTITLED_CELL_LABEL: &str = "Untitled";

pub const CHECKBOX_CHECKED: &str = "✅";
pub const CHECKBOX_UNCHECKED: &str = "❌";

/// Columns appended after the schema columns of every exported table.
pub const TABLE_EXTRA_COLUMNS: [&str; 4] = ["Page ID", "Created", "Last Edited", "URL"];

/// Label of the per-row link into Notion.
pub const TABLE_LINK_LABEL: &str = "Link";

/// Body of a table export for a database without records.
pub const EMPTY_DATABASE_MESSAGE: &str = "No pages in this database.";

/// Human-readable pattern for record timestamps in tables.
pub const TABLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Pattern of the export timestamp written into document headers.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Output files
// ---------------------------------------------------------------------------

/// Suffix of a single page export.
pub const PAGE_FILE_SUFFIX: &str = ".md";

/// Suffix of a database table export.
pub const TABLE_FILE_SUFFIX: &str = "_table.md";

/// Filename stem used when a title sanitizes to nothing.
pub const EMPTY_FILENAME_STEM: &str = "untitled";

/// Prefix of the fallback title for objects without one.
pub const UNTITLED_TITLE_PREFIX: &str = "Untitled-";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "notion_config.json";

/// Output directory used when the config does not name one.
pub const DEFAULT_OUTPUT_DIR: &str = "notion_downloads";

/// Token value shipped in the sample config.
pub const SAMPLE_TOKEN_VALUE: &str = "your_notion_integration_token_here";

/// Name of the log file written to the OS temp directory.
pub const LOG_FILE_NAME: &str = "notion2markdown.log";
