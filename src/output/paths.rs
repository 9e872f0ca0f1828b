// src/output/paths.rs
//! Pure functions for filename generation.

use crate::constants::{EMPTY_FILENAME_STEM, PAGE_FILE_SUFFIX, TABLE_FILE_SUFFIX};
use std::path::{Path, PathBuf};

/// Sanitizes a title into a filename stem.
///
/// Keeps alphanumerics, spaces, `-` and `_`, trims trailing whitespace and
/// turns spaces into underscores. Applying it twice changes nothing.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = kept.trim_end().replace(' ', "_");

    if stem.is_empty() {
        EMPTY_FILENAME_STEM.to_string()
    } else {
        stem
    }
}

/// `<stem>.md`
pub fn page_filename(title: &str) -> String {
    format!("{}{}", sanitize_title(title), PAGE_FILE_SUFFIX)
}

/// `<stem>_table.md`
pub fn table_filename(title: &str) -> String {
    format!("{}{}", sanitize_title(title), TABLE_FILE_SUFFIX)
}

pub fn page_output_path(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(page_filename(title))
}

pub fn table_output_path(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(table_filename(title))
}
