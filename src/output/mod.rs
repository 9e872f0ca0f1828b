// src/output/mod.rs
//! Output handling: pure filename planning, then the actual write.

mod paths;
mod writer;

pub use paths::{
    page_filename, page_output_path, sanitize_title, table_filename, table_output_path,
};
pub use writer::write_document;
