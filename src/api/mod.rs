// src/api/mod.rs
//! Notion API interaction: the ability to retrieve content from a workspace.
//!
//! Business logic depends on the `NotionRepository` trait, never on HTTP
//! details, so exports can run against an in-memory workspace in tests.

pub mod client;
mod conversion;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Block, Database, Page};
use crate::types::NotionId;

/// The ability to retrieve content from a Notion workspace.
///
/// List operations return the first page of results only.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError>;
    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError>;
    /// Direct children of a page or block.
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;
    /// Records of a database, unfiltered and unsorted.
    async fn query_database(&self, database: &NotionId) -> Result<Vec<Page>, AppError>;
    /// Pages matching a free-text query; an empty query matches everything shared.
    async fn search_pages(&self, query: &str) -> Result<Vec<Page>, AppError>;
}

pub use client::NotionHttpClient;
