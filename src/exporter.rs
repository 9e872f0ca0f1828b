// src/exporter.rs
//! Export operations: fetch, render, write.
//!
//! Every request is awaited before the next one is issued. Bulk exports
//! catch failures per record and keep going; single exports propagate them.

use crate::api::NotionRepository;
use crate::error::AppError;
use crate::formatting::{compose_database_table, compose_page_document};
use crate::model::{Block, Database, Page};
use crate::output::{page_output_path, table_output_path, write_document};
use crate::types::{NotionId, PageId};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Orchestrates retrieval and rendering of Notion content into files.
pub struct NotionExporter<'a> {
    repository: &'a dyn NotionRepository,
    output_dir: PathBuf,
    exported_at: NaiveDateTime,
}

/// Outcome of exporting several pages.
#[derive(Debug, Default)]
pub struct BulkExportReport {
    pub saved: Vec<PathBuf>,
    pub failures: Vec<RecordFailure>,
}

impl BulkExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A page that could not be exported, with the reason.
#[derive(Debug)]
pub struct RecordFailure {
    pub id: PageId,
    pub title: String,
    pub error: AppError,
}

/// Summary of a database for the `info` command.
#[derive(Debug, Clone)]
pub struct DatabaseInfo {
    pub database: Database,
    pub record_count: usize,
}

impl<'a> NotionExporter<'a> {
    /// Creates an exporter stamping documents with the current local time.
    pub fn new(repository: &'a dyn NotionRepository, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            output_dir: output_dir.into(),
            exported_at: chrono::Local::now().naive_local(),
        }
    }

    /// Overrides the timestamp written into document headers.
    pub fn with_export_time(mut self, exported_at: NaiveDateTime) -> Self {
        self.exported_at = exported_at;
        self
    }

    /// Fetches a page's top-level blocks plus the direct children of each
    /// block flagged `has_children`. Grandchildren are not fetched.
    pub async fn fetch_page_blocks(&self, page: &NotionId) -> Result<Vec<Block>, AppError> {
        let mut blocks = self.repository.retrieve_children(page).await?;
        log::debug!("Fetched {} top-level blocks for {}", blocks.len(), page);

        for block in blocks.iter_mut().filter(|b| b.has_children()) {
            let children = self
                .repository
                .retrieve_children(&NotionId::from(block.id()))
                .await?;
            log::debug!("Fetched {} children for block {}", children.len(), block.id());
            block.set_children(children);
        }

        Ok(blocks)
    }

    /// Exports one page to `<title>.md` and returns the written path.
    pub async fn export_page(&self, id: &NotionId) -> Result<PathBuf, AppError> {
        log::info!("Exporting page {}", id);
        let page = self.repository.retrieve_page(id).await?;
        self.export_record(page).await
    }

    /// Exports an already retrieved page, fetching only its content.
    pub async fn export_record(&self, mut page: Page) -> Result<PathBuf, AppError> {
        page.blocks = self.fetch_page_blocks(&NotionId::from(&page.id)).await?;

        let document = compose_page_document(&page, self.exported_at);
        let path = page_output_path(&self.output_dir, page.title().as_str());
        write_document(&path, &document)?;
        Ok(path)
    }

    /// Exports several pages, collecting failures instead of stopping.
    pub async fn export_records(&self, pages: Vec<Page>) -> BulkExportReport {
        let mut report = BulkExportReport::default();

        for page in pages {
            let id = page.id.clone();
            let title = page.title().to_string();
            match self.export_record(page).await {
                Ok(path) => report.saved.push(path),
                Err(error) => {
                    log::warn!("Failed to export page {} ('{}'): {}", id, title, error);
                    report.failures.push(RecordFailure { id, title, error });
                }
            }
        }

        report
    }

    /// Exports every record of a database to its own file.
    ///
    /// Only the query itself can fail the whole operation.
    pub async fn export_database(&self, id: &NotionId) -> Result<BulkExportReport, AppError> {
        log::info!("Exporting records of database {}", id);
        let records = self.repository.query_database(id).await?;
        log::info!("Database {} returned {} records", id, records.len());
        Ok(self.export_records(records).await)
    }

    /// Exports a database as one Markdown table and returns the written path.
    pub async fn export_table(&self, id: &NotionId) -> Result<PathBuf, AppError> {
        log::info!("Exporting database {} as a table", id);
        let database = self.repository.retrieve_database(id).await?;
        let records = self.repository.query_database(id).await?;

        let document = compose_database_table(&database, &records, self.exported_at);
        let path = table_output_path(&self.output_dir, database.title().as_str());
        write_document(&path, &document)?;
        Ok(path)
    }

    /// Pages matching `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<Page>, AppError> {
        log::info!("Searching pages for '{}'", query);
        self.repository.search_pages(query).await
    }

    /// Database schema plus the number of records in the first result page.
    pub async fn database_info(&self, id: &NotionId) -> Result<DatabaseInfo, AppError> {
        let database = self.repository.retrieve_database(id).await?;
        let record_count = self.repository.query_database(id).await?.len();
        Ok(DatabaseInfo {
            database,
            record_count,
        })
    }
}
