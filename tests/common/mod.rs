//! In-memory Notion workspace backed by recorded API responses.
//!
//! Responses go through the same parsers the HTTP client uses, so these
//! tests cover wire decoding as well as export behavior.

#![allow(dead_code)]

use notion2markdown::{
    parse_blocks_response, parse_database_response, parse_page_response, parse_pages_response,
    ApiResponse, AppError, Block, Database, NotionId, NotionRepository, Page,
};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const Q3_PLAN_PAGE_ID: &str = "1a2b3c4d-0000-4000-8000-000000000001";
pub const MILESTONES_BLOCK_ID: &str = "1a2b3c4d-0000-4000-8000-0000000000b3";
pub const BETA_LAUNCH_BLOCK_ID: &str = "1a2b3c4d-0000-4000-8000-0000000000c1";
pub const ROADMAP_DATABASE_ID: &str = "1a2b3c4d-0000-4000-8000-0000000000db";
pub const ALPHA_RECORD_ID: &str = "1a2b3c4d-0000-4000-8000-0000000000a1";
pub const BETA_RECORD_ID: &str = "1a2b3c4d-0000-4000-8000-0000000000a2";

pub const Q3_PLAN_PAGE: &str = include_str!("../fixtures/q3_plan_page.json");
pub const Q3_PLAN_BLOCKS: &str = include_str!("../fixtures/q3_plan_blocks.json");
pub const MILESTONES_CHILDREN: &str = include_str!("../fixtures/milestones_children.json");
pub const ROADMAP_DATABASE: &str = include_str!("../fixtures/roadmap_database.json");
pub const ROADMAP_QUERY: &str = include_str!("../fixtures/roadmap_query.json");
pub const EMPTY_LIST: &str = include_str!("../fixtures/empty_list.json");
pub const OBJECT_NOT_FOUND: &str = include_str!("../fixtures/object_not_found.json");

/// Wraps a fixture body the way the HTTP client would.
pub fn ok_response(body: &str) -> ApiResponse<String> {
    response(StatusCode::OK, body)
}

pub fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status,
        url: "https://api.notion.com/v1/fixture".to_string(),
    }
}

/// Endpoint-keyed canned responses. Unknown endpoints answer 404.
#[derive(Clone, Default)]
pub struct FixtureWorkspace {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Q3 Plan page, its blocks, and the Roadmap database.
    pub fn sample() -> Self {
        let workspace = Self::new();
        workspace.respond(&format!("pages/{}", Q3_PLAN_PAGE_ID), Q3_PLAN_PAGE);
        workspace.respond(&children_endpoint(Q3_PLAN_PAGE_ID), Q3_PLAN_BLOCKS);
        workspace.respond(&children_endpoint(MILESTONES_BLOCK_ID), MILESTONES_CHILDREN);
        workspace.respond(&format!("databases/{}", ROADMAP_DATABASE_ID), ROADMAP_DATABASE);
        workspace.respond(
            &format!("databases/{}/query", ROADMAP_DATABASE_ID),
            ROADMAP_QUERY,
        );
        workspace.respond(&children_endpoint(ALPHA_RECORD_ID), EMPTY_LIST);
        workspace.respond(&children_endpoint(BETA_RECORD_ID), EMPTY_LIST);
        workspace.respond("search", ROADMAP_QUERY);
        workspace
    }

    pub fn respond(&self, endpoint: &str, body: &str) {
        self.respond_with(endpoint, StatusCode::OK, body);
    }

    pub fn respond_with(&self, endpoint: &str, status: StatusCode, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), (status, body.to_string()));
    }

    /// Endpoints requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn fetch(&self, endpoint: String) -> ApiResponse<String> {
        self.requests.lock().unwrap().push(endpoint.clone());
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, OBJECT_NOT_FOUND.to_string()));
        ApiResponse {
            data: body,
            status,
            url: format!("https://api.notion.com/v1/{}", endpoint),
        }
    }
}

pub fn children_endpoint(id: &str) -> String {
    format!("blocks/{}/children", id)
}

#[async_trait::async_trait]
impl NotionRepository for FixtureWorkspace {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        parse_page_response(self.fetch(format!("pages/{}", id.to_hyphenated())))
    }

    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError> {
        parse_database_response(self.fetch(format!("databases/{}", id.to_hyphenated())))
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        parse_blocks_response(self.fetch(children_endpoint(&parent.to_hyphenated())))
    }

    async fn query_database(&self, database: &NotionId) -> Result<Vec<Page>, AppError> {
        parse_pages_response(self.fetch(format!(
            "databases/{}/query",
            database.to_hyphenated()
        )))
    }

    async fn search_pages(&self, _query: &str) -> Result<Vec<Page>, AppError> {
        parse_pages_response(self.fetch("search".to_string()))
    }
}
