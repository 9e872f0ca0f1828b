// src/api/client.rs
//! Thin HTTP client for the Notion API.
//!
//! Handles authentication and request/response plumbing only; parsing lives
//! in `parser`. Requests are issued one at a time and never retried.

use super::parser;
use crate::constants::NOTION_API_VERSION;
use crate::error::AppError;
use crate::model::{Block, Database, Page};
use crate::types::{ApiKey, NotionId, ValidatedUrl, ValidationError};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey, base_url: &ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.as_base().to_string(),
        })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                ValidationError::InvalidApiKey {
                    reason: format!("token cannot be sent as a header: {}", e),
                }
            })?,
        );
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        log::debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Makes a POST request with a JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        parser::parse_page_response(result)
    }

    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        parser::parse_database_response(result)
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        parser::parse_blocks_response(result)
    }

    async fn query_database(&self, database: &NotionId) -> Result<Vec<Page>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let response = self.post(&endpoint, &serde_json::json!({})).await?;
        let result = extract_response_text(response).await?;
        parser::parse_pages_response(result)
    }

    async fn search_pages(&self, query: &str) -> Result<Vec<Page>, AppError> {
        let body = serde_json::json!({
            "query": query,
            "filter": { "property": "object", "value": "page" }
        });
        let response = self.post("search", &body).await?;
        let result = extract_response_text(response).await?;
        parser::parse_pages_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
