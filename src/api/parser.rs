// src/api/parser.rs
//! Response parsing: status check, envelope decoding and domain conversion.

use super::client::ApiResponse;
use super::conversion::{convert_block, convert_database, convert_page};
use super::responses::{NotionErrorBody, PaginatedResponse, RawBlock, RawDatabase, RawPage};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Database, Page};
use serde_json::Value;

/// Parse any Notion API response, turning non-2xx statuses into errors.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Builds a `NotionService` error from the error body, or from the bare
/// HTTP status when the body is not a Notion error object.
fn parse_error_body(result: &ApiResponse<String>) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(&result.data) {
        Ok(body) if !body.code.is_empty() => AppError::NotionService {
            code: NotionErrorCode::from_api_response(&body.code),
            message: body.message,
            status: result.status,
        },
        _ => AppError::NotionService {
            code: NotionErrorCode::from_http_status(result.status.as_u16()),
            message: format!("HTTP {} from {}: {}", result.status, result.url, preview(&result.data)),
            status: result.status,
        },
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

/// Only the first page of a list is ever read.
fn warn_if_truncated<T>(list: &PaginatedResponse<T>, url: &str) {
    if list.has_more {
        log::warn!(
            "{} has more results than were returned; only the first page is exported",
            url
        );
    }
}

pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let raw: RawPage = parse_api_response(result)?;
    convert_page(raw)
}

pub fn parse_database_response(result: ApiResponse<String>) -> Result<Database, AppError> {
    let raw: RawDatabase = parse_api_response(result)?;
    convert_database(raw)
}

/// Parse a block-children list.
pub fn parse_blocks_response(result: ApiResponse<String>) -> Result<Vec<Block>, AppError> {
    let url = result.url.clone();
    let list: PaginatedResponse<Value> = parse_api_response(result)?;
    warn_if_truncated(&list, &url);

    Ok(list
        .results
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawBlock>(value) {
            Ok(raw) => Some(convert_block(raw)),
            Err(e) => {
                log::warn!("Skipping unreadable block in {}: {}", url, e);
                None
            }
        })
        .collect())
}

/// Parse a database query or search result list into pages.
///
/// Entries that are not usable pages are skipped with a warning.
pub fn parse_pages_response(result: ApiResponse<String>) -> Result<Vec<Page>, AppError> {
    let url = result.url.clone();
    let list: PaginatedResponse<Value> = parse_api_response(result)?;
    warn_if_truncated(&list, &url);

    Ok(list
        .results
        .into_iter()
        .filter_map(|value| {
            let page = serde_json::from_value::<RawPage>(value)
                .map_err(AppError::from)
                .and_then(convert_page);
            match page {
                Ok(page) => Some(page),
                Err(e) => {
                    log::warn!("Skipping unreadable page in {}: {}", url, e);
                    None
                }
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/pages/abc".to_string(),
        }
    }

    #[test]
    fn test_error_body_is_parsed() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID: abc123",
            "request_id": "req_123"
        }"#;

        match parse_page_response(response(StatusCode::NOT_FOUND, error_json)) {
            Err(AppError::NotionService {
                code,
                status,
                message,
            }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(message.contains("abc123"));
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_status() {
        let err = parse_page_response(response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"))
            .unwrap_err();
        match err {
            AppError::NotionService { code, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502))
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_success_body_is_malformed() {
        let err = parse_page_response(response(StatusCode::OK, "not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_unreadable_list_entries_are_skipped() {
        let body = r#"{
            "object": "list",
            "results": [
                { "object": "page", "id": "p1", "properties": {} },
                { "object": "page", "properties": {} },
                42
            ],
            "has_more": true,
            "next_cursor": "abc"
        }"#;
        let pages = parse_pages_response(response(StatusCode::OK, body)).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id.as_str(), "p1");
    }

    #[test]
    fn test_long_bodies_are_truncated_in_previews() {
        let long = "x".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.len(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
