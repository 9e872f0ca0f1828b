// src/api/responses.rs
//! Wire types for the Notion API responses this exporter reads.
//!
//! Every field the exporter does not strictly need is optional or defaulted,
//! and JSON `null` is accepted wherever a default exists. Payloads that are
//! keyed by a type tag are kept as raw JSON and decoded leniently during
//! conversion so one odd block never sinks a whole response.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deserializes `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes an optional JSON fragment, falling back to the default on any
/// mismatch. `context` only feeds the warning.
pub(crate) fn decode_lenient<T>(value: Option<&Value>, context: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed {} payload: {}", context, err);
            T::default()
        }),
    }
}

/// Field-level `decode_lenient`: a value of the wrong shape becomes the
/// field's default instead of failing the enclosing object.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_lenient(Some(&value), std::any::type_name::<T>()))
}

/// Generic list envelope: block children, query results and search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

/// Error body Notion sends with non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDatabase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, Value>,
}

/// Schema entry of a database property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchemaProperty {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub property_type: String,
}

/// A block with its type-specific payload left under `payload[type]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub block_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_children: bool,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

impl RawBlock {
    /// The object stored under the block's own type key.
    pub fn type_payload(&self) -> Option<&Value> {
        self.payload.get(&self.block_type)
    }
}

/// Union of the payload fields used by the supported block types.
///
/// Each field is decoded on its own, so one mistyped field never costs the
/// block its text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBlockPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub rich_text: Vec<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub checked: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawIcon>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Vec<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub external: Option<RawFileLink>,
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<RawFileLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIcon {
    #[serde(default, deserialize_with = "lenient")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFileLink {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRichText {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<RawTextContent>,
    #[serde(default, deserialize_with = "lenient")]
    pub annotations: RawAnnotations,
    #[serde(default, deserialize_with = "lenient")]
    pub plain_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTextContent {
    #[serde(default, deserialize_with = "lenient")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<RawFileLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAnnotations {
    #[serde(default, deserialize_with = "lenient")]
    pub bold: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub italic: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub strikethrough: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub code: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSelect {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDate {
    #[serde(default, deserialize_with = "lenient")]
    pub start: String,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nulls_become_defaults() {
        let list: PaginatedResponse<RawBlock> = serde_json::from_value(json!({
            "object": "list",
            "results": null,
            "has_more": null
        }))
        .unwrap();
        assert!(list.results.is_empty());
        assert!(!list.has_more);
    }

    #[test]
    fn test_block_payload_is_kept_under_type_key() {
        let block: RawBlock = serde_json::from_value(json!({
            "object": "block",
            "id": "b1",
            "type": "to_do",
            "has_children": false,
            "to_do": { "rich_text": [], "checked": true }
        }))
        .unwrap();
        let payload: RawBlockPayload = decode_lenient(block.type_payload(), "to_do");
        assert!(payload.checked);
    }

    #[test]
    fn test_mistyped_field_keeps_the_rest_of_the_payload() {
        let value = json!({ "rich_text": [{ "type": "text" }], "checked": "yes" });
        let payload: RawBlockPayload = decode_lenient(Some(&value), "to_do");
        assert!(!payload.checked);
        assert_eq!(payload.rich_text.len(), 1);
    }

    #[test]
    fn test_non_object_payload_falls_back_to_default() {
        let value = json!("not a payload");
        let payload: RawBlockPayload = decode_lenient(Some(&value), "to_do");
        assert!(payload.rich_text.is_empty());
    }

    #[test]
    fn test_malformed_annotation_keeps_the_span() {
        let span: RawRichText = serde_json::from_value(json!({
            "type": "text",
            "text": { "content": "ship", "link": 5 },
            "annotations": { "bold": "very", "italic": true },
            "plain_text": "ship"
        }))
        .unwrap();
        assert_eq!(span.kind, "text");
        assert!(!span.annotations.bold);
        assert!(span.annotations.italic);
        let text = span.text.unwrap();
        assert_eq!(text.content, "ship");
        assert!(text.link.is_none());
    }
}
