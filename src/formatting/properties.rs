// src/formatting/properties.rs
//! Property values as Markdown table cells.

use super::rich_text::rich_text_to_markdown;
use crate::constants::{CHECKBOX_CHECKED, CHECKBOX_UNCHECKED, UNTITLED_CELL_LABEL};
use crate::model::{PropertyTypeValue, PropertyValue};
use crate::types::{DateValue, SelectOption, User};
use serde_json::Value;

/// Renders a property value as an escaped table cell.
///
/// A missing property renders as an empty cell.
pub fn render_property_cell(value: Option<&PropertyValue>) -> String {
    match value {
        Some(value) => escape_table_cell(&format_property_value(value)),
        None => String::new(),
    }
}

/// Display text for a property value, before table escaping.
pub fn format_property_value(value: &PropertyValue) -> String {
    use PropertyTypeValue::*;

    log::trace!("Formatting property {} of type {}", value.id, value.type_name());

    match &value.type_specific_value {
        Title { title } => {
            let text = rich_text_to_markdown(title);
            if text.is_empty() {
                UNTITLED_CELL_LABEL.to_string()
            } else {
                text
            }
        }
        RichText { rich_text } => rich_text_to_markdown(rich_text),
        Number { number } => number.as_ref().map(|n| n.to_string()).unwrap_or_default(),
        Select { select } => select.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
        MultiSelect { multi_select } => format_multi_select(multi_select),
        Date { date } => date.as_ref().map(format_date).unwrap_or_default(),
        Checkbox { checkbox } => {
            if *checkbox {
                CHECKBOX_CHECKED.to_string()
            } else {
                CHECKBOX_UNCHECKED.to_string()
            }
        }
        Url { url } => url.clone().unwrap_or_default(),
        Email { email } => email.clone().unwrap_or_default(),
        PhoneNumber { phone_number } => phone_number.clone().unwrap_or_default(),
        CreatedTime { created_time } => created_time.clone().unwrap_or_default(),
        LastEditedTime { last_edited_time } => last_edited_time.clone().unwrap_or_default(),
        CreatedBy { created_by } => format_user(created_by.as_ref()),
        LastEditedBy { last_edited_by } => format_user(last_edited_by.as_ref()),
        Other { payload, .. } => stringify_payload(payload),
    }
}

fn format_multi_select(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| o.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `start`, or `start - end` when the range has a distinct end.
///
/// A range missing its start shows only the end.
fn format_date(date: &DateValue) -> String {
    match date.end.as_deref().filter(|end| !end.is_empty()) {
        Some(end) if date.start.is_empty() => end.to_string(),
        Some(end) if end != date.start => format!("{} - {}", date.start, end),
        _ => date.start.clone(),
    }
}

fn format_user(user: Option<&User>) -> String {
    user.map(|u| u.to_string()).unwrap_or_default()
}

/// Best-effort text for property types without dedicated handling.
fn stringify_payload(payload: &Value) -> String {
    match payload {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escapes pipes and newlines so the text fits in one table cell.
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichTextItem;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn cell(value: PropertyTypeValue) -> String {
        render_property_cell(Some(&PropertyValue::new(value)))
    }

    #[test]
    fn test_title_cells() {
        assert_eq!(cell(PropertyTypeValue::Title { title: vec![] }), "Untitled");
        assert_eq!(
            cell(PropertyTypeValue::Title {
                title: vec![RichTextItem::plain_text("Q3 Plan")]
            }),
            "Q3 Plan"
        );
    }

    #[test]
    fn test_select_cells() {
        assert_eq!(
            cell(PropertyTypeValue::Select {
                select: Some(SelectOption::new("Done"))
            }),
            "Done"
        );
        assert_eq!(cell(PropertyTypeValue::Select { select: None }), "");
        assert_eq!(
            cell(PropertyTypeValue::MultiSelect {
                multi_select: vec![SelectOption::new("a"), SelectOption::new("b")]
            }),
            "a, b"
        );
    }

    #[test]
    fn test_date_ranges() {
        let range = |start: &str, end: Option<&str>| {
            cell(PropertyTypeValue::Date {
                date: Some(DateValue {
                    start: start.to_string(),
                    end: end.map(str::to_string),
                }),
            })
        };
        assert_eq!(range("2024-01-01", Some("2024-01-05")), "2024-01-01 - 2024-01-05");
        assert_eq!(range("2024-01-01", Some("2024-01-01")), "2024-01-01");
        assert_eq!(range("2024-01-01", None), "2024-01-01");
        assert_eq!(cell(PropertyTypeValue::Date { date: None }), "");
    }

    #[test]
    fn test_date_without_start_shows_end_only() {
        let date = |start: &str, end: Option<&str>| {
            cell(PropertyTypeValue::Date {
                date: Some(DateValue {
                    start: start.to_string(),
                    end: end.map(str::to_string),
                }),
            })
        };
        assert_eq!(date("", Some("2024-01-05")), "2024-01-05");
        assert_eq!(date("", None), "");
        assert_eq!(date("2024-01-01", Some("")), "2024-01-01");
    }

    #[test]
    fn test_number_keeps_delivered_form() {
        let number = |v: serde_json::Value| match v {
            serde_json::Value::Number(n) => cell(PropertyTypeValue::Number { number: Some(n) }),
            _ => unreachable!(),
        };
        assert_eq!(number(json!(42)), "42");
        assert_eq!(number(json!(3.5)), "3.5");
        assert_eq!(cell(PropertyTypeValue::Number { number: None }), "");
    }

    #[test]
    fn test_checkbox_and_people() {
        assert_eq!(cell(PropertyTypeValue::Checkbox { checkbox: true }), "✅");
        assert_eq!(cell(PropertyTypeValue::Checkbox { checkbox: false }), "❌");
        assert_eq!(
            cell(PropertyTypeValue::CreatedBy {
                created_by: Some(User {
                    id: "u1".to_string(),
                    name: Some("Ada".to_string()),
                })
            }),
            "Ada"
        );
        assert_eq!(
            cell(PropertyTypeValue::LastEditedBy {
                last_edited_by: None
            }),
            ""
        );
    }

    #[test]
    fn test_unknown_types_are_stringified() {
        let other = |payload: Value| {
            cell(PropertyTypeValue::Other {
                type_name: "formula".to_string(),
                payload,
            })
        };
        assert_eq!(other(json!("plain")), "plain");
        assert_eq!(other(Value::Null), "");
        assert_eq!(other(json!({"type": "number", "number": 3})), r#"{"type":"number","number":3}"#);
    }

    #[test]
    fn test_missing_property_is_empty() {
        assert_eq!(render_property_cell(None), "");
    }

    #[test]
    fn test_cells_never_contain_raw_pipes_or_newlines() {
        let rendered = cell(PropertyTypeValue::RichText {
            rich_text: vec![RichTextItem::plain_text("a|b\nc")],
        });
        assert_eq!(rendered, "a\\|b<br>c");
        assert!(!rendered.contains('\n'));
        assert!(!rendered.replace("\\|", "").contains('|'));
    }
}
