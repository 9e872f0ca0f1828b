use crate::types::*;
use serde::{Deserialize, Serialize};

/// Property value: a typed value with its property ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub id: String,
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    pub fn new(type_specific_value: PropertyTypeValue) -> Self {
        Self {
            id: String::new(),
            type_specific_value,
        }
    }

    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match &self.type_specific_value {
            PropertyTypeValue::Title { .. } => "title",
            PropertyTypeValue::RichText { .. } => "rich_text",
            PropertyTypeValue::Number { .. } => "number",
            PropertyTypeValue::Select { .. } => "select",
            PropertyTypeValue::MultiSelect { .. } => "multi_select",
            PropertyTypeValue::Date { .. } => "date",
            PropertyTypeValue::Checkbox { .. } => "checkbox",
            PropertyTypeValue::Url { .. } => "url",
            PropertyTypeValue::Email { .. } => "email",
            PropertyTypeValue::PhoneNumber { .. } => "phone_number",
            PropertyTypeValue::CreatedTime { .. } => "created_time",
            PropertyTypeValue::CreatedBy { .. } => "created_by",
            PropertyTypeValue::LastEditedTime { .. } => "last_edited_time",
            PropertyTypeValue::LastEditedBy { .. } => "last_edited_by",
            PropertyTypeValue::Other { type_name, .. } => type_name,
        }
    }
}

/// The specific value types for properties.
///
/// Sub-fields the API may omit or null out are `Option`s; the renderer turns
/// them into empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyTypeValue {
    Title {
        title: Vec<RichTextItem>,
    },
    RichText {
        rich_text: Vec<RichTextItem>,
    },
    Number {
        /// Kept as delivered so integers print without a fractional part.
        number: Option<serde_json::Number>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    CreatedTime {
        created_time: Option<String>,
    },
    CreatedBy {
        created_by: Option<User>,
    },
    LastEditedTime {
        last_edited_time: Option<String>,
    },
    LastEditedBy {
        last_edited_by: Option<User>,
    },
    /// Any property type without dedicated handling (formula, relation, ...)
    Other {
        type_name: String,
        payload: serde_json::Value,
    },
}
