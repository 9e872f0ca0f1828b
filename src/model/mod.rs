mod block;
pub mod blocks;
pub mod common;
mod property_value;

pub use block::{Block, BlockVisitor};
pub use blocks::*;
pub use common::*;
pub use property_value::{PropertyTypeValue, PropertyValue};

use crate::constants::UNTITLED_TITLE_PREFIX;
use crate::types::{DatabaseId, PageId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion page: a standalone document or a database record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    /// Properties in the order the API listed them
    pub properties: IndexMap<PropertyName, PropertyValue>,
    /// Top-level content, populated by the fetch stage
    pub blocks: Vec<Block>,
}

impl Page {
    /// Creates an empty page with the fallback title.
    pub fn new(id: PageId) -> Self {
        let title = PageTitle::untitled(id.short());
        Self {
            id,
            title,
            created_time: None,
            last_edited_time: None,
            properties: IndexMap::new(),
            blocks: Vec::new(),
        }
    }

    /// Get the page title
    pub fn title(&self) -> &PageTitle {
        &self.title
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = PageTitle::new(title);
        self
    }

    pub fn with_property(mut self, name: impl Into<PropertyName>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_timestamps(
        mut self,
        created_time: impl Into<String>,
        last_edited_time: impl Into<String>,
    ) -> Self {
        self.created_time = Some(created_time.into());
        self.last_edited_time = Some(last_edited_time.into());
        self
    }
}

/// A Notion database: its schema plus identifying metadata.
///
/// Records are fetched separately and passed alongside the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    pub title: DatabaseTitle,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    /// Schema in the order the API listed it
    pub properties: IndexMap<PropertyName, DatabaseProperty>,
}

impl Database {
    pub fn new(id: DatabaseId) -> Self {
        let title = DatabaseTitle::untitled(id.short());
        Self {
            id,
            title,
            created_time: None,
            last_edited_time: None,
            properties: IndexMap::new(),
        }
    }

    /// Get the database title
    pub fn title(&self) -> &DatabaseTitle {
        &self.title
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = DatabaseTitle::new(title);
        self
    }

    /// Appends a schema column.
    pub fn with_column(mut self, name: &str, property_type: &str) -> Self {
        self.properties.insert(
            PropertyName::new(name),
            DatabaseProperty {
                id: String::new(),
                name: PropertyName::new(name),
                property_type: property_type.to_string(),
            },
        );
        self
    }

    /// Property names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &PropertyName> {
        self.properties.keys()
    }
}

/// Page title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// `Untitled-<short id>`, for pages without a usable title property.
    pub fn untitled(short_id: &str) -> Self {
        Self(format!("{}{}", UNTITLED_TITLE_PREFIX, short_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseTitle(String);

impl DatabaseTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn untitled(short_id: &str) -> Self {
        Self(format!("{}{}", UNTITLED_TITLE_PREFIX, short_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DatabaseTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database property definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    pub id: String,
    pub name: PropertyName,
    /// Notion type tag, e.g. `title`, `select`, `formula`
    pub property_type: String,
}
