// src/formatting/table.rs
//! Database tables: metadata header plus one Markdown table row per record.

use super::properties::{escape_table_cell, render_property_cell};
use crate::constants::{
    DIVIDER_TOKEN, EMPTY_DATABASE_MESSAGE, EXPORT_TIMESTAMP_FORMAT, TABLE_EXTRA_COLUMNS,
    TABLE_LINK_LABEL, TABLE_TIMESTAMP_FORMAT,
};
use crate::model::{Database, Page};
use chrono::{DateTime, NaiveDateTime};

/// Builder for a Markdown table over a database's records.
pub struct TableBuilder<'a> {
    database: &'a Database,
    records: &'a [Page],
}

impl<'a> TableBuilder<'a> {
    pub fn new(database: &'a Database, records: &'a [Page]) -> Self {
        Self { database, records }
    }

    /// Header cells: schema names in schema order, then the fixed columns.
    pub fn columns(&self) -> Vec<String> {
        self.database
            .column_names()
            .map(|name| escape_table_cell(name.as_str()))
            .chain(TABLE_EXTRA_COLUMNS.iter().map(|c| c.to_string()))
            .collect()
    }

    /// Cells of one record, aligned with `columns()`.
    pub fn row(&self, record: &Page) -> Vec<String> {
        let mut cells: Vec<String> = self
            .database
            .column_names()
            .map(|name| render_property_cell(record.properties.get(name)))
            .collect();

        cells.push(record.id.to_string());
        cells.push(format_record_timestamp(record.created_time.as_deref()));
        cells.push(format_record_timestamp(record.last_edited_time.as_deref()));
        cells.push(format!("[{}]({})", TABLE_LINK_LABEL, record.id.canonical_url()));
        cells
    }

    /// Renders the table body, or the empty-database line when there are no records.
    pub fn build(&self) -> String {
        if self.records.is_empty() {
            return format!("{}\n", EMPTY_DATABASE_MESSAGE);
        }

        let columns = self.columns();
        log::debug!(
            "Building table for '{}' with {} columns and {} rows",
            self.database.title(),
            columns.len(),
            self.records.len()
        );

        let mut out = table_line(&columns);
        out.push_str(&table_line(&vec![
            DIVIDER_TOKEN.to_string();
            columns.len()
        ]));
        for record in self.records {
            out.push_str(&table_line(&self.row(record)));
        }
        out
    }
}

fn table_line(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// Reformats an RFC 3339 timestamp as `%Y-%m-%d %H:%M`, keeping its own offset.
///
/// Unparseable values are returned unchanged; missing values are empty.
pub fn format_record_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format(TABLE_TIMESTAMP_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Composes the full table document for a database and its records.
pub fn compose_database_table(
    database: &Database,
    records: &[Page],
    exported_at: NaiveDateTime,
) -> String {
    let header = format!(
        "# {} - Table\n**Created**: {}\n**Database ID**: {}\n**Pages**: {}\n\n{}\n\n",
        database.title(),
        exported_at.format(EXPORT_TIMESTAMP_FORMAT),
        database.id,
        records.len(),
        DIVIDER_TOKEN,
    );
    [header, TableBuilder::new(database, records).build()].concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyTypeValue, PropertyValue};
    use crate::types::{DatabaseId, PageId, RichTextItem, SelectOption};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn exported_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn roadmap() -> Database {
        Database::new(DatabaseId::new("db-0001"))
            .with_title("Roadmap")
            .with_column("Name", "title")
            .with_column("Status", "select")
    }

    #[test]
    fn test_timestamps_keep_their_offset() {
        assert_eq!(
            format_record_timestamp(Some("2024-03-05T10:15:00.000Z")),
            "2024-03-05 10:15"
        );
        assert_eq!(
            format_record_timestamp(Some("2024-03-05T10:15:00+09:00")),
            "2024-03-05 10:15"
        );
        assert_eq!(
            format_record_timestamp(Some("2024-06-02T08:30:00+02:00")),
            "2024-06-02 08:30"
        );
        assert_eq!(format_record_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_record_timestamp(None), "");
    }

    #[test]
    fn test_empty_database_has_no_table_rows() {
        let doc = compose_database_table(&roadmap(), &[], exported_at());
        assert_eq!(
            doc,
            "# Roadmap - Table\n\
             **Created**: 2024-07-01 09:30:00\n\
             **Database ID**: db-0001\n\
             **Pages**: 0\n\n\
             ---\n\n\
             No pages in this database.\n"
        );
        assert!(!doc.contains("| --- |"));
    }

    #[test]
    fn test_rows_follow_schema_order() {
        let record = Page::new(PageId::new("abcd-1234"))
            .with_timestamps("2024-01-02T03:04:00.000Z", "2024-01-03T03:04:00.000Z")
            .with_property(
                "Status",
                PropertyValue::new(PropertyTypeValue::Select {
                    select: Some(SelectOption::new("In | Progress")),
                }),
            )
            .with_property(
                "Name",
                PropertyValue::new(PropertyTypeValue::Title {
                    title: vec![RichTextItem::plain_text("Launch")],
                }),
            );

        let body = TableBuilder::new(&roadmap(), std::slice::from_ref(&record)).build();
        assert_eq!(
            body,
            "| Name | Status | Page ID | Created | Last Edited | URL |\n\
             | --- | --- | --- | --- | --- | --- |\n\
             | Launch | In \\| Progress | abcd-1234 | 2024-01-02 03:04 | 2024-01-03 03:04 | [Link](https://notion.so/abcd1234) |\n"
        );
    }

    #[test]
    fn test_missing_properties_render_empty_cells() {
        let record = Page::new(PageId::new("p1"));
        let database = roadmap();
        let builder = TableBuilder::new(&database, std::slice::from_ref(&record));
        let row = builder.row(&record);
        assert_eq!(row.len(), builder.columns().len());
        assert_eq!(&row[..2], &["".to_string(), "".to_string()]);
    }
}
