// src/api/conversion.rs
//! Conversion from wire types to the domain model.
//!
//! Conversion never fails on content: unknown block tags become
//! `Block::Unsupported`, unknown property tags become `PropertyTypeValue::Other`,
//! and malformed payloads degrade to defaults with a warning.

use super::responses::*;
use crate::error::AppError;
use crate::formatting::rich_text_to_markdown;
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{
    Block, Database, DatabaseProperty, DatabaseTitle, Page, PageTitle, PropertyTypeValue,
    PropertyValue,
};
use crate::types::{
    Annotations, BlockId, DatabaseId, DateValue, Link, PageId, PropertyName, RichTextItem,
    RichTextType, SelectOption, User,
};
use serde_json::Value;

/// Convert a raw page (standalone or database record) into a domain `Page`.
pub fn convert_page(raw: RawPage) -> Result<Page, AppError> {
    if raw.id.is_empty() {
        return Err(AppError::MalformedResponse(
            "page object is missing its id".to_string(),
        ));
    }

    let id = PageId::new(raw.id);
    let properties: indexmap::IndexMap<PropertyName, PropertyValue> = raw
        .properties
        .iter()
        .map(|(name, value)| (PropertyName::new(name.as_str()), convert_property(name, value)))
        .collect();
    let title = extract_page_title(&properties).unwrap_or_else(|| PageTitle::untitled(id.short()));

    Ok(Page {
        id,
        title,
        created_time: raw.created_time,
        last_edited_time: raw.last_edited_time,
        properties,
        blocks: Vec::new(),
    })
}

/// Convert a raw database object into a domain `Database` (schema only).
pub fn convert_database(raw: RawDatabase) -> Result<Database, AppError> {
    if raw.id.is_empty() {
        return Err(AppError::MalformedResponse(
            "database object is missing its id".to_string(),
        ));
    }

    let id = DatabaseId::new(raw.id);
    let title_spans = convert_rich_text_array(&decode_lenient::<Vec<Value>>(
        raw.title.as_ref(),
        "database title",
    ));
    let title_text = rich_text_to_markdown(&title_spans);
    let title = if title_text.is_empty() {
        DatabaseTitle::untitled(id.short())
    } else {
        DatabaseTitle::new(title_text)
    };

    let properties = raw
        .properties
        .iter()
        .map(|(name, value)| {
            let schema: RawSchemaProperty = decode_lenient(Some(value), "database property");
            (
                PropertyName::new(name.as_str()),
                DatabaseProperty {
                    id: schema.id,
                    name: PropertyName::new(schema.name.unwrap_or_else(|| name.clone())),
                    property_type: schema.property_type,
                },
            )
        })
        .collect();

    Ok(Database {
        id,
        title,
        created_time: raw.created_time,
        last_edited_time: raw.last_edited_time,
        properties,
    })
}

/// Convert a raw block into a domain `Block`. Children are attached later.
pub fn convert_block(raw: RawBlock) -> Block {
    let common = BlockCommon {
        id: BlockId::new(raw.id.clone()),
        children: Vec::new(),
        has_children: raw.has_children,
    };

    let payload: RawBlockPayload = match raw.block_type.as_str() {
        "divider" | "table_of_contents" => RawBlockPayload::default(),
        tag => decode_lenient(raw.type_payload(), tag),
    };
    let content = TextBlockContent::new(convert_rich_text_array(&payload.rich_text));

    match raw.block_type.as_str() {
        "paragraph" => Block::Paragraph(ParagraphBlock { common, content }),
        "heading_1" => Block::Heading1(Heading1Block { common, content }),
        "heading_2" => Block::Heading2(Heading2Block { common, content }),
        "heading_3" => Block::Heading3(Heading3Block { common, content }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock { common, content }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock { common, content }),
        "to_do" => Block::ToDo(ToDoBlock {
            common,
            content,
            checked: payload.checked,
        }),
        "quote" => Block::Quote(QuoteBlock { common, content }),
        "callout" => Block::Callout(CalloutBlock {
            common,
            emoji: payload.icon.and_then(|icon| icon.emoji),
            content,
        }),
        "code" => Block::Code(CodeBlock {
            common,
            language: payload.language,
            content,
        }),
        "divider" => Block::Divider(DividerBlock { common }),
        "table_of_contents" => Block::TableOfContents(TableOfContentsBlock { common }),
        "image" => Block::Image(ImageBlock {
            common,
            source: convert_image_source(payload.external, payload.file),
            caption: convert_rich_text_array(&payload.caption),
        }),
        other => {
            log::debug!("Block {} has unsupported type '{}'", raw.id, other);
            Block::Unsupported(UnsupportedBlock {
                common,
                block_type: other.to_string(),
            })
        }
    }
}

/// External source wins; hosted files are the fallback.
fn convert_image_source(
    external: Option<RawFileLink>,
    file: Option<RawFileLink>,
) -> Option<ImageSource> {
    let non_empty = |link: Option<RawFileLink>| link.and_then(|l| l.url).filter(|u| !u.is_empty());

    if let Some(url) = non_empty(external) {
        return Some(ImageSource::External { url });
    }
    non_empty(file).map(|url| ImageSource::File { url })
}

/// Convert a JSON array of rich text spans, skipping spans that are not objects.
pub fn convert_rich_text_array(spans: &[Value]) -> Vec<RichTextItem> {
    spans
        .iter()
        .map(|span| decode_lenient::<RawRichText>(Some(span), "rich text"))
        .map(convert_rich_text)
        .collect()
}

fn convert_rich_text(raw: RawRichText) -> RichTextItem {
    let annotations = Annotations {
        bold: raw.annotations.bold,
        italic: raw.annotations.italic,
        strikethrough: raw.annotations.strikethrough,
        code: raw.annotations.code,
    };

    let text_type = match (raw.kind.as_str(), raw.text) {
        ("text", Some(text)) => RichTextType::Text {
            content: text.content,
            link: text
                .link
                .and_then(|link| link.url)
                .map(|url| Link { url }),
        },
        ("text", None) => RichTextType::Text {
            content: String::new(),
            link: None,
        },
        (other, _) => RichTextType::Other(other.to_string()),
    };

    RichTextItem {
        text_type,
        annotations,
        plain_text: raw.plain_text,
    }
}

/// Convert one property value, dispatching on its `type` tag.
fn convert_property(name: &str, value: &Value) -> PropertyValue {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let Some(tag) = value.get("type").and_then(Value::as_str) else {
        log::warn!("Property '{}' has no type tag", name);
        return PropertyValue {
            id,
            type_specific_value: PropertyTypeValue::Other {
                type_name: String::new(),
                payload: Value::Null,
            },
        };
    };
    let payload = value.get(tag);
    let context = format!("{} property '{}'", tag, name);

    let type_specific_value = match tag {
        "title" => PropertyTypeValue::Title {
            title: convert_rich_text_array(&decode_lenient::<Vec<Value>>(payload, &context)),
        },
        "rich_text" => PropertyTypeValue::RichText {
            rich_text: convert_rich_text_array(&decode_lenient::<Vec<Value>>(payload, &context)),
        },
        "number" => PropertyTypeValue::Number {
            number: match payload {
                Some(Value::Number(n)) => Some(n.clone()),
                _ => None,
            },
        },
        "select" => PropertyTypeValue::Select {
            select: decode_lenient::<Option<RawSelect>>(payload, &context)
                .map(|s| SelectOption::new(s.name)),
        },
        "multi_select" => PropertyTypeValue::MultiSelect {
            multi_select: decode_lenient::<Vec<RawSelect>>(payload, &context)
                .into_iter()
                .map(|s| SelectOption::new(s.name))
                .collect(),
        },
        "date" => PropertyTypeValue::Date {
            date: decode_lenient::<Option<RawDate>>(payload, &context).map(|d| DateValue {
                start: d.start,
                end: d.end,
            }),
        },
        "checkbox" => PropertyTypeValue::Checkbox {
            checkbox: payload.and_then(Value::as_bool).unwrap_or(false),
        },
        "url" => PropertyTypeValue::Url {
            url: string_payload(payload),
        },
        "email" => PropertyTypeValue::Email {
            email: string_payload(payload),
        },
        "phone_number" => PropertyTypeValue::PhoneNumber {
            phone_number: string_payload(payload),
        },
        "created_time" => PropertyTypeValue::CreatedTime {
            created_time: string_payload(payload),
        },
        "last_edited_time" => PropertyTypeValue::LastEditedTime {
            last_edited_time: string_payload(payload),
        },
        "created_by" => PropertyTypeValue::CreatedBy {
            created_by: decode_lenient::<Option<RawUser>>(payload, &context).map(convert_user),
        },
        "last_edited_by" => PropertyTypeValue::LastEditedBy {
            last_edited_by: decode_lenient::<Option<RawUser>>(payload, &context).map(convert_user),
        },
        other => PropertyTypeValue::Other {
            type_name: other.to_string(),
            payload: payload.cloned().unwrap_or(Value::Null),
        },
    };

    PropertyValue {
        id,
        type_specific_value,
    }
}

fn string_payload(payload: Option<&Value>) -> Option<String> {
    payload.and_then(Value::as_str).map(str::to_string)
}

fn convert_user(raw: RawUser) -> User {
    User {
        id: raw.id,
        name: raw.name,
    }
}

/// The first `title` property with non-empty inline text names the page.
fn extract_page_title(
    properties: &indexmap::IndexMap<PropertyName, PropertyValue>,
) -> Option<PageTitle> {
    properties.values().find_map(|value| match &value.type_specific_value {
        PropertyTypeValue::Title { title } => {
            let text = rich_text_to_markdown(title);
            (!text.is_empty()).then(|| PageTitle::new(text))
        }
        _ => None,
    })
}
