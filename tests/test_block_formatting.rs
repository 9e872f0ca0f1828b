//! Block JSON as the API returns it, parsed and rendered to Markdown.

mod common;

use common::{ok_response, Q3_PLAN_BLOCKS};
use notion2markdown::{parse_blocks_response, render_blocks, Block};
use pretty_assertions::assert_eq;

fn single_block_list(block_json: &str) -> String {
    format!(
        r#"{{"object": "list", "results": [{}], "next_cursor": null, "has_more": false}}"#,
        block_json
    )
}

fn render_json(block_json: &str) -> String {
    let blocks = parse_blocks_response(ok_response(&single_block_list(block_json)))
        .expect("Block list parsing should succeed");
    render_blocks(&blocks)
}

#[test]
fn test_fixture_blocks_parse_in_order() {
    let blocks = parse_blocks_response(ok_response(Q3_PLAN_BLOCKS)).unwrap();

    let kinds: Vec<&str> = blocks.iter().map(Block::block_type).collect();
    assert_eq!(
        kinds,
        vec!["heading_1", "paragraph", "bulleted_list_item", "code", "synced_block"]
    );
    assert!(blocks[2].has_children());
    assert!(blocks[2].children().is_empty());
}

#[test]
fn test_callout_with_and_without_emoji() {
    let with_emoji = r#"{
        "object": "block",
        "id": "2b2b3c4d-0000-4000-8000-000000000001",
        "type": "callout",
        "has_children": false,
        "callout": {
            "rich_text": [{"type": "text", "text": {"content": "Heads up", "link": null}, "plain_text": "Heads up"}],
            "icon": {"type": "emoji", "emoji": "⚠️"},
            "color": "gray_background"
        }
    }"#;
    assert_eq!(render_json(with_emoji), "⚠️ Heads up\n\n");

    let external_icon = r#"{
        "object": "block",
        "id": "2b2b3c4d-0000-4000-8000-000000000002",
        "type": "callout",
        "has_children": false,
        "callout": {
            "rich_text": [{"type": "text", "text": {"content": "Note", "link": null}, "plain_text": "Note"}],
            "icon": {"type": "external", "external": {"url": "https://example.com/i.png"}}
        }
    }"#;
    assert_eq!(render_json(external_icon), "💡 Note\n\n");
}

#[test]
fn test_image_sources() {
    let external = r#"{
        "object": "block",
        "id": "2b2b3c4d-0000-4000-8000-000000000003",
        "type": "image",
        "has_children": false,
        "image": {
            "type": "external",
            "external": {"url": "https://example.com/chart.png"},
            "caption": [{"type": "text", "text": {"content": "Q3 chart", "link": null}, "plain_text": "Q3 chart"}]
        }
    }"#;
    assert_eq!(
        render_json(external),
        "![Q3 chart](https://example.com/chart.png) Q3 chart\n\n"
    );

    let hosted = r#"{
        "object": "block",
        "id": "2b2b3c4d-0000-4000-8000-000000000004",
        "type": "image",
        "has_children": false,
        "image": {
            "type": "file",
            "file": {"url": "https://s3.example.com/upload.png", "expiry_time": "2024-07-01T10:00:00.000Z"},
            "caption": []
        }
    }"#;
    assert_eq!(render_json(hosted), "![](https://s3.example.com/upload.png)\n\n");
}

#[test]
fn test_links_annotations_and_dropped_mentions() {
    let paragraph = r#"{
        "object": "block",
        "id": "2b2b3c4d-0000-4000-8000-000000000005",
        "type": "paragraph",
        "has_children": false,
        "paragraph": {
            "rich_text": [
                {"type": "text", "text": {"content": "See ", "link": null}, "plain_text": "See "},
                {"type": "text", "text": {"content": "docs", "link": {"url": "https://developers.notion.com"}},
                 "annotations": {"bold": false, "italic": true, "strikethrough": false, "underline": false, "code": false, "color": "default"},
                 "plain_text": "docs", "href": "https://developers.notion.com"},
                {"type": "mention", "mention": {"type": "user", "user": {"id": "u1"}}, "plain_text": "@Ada"}
            ]
        }
    }"#;
    assert_eq!(
        render_json(paragraph),
        "See [*docs*](https://developers.notion.com)\n\n"
    );
}

#[test]
fn test_structural_blocks() {
    let divider = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-000000000006",
                      "type": "divider", "has_children": false, "divider": {}}"#;
    assert_eq!(render_json(divider), "---\n\n");

    let toc = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-000000000007",
                  "type": "table_of_contents", "has_children": false,
                  "table_of_contents": {"color": "default"}}"#;
    assert_eq!(render_json(toc), "[[TOC]]\n\n");

    let quote = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-000000000008",
                    "type": "quote", "has_children": false,
                    "quote": {"rich_text": [{"type": "text", "text": {"content": "Less is more", "link": null}, "plain_text": "Less is more"}]}}"#;
    assert_eq!(render_json(quote), "> Less is more\n\n");
}

#[test]
fn test_unknown_block_types_are_kept_as_comments() {
    let column_list = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-000000000009",
                          "type": "column_list", "has_children": true, "column_list": {}}"#;
    assert_eq!(
        render_json(column_list),
        "<!-- Unsupported block: column_list -->\n\n"
    );
}

#[test]
fn test_malformed_payload_degrades_to_empty_text() {
    // rich_text of the wrong shape must not sink the list.
    let heading = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-00000000000a",
                      "type": "heading_2", "has_children": false,
                      "heading_2": {"rich_text": "not an array"}}"#;
    assert_eq!(render_json(heading), "## \n\n");
}

#[test]
fn test_mistyped_checked_keeps_todo_text() {
    let todo = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-00000000000b",
                   "type": "to_do", "has_children": false,
                   "to_do": {"rich_text": [{"type": "text", "text": {"content": "ship", "link": null}, "plain_text": "ship"}],
                             "checked": 1}}"#;
    assert_eq!(render_json(todo), "[ ] ship\n");
}

#[test]
fn test_mistyped_icon_keeps_callout_text() {
    let callout = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-00000000000c",
                      "type": "callout", "has_children": false,
                      "callout": {"rich_text": [{"type": "text", "text": {"content": "note", "link": null}, "plain_text": "note"}],
                                  "icon": {"type": "emoji", "emoji": 7}}}"#;
    assert_eq!(render_json(callout), "💡 note\n\n");
}

#[test]
fn test_malformed_annotations_keep_span_text() {
    let paragraph = r#"{"object": "block", "id": "2b2b3c4d-0000-4000-8000-00000000000d",
                        "type": "paragraph", "has_children": false,
                        "paragraph": {"rich_text": [
                            {"type": "text", "text": {"content": "bold-ish", "link": null},
                             "annotations": {"bold": "yes", "code": true}, "plain_text": "bold-ish"}
                        ]}}"#;
    assert_eq!(render_json(paragraph), "`bold-ish`\n\n");
}
