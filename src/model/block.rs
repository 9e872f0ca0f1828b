use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::TableOfContents($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// Block represents the Notion block types this exporter knows how to render,
/// plus a catch-all for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Divider(DividerBlock),
    TableOfContents(TableOfContentsBlock),
    Image(ImageBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Get the block's children
    pub fn children(&self) -> &[Block] {
        match_all_blocks!(self, b => &b.common.children)
    }

    /// Whether the API flagged this block as having nested children
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Get mutable common block data
    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    /// Set children
    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = children;
    }

    /// Get block type name as the Notion API spells it
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Divider(_) => "divider",
            Block::TableOfContents(_) => "table_of_contents",
            Block::Image(_) => "image",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// Accept a visitor
    pub fn accept<V: BlockVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Block::Paragraph(b) => visitor.visit_paragraph(&b.content),
            Block::Heading1(b) => visitor.visit_heading(1, &b.content),
            Block::Heading2(b) => visitor.visit_heading(2, &b.content),
            Block::Heading3(b) => visitor.visit_heading(3, &b.content),
            Block::BulletedListItem(b) => visitor.visit_bulleted_list_item(&b.content),
            Block::NumberedListItem(b) => visitor.visit_numbered_list_item(&b.content),
            Block::ToDo(b) => visitor.visit_todo(b),
            Block::Quote(b) => visitor.visit_quote(&b.content),
            Block::Callout(b) => visitor.visit_callout(b),
            Block::Code(b) => visitor.visit_code(b),
            Block::Divider(_) => visitor.visit_divider(),
            Block::TableOfContents(_) => visitor.visit_table_of_contents(),
            Block::Image(b) => visitor.visit_image(b),
            Block::Unsupported(b) => visitor.visit_unsupported(&b.block_type),
        }
    }
}

/// Visitor trait for traversing block structures.
///
/// All methods have default implementations that return `Default::default()`,
/// so implementors only need to override the methods they care about.
pub trait BlockVisitor {
    type Output: Default;

    fn visit_paragraph(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_heading(&mut self, _level: u8, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_bulleted_list_item(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_numbered_list_item(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_todo(&mut self, _todo: &ToDoBlock) -> Self::Output {
        Default::default()
    }
    fn visit_quote(&mut self, _content: &TextBlockContent) -> Self::Output {
        Default::default()
    }
    fn visit_callout(&mut self, _callout: &CalloutBlock) -> Self::Output {
        Default::default()
    }
    fn visit_code(&mut self, _code: &CodeBlock) -> Self::Output {
        Default::default()
    }
    fn visit_divider(&mut self) -> Self::Output {
        Default::default()
    }
    fn visit_table_of_contents(&mut self) -> Self::Output {
        Default::default()
    }
    fn visit_image(&mut self, _image: &ImageBlock) -> Self::Output {
        Default::default()
    }
    fn visit_unsupported(&mut self, _block_type: &str) -> Self::Output {
        Default::default()
    }
}
