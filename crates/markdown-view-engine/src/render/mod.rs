//! Built-in render rules.

mod breaks;
mod image;
mod list;
pub mod table;
mod text;

pub use image::padded_size;
pub use list::{DEFAULT_BULLET, item_label};
pub use text::text_content;

use crate::ast::NodeKind;
use crate::rules::Rules;

pub(crate) fn register_builtin(rules: &mut Rules) {
    rules
        .insert(NodeKind::Text, text::render_text)
        .insert(NodeKind::Paragraph, text::render_paragraph)
        .insert(NodeKind::Em, text::render_em)
        .insert(NodeKind::Strong, text::render_strong)
        .insert(NodeKind::U, text::render_underline)
        .insert(NodeKind::Del, text::render_del)
        .insert(NodeKind::BlockQuote, text::render_block_quote)
        .insert(NodeKind::Heading, text::render_heading)
        .insert(NodeKind::Link, text::render_link)
        .insert(NodeKind::CodeBlock, text::render_code_block)
        .insert(NodeKind::InlineCode, text::render_inline_code)
        .insert(NodeKind::Image, image::render_image)
        .insert(NodeKind::List, list::render_list)
        .insert(NodeKind::Table, table::render_table)
        .insert(NodeKind::Hr, breaks::render_hr)
        .insert(NodeKind::Br, breaks::render_br)
        .insert(NodeKind::Newline, breaks::render_newline);
}
