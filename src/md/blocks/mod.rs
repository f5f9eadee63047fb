pub mod blockquote;
pub mod code;
pub mod heading;
pub mod lists;
pub mod paragraph;
pub mod style_break;

use core::fmt;

use serde::Serialize;

pub use blockquote::{BlockQuote, BlockQuoteRule};
pub use code::{FencedCode, FencedCodeRule};
pub use heading::{Heading, HeadingRule};
pub use lists::bullet_list::{BulletList, BulletListRule};
pub use lists::ordered_list::{OrderedList, OrderedListRule};
pub use paragraph::Paragraph;
pub use style_break::StyleBreakRule;

/// An enum representing all implemented types of markdown blocks.
///
/// Every variant owns its children outright and renders its HTML form on
/// demand through `Display`; nothing is cached, so rendering twice yields
/// the same string.
#[derive(Debug, Serialize)]
pub enum Block {
    Paragraph(Paragraph),
    Blockquote(BlockQuote),
    BulletList(BulletList),
    OrderedList(OrderedList),
    FencedCode(FencedCode),
    Heading(Heading),
    StyleBreak,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Paragraph(paragraph) => paragraph.fmt(f),
            Block::Blockquote(quote) => quote.fmt(f),
            Block::BulletList(list) => list.fmt(f),
            Block::OrderedList(list) => list.fmt(f),
            Block::FencedCode(code) => code.fmt(f),
            Block::Heading(heading) => heading.fmt(f),
            Block::StyleBreak => f.write_str("<hr />"),
        }
    }
}
