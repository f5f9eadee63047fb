use core::fmt;

use serde::Serialize;

use super::ordered_marker_len;
use crate::md::blocks::Block;
use crate::md::inlines::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// An ordered list. The source numbers are discarded; ordering is
/// positional, so `7.` then `9.` still renders as a plain `<ol>`.
#[derive(Debug, Serialize)]
pub struct OrderedList {
    items: Vec<Vec<Inline>>,
}

impl OrderedList {
    pub fn new(items: Vec<Vec<Inline>>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Vec<Inline>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Vec<Inline>] {
        &mut self.items
    }
}

impl fmt::Display for OrderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<ol>")?;

        for item in &self.items {
            f.write_str("<li>")?;

            for inline in item {
                write!(f, "{inline}")?;
            }

            f.write_str("</li>")?;
        }

        f.write_str("</ol>")
    }
}

/// Claims consecutive `N. ` lines; a blank or non-matching line ends
/// the list.
pub struct OrderedListRule;

impl BlockRule for OrderedListRule {
    fn name(&self) -> &'static str {
        "ordered_list"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        ordered_marker_len(lines[index].trim_start()).is_some()
    }

    fn parse(
        &self,
        lines: &[&str],
        index: usize,
        parser: &MarkdownParser,
    ) -> Option<(Block, usize)> {
        let mut at = index;
        let mut items = Vec::new();

        while at < lines.len() {
            let line = lines[at].trim_start();

            let Some(marker) = ordered_marker_len(line) else {
                break;
            };

            items.push(parser.parse_inline(line[marker..].trim()));
            at += 1;
        }

        Some((Block::OrderedList(OrderedList::new(items)), at))
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockRule, OrderedListRule};
    use crate::md::parser::MarkdownParser;

    #[test]
    fn source_numbers_are_discarded() {
        let parser = MarkdownParser::new().with_defaults();
        let lines = ["7. First", "9. Second"];

        let (block, next) = OrderedListRule
            .parse(&lines, 0, &parser)
            .expect("should parse");

        assert!(next == 2);

        match block {
            Block::OrderedList(list) => {
                assert!(list.to_string() == "<ol><li>First</li><li>Second</li></ol>");
            }

            any => panic!("block was not an ordered list, was: {any:#?}"),
        }
    }
}
