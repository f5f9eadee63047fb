use core::fmt;

use serde::Serialize;

use crate::md::blocks::Block;
use crate::md::inlines::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// An unordered list: one independently inline-parsed sequence per item.
#[derive(Debug, Serialize)]
pub struct BulletList {
    items: Vec<Vec<Inline>>,
}

impl BulletList {
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

impl fmt::Display for BulletList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<ul>")?;

        for item in &self.items {
            f.write_str("<li>")?;

            for inline in item {
                write!(f, "{inline}")?;
            }

            f.write_str("</li>")?;
        }

        f.write_str("</ul>")
    }
}

fn is_item(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

/// Claims consecutive `- ` / `* ` lines; a blank or non-matching line
/// ends the list.
pub struct BulletListRule;

impl BlockRule for BulletListRule {
    fn name(&self) -> &'static str {
        "bullet_list"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        is_item(lines[index].trim_start())
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

            if !is_item(line) {
                break;
            }

            items.push(parser.parse_inline(line[2..].trim()));
            at += 1;
        }

        Some((Block::BulletList(BulletList::new(items)), at))
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockRule, BulletListRule};
    use crate::md::parser::MarkdownParser;

    #[test]
    fn mixed_markers_one_list() {
        let parser = MarkdownParser::new().with_defaults();
        let lines = ["- A", "* B", "", "- C"];

        let (block, next) = BulletListRule
            .parse(&lines, 0, &parser)
            .expect("should parse");

        assert!(next == 2, "blank line should end the list");

        match block {
            Block::BulletList(list) => {
                assert!(list.to_string() == "<ul><li>A</li><li>B</li></ul>");
            }

            any => panic!("block was not a bullet list, was: {any:#?}"),
        }
    }
}
