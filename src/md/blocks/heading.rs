use core::fmt;

use serde::Serialize;

use super::Block;
use crate::md::inlines::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// An ATX-style heading, level 1 through 6.
#[derive(Debug, Serialize)]
pub struct Heading {
    level: u8,
    content: Vec<Inline>,
}

impl Heading {
    pub fn new(level: u8, content: Vec<Inline>) -> Self {
        debug_assert!((1..=6).contains(&level), "heading level out of range");

        Self { level, content }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn content(&self) -> &[Inline] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [Inline] {
        &mut self.content
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<h{}>", self.level)?;

        for inline in &self.content {
            write!(f, "{inline}")?;
        }

        write!(f, "</h{}>", self.level)
    }
}

/// Claims any line opening with `#`. A run longer than six hashes gives
/// the line back, leaving it for later rules or the paragraph fallback.
pub struct HeadingRule;

impl BlockRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        lines[index].starts_with('#')
    }

    fn parse(
        &self,
        lines: &[&str],
        index: usize,
        parser: &MarkdownParser,
    ) -> Option<(Block, usize)> {
        let line = lines[index];
        let level = line.chars().take_while(|&c| c == '#').count();

        if !(1..=6).contains(&level) {
            return None;
        }

        let text = line[level..].trim();

        #[allow(clippy::cast_possible_truncation)]
        let heading = Heading::new(level as u8, parser.parse_inline(text));

        Some((Block::Heading(heading), index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockRule, HeadingRule};
    use crate::md::parser::MarkdownParser;

    #[test]
    fn counts_the_hash_run() {
        let parser = MarkdownParser::new().with_defaults();
        let lines = ["### Deep"];

        let (block, next) = HeadingRule.parse(&lines, 0, &parser).expect("should parse");

        assert!(next == 1);

        match block {
            Block::Heading(heading) => {
                assert!(heading.level() == 3);
                assert!(heading.to_string() == "<h3>Deep</h3>");
            }

            any => panic!("block was not a heading, was: {any:#?}"),
        }
    }

    #[test]
    fn refuses_more_than_six_hashes() {
        let parser = MarkdownParser::new().with_defaults();
        let lines = ["####### Way too deep"];

        assert!(HeadingRule.matches(&lines, 0));
        assert!(HeadingRule.parse(&lines, 0, &parser).is_none());
    }
}
