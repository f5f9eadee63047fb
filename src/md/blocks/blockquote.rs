use core::fmt;

use serde::Serialize;

use super::Block;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// A quote block. Inner lines are re-run through the full block parser,
/// so quotes nest arbitrary block structure, including further quotes.
#[derive(Debug, Serialize)]
pub struct BlockQuote {
    content: Vec<Block>,
}

impl BlockQuote {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &[Block] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [Block] {
        &mut self.content
    }
}

impl fmt::Display for BlockQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<blockquote>")?;

        for block in &self.content {
            write!(f, "{block}")?;
        }

        f.write_str("</blockquote>")
    }
}

/// Claims consecutive lines whose left-trimmed form starts with `>`.
pub struct BlockQuoteRule;

impl BlockRule for BlockQuoteRule {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        lines[index].trim_start().starts_with('>')
    }

    fn parse(
        &self,
        lines: &[&str],
        index: usize,
        parser: &MarkdownParser,
    ) -> Option<(Block, usize)> {
        let mut at = index;
        let mut quoted = Vec::new();

        while at < lines.len() {
            let trimmed = lines[at].trim_start();

            if !trimmed.starts_with('>') {
                break;
            }

            quoted.push(trimmed.trim_start_matches('>').trim());
            at += 1;
        }

        let quote = BlockQuote::new(parser.parse(&quoted.join("\n")));

        Some((Block::Blockquote(quote), at))
    }
}
