use core::fmt;

use serde::Serialize;

use super::Block;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// A fenced code block. The fence lines are not part of the content and
/// nothing inside is re-parsed.
#[derive(Debug, Serialize)]
pub struct FencedCode {
    language: String,
    code: String,
}

impl FencedCode {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for FencedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<pre><code class=\"language-{}\">{}</code></pre>",
            self.language, self.code
        )
    }
}

/// Backtick fences. The language is whatever follows the opening fence,
/// trimmed. An unterminated fence swallows the rest of the input rather
/// than failing.
pub struct FencedCodeRule;

impl BlockRule for FencedCodeRule {
    fn name(&self) -> &'static str {
        "fenced_code"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        lines[index].starts_with("```")
    }

    fn parse(
        &self,
        lines: &[&str],
        index: usize,
        _parser: &MarkdownParser,
    ) -> Option<(Block, usize)> {
        let language = lines[index][3..].trim().to_owned();

        let mut at = index + 1;
        let mut code = Vec::new();

        while at < lines.len() && !lines[at].starts_with("```") {
            code.push(lines[at]);
            at += 1;
        }

        // closing fence is consumed, never part of the content
        if at < lines.len() {
            at += 1;
        }

        let block = FencedCode::new(language, code.join("\n"));

        Some((Block::FencedCode(block), at))
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockRule, FencedCodeRule};
    use crate::md::parser::MarkdownParser;

    #[test]
    fn fence_lines_are_excluded() {
        let parser = MarkdownParser::new();
        let lines = ["```rust", "panic!()", "```", "after"];

        let (block, next) = FencedCodeRule
            .parse(&lines, 0, &parser)
            .expect("should parse");

        assert!(next == 3);

        match block {
            Block::FencedCode(code) => {
                assert!(code.language() == "rust");
                assert!(code.code() == "panic!()");
            }

            any => panic!("block was not fenced code, was: {any:#?}"),
        }
    }

    #[test]
    fn unterminated_fence_runs_to_the_end() {
        let parser = MarkdownParser::new();
        let lines = ["```", "one", "two"];

        let (block, next) = FencedCodeRule
            .parse(&lines, 0, &parser)
            .expect("should parse");

        assert!(next == 3);

        match block {
            Block::FencedCode(code) => {
                assert!(code.language().is_empty());
                assert!(code.code() == "one\ntwo");
            }

            any => panic!("block was not fenced code, was: {any:#?}"),
        }
    }
}
