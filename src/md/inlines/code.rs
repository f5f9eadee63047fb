use core::fmt;

use serde::Serialize;

use super::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::InlineRule;
use crate::md::scan;

/// A code span. Content is verbatim; nothing inside is re-parsed.
#[derive(Debug, Serialize)]
pub struct InlineCode {
    code: String,
}

impl InlineCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for InlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<code>{}</code>", self.code)
    }
}

/// Backtick-delimited code spans.
pub struct InlineCodeRule;

impl InlineRule for InlineCodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn matches(&self, chars: &[char], index: usize) -> bool {
        chars.get(index) == Some(&'`')
    }

    fn parse(
        &self,
        chars: &[char],
        index: usize,
        _parser: &MarkdownParser,
    ) -> Option<(Inline, usize)> {
        let close = scan::find_closing(chars, index + 1, "`")?;

        let code: String = chars[index + 1..close].iter().collect();

        Some((Inline::Code(InlineCode::new(code)), close + 1))
    }
}
