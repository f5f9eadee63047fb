use core::fmt;

use serde::Serialize;

use super::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::InlineRule;
use crate::md::scan;

/// An inline link. Both fields are verbatim; neither is re-parsed.
#[derive(Debug, Serialize)]
pub struct Link {
    text: String,
    url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\">{}</a>", self.url, self.text)
    }
}

/// `[text](url)`. The `(` must immediately follow the `]`; any missing
/// delimiter declines the whole construct.
pub struct LinkRule;

impl InlineRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn matches(&self, chars: &[char], index: usize) -> bool {
        chars.get(index) == Some(&'[')
    }

    fn parse(
        &self,
        chars: &[char],
        index: usize,
        _parser: &MarkdownParser,
    ) -> Option<(Inline, usize)> {
        let text_end = scan::find_char(chars, index + 1, ']')?;

        if chars.get(text_end + 1) != Some(&'(') {
            return None;
        }

        let url_end = scan::find_char(chars, text_end + 2, ')')?;

        let text: String = chars[index + 1..text_end].iter().collect();
        let url: String = chars[text_end + 2..url_end].iter().collect();

        Some((Inline::Link(Link::new(text, url)), url_end + 1))
    }
}
