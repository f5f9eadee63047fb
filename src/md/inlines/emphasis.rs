use core::fmt;

use serde::Serialize;

use super::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::InlineRule;
use crate::md::scan;

/// Strong emphasis, delimited by `**` or `__`.
#[derive(Debug, Serialize)]
pub struct Bold {
    content: Vec<Inline>,
}

impl Bold {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &[Inline] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [Inline] {
        &mut self.content
    }
}

impl fmt::Display for Bold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<strong>")?;

        for inline in &self.content {
            write!(f, "{inline}")?;
        }

        f.write_str("</strong>")
    }
}

/// Regular emphasis, delimited by `*` or `_`.
#[derive(Debug, Serialize)]
pub struct Italic {
    content: Vec<Inline>,
}

impl Italic {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &[Inline] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut [Inline] {
        &mut self.content
    }
}

impl fmt::Display for Italic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<em>")?;

        for inline in &self.content {
            write!(f, "{inline}")?;
        }

        f.write_str("</em>")
    }
}

/// Delimiter-matched emphasis, one instance per marker literal.
///
/// The two-character markers must be registered ahead of the
/// one-character ones, or `**bold**` parses as two adjacent `*` pairs.
/// That ordering is a correctness requirement, not an optimization.
pub struct EmphasisRule {
    marker: &'static str,
    strong: bool,
}

impl EmphasisRule {
    pub fn strong(marker: &'static str) -> Self {
        Self {
            marker,
            strong: true,
        }
    }

    pub fn regular(marker: &'static str) -> Self {
        Self {
            marker,
            strong: false,
        }
    }
}

impl InlineRule for EmphasisRule {
    fn name(&self) -> &'static str {
        if self.strong { "bold" } else { "italic" }
    }

    fn matches(&self, chars: &[char], index: usize) -> bool {
        let mut at = index;

        for expected in self.marker.chars() {
            if chars.get(at) != Some(&expected) {
                return false;
            }

            at += 1;
        }

        true
    }

    fn parse(
        &self,
        chars: &[char],
        index: usize,
        parser: &MarkdownParser,
    ) -> Option<(Inline, usize)> {
        let width = self.marker.chars().count();
        let close = scan::find_closing(chars, index + width, self.marker)?;

        let content: String = chars[index + width..close].iter().collect();
        let inner = parser.parse_inline(&content);

        let node = if self.strong {
            Inline::Bold(Bold::new(inner))
        } else {
            Inline::Italic(Italic::new(inner))
        };

        Some((node, close + width))
    }
}
