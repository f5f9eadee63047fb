pub mod code;
pub mod emphasis;
pub mod hard_break;
pub mod link;

use core::fmt;

use serde::Serialize;

pub use code::{InlineCode, InlineCodeRule};
pub use emphasis::{Bold, EmphasisRule, Italic};
pub use hard_break::HardBreakRule;
pub use link::{Link, LinkRule};

/// An enum representing all implemented inline elements.
#[derive(Debug, Serialize)]
pub enum Inline {
    Text(Text),
    Bold(Bold),
    Italic(Italic),
    Code(InlineCode),
    Link(Link),
    HardBreak,
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(text) => text.fmt(f),
            Inline::Bold(bold) => bold.fmt(f),
            Inline::Italic(italic) => italic.fmt(f),
            Inline::Code(code) => code.fmt(f),
            Inline::Link(link) => link.fmt(f),
            Inline::HardBreak => f.write_str("<br />"),
        }
    }
}

/// A literal text run.
///
/// The single node field that stays mutable after construction: emit
/// hooks rewrite it in place, within the same parse call.
#[derive(Debug, Serialize)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replaces the text with whatever `rewrite` makes of the current value.
    pub fn rewrite<F>(&mut self, rewrite: F)
    where
        F: FnOnce(&str) -> String,
    {
        self.text = rewrite(&self.text);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::Text;

    #[test]
    fn rewrite_replaces_in_place() {
        let mut text = Text::new("one\ntwo");

        text.rewrite(|s| s.replace('\n', " "));

        assert!(text.as_str() == "one two");
    }
}
