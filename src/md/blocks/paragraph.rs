use core::fmt;

use serde::Serialize;

use crate::md::inlines::Inline;

/// The fallback block: any run of lines no rule claims.
///
/// Paragraphs are never produced by a rule. The block loop synthesizes
/// them from accumulated plain lines, which is also why the default
/// newline-to-space normalization lives in a hook rather than here.
#[derive(Debug, Serialize)]
pub struct Paragraph {
    content: Vec<Inline>,
}

impl Paragraph {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &[Inline] {
        &self.content
    }

    /// Mutable view for emit hooks. The sequence itself is write-once;
    /// only the text inside may be rewritten.
    pub fn content_mut(&mut self) -> &mut [Inline] {
        &mut self.content
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<p>")?;

        for inline in &self.content {
            write!(f, "{inline}")?;
        }

        f.write_str("</p>")
    }
}

#[cfg(test)]
mod tests {
    use super::Paragraph;
    use crate::md::inlines::{Inline, Text};

    #[test]
    fn renders_children_in_order() {
        let paragraph = Paragraph::new(vec![
            Inline::Text(Text::new("a")),
            Inline::HardBreak,
            Inline::Text(Text::new("b")),
        ]);

        assert!(paragraph.to_string() == "<p>a<br />b</p>");
    }
}
