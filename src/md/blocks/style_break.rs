use super::Block;
use crate::md::parser::MarkdownParser;
use crate::md::rules::BlockRule;

/// Thematic break: a line opening with `---` or `***`. Consumes exactly
/// one line and carries no payload.
pub struct StyleBreakRule;

impl BlockRule for StyleBreakRule {
    fn name(&self) -> &'static str {
        "style_break"
    }

    fn matches(&self, lines: &[&str], index: usize) -> bool {
        let line = lines[index];

        line.starts_with("---") || line.starts_with("***")
    }

    fn parse(
        &self,
        _lines: &[&str],
        index: usize,
        _parser: &MarkdownParser,
    ) -> Option<(Block, usize)> {
        Some((Block::StyleBreak, index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockRule, StyleBreakRule};

    #[test]
    fn both_marker_styles() {
        assert!(StyleBreakRule.matches(&["---"], 0));
        assert!(StyleBreakRule.matches(&["***"], 0));
        assert!(!StyleBreakRule.matches(&["--"], 0));
        assert!(!StyleBreakRule.matches(&["text"], 0));
    }
}
