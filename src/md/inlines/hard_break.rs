use super::Inline;
use crate::md::parser::MarkdownParser;
use crate::md::rules::InlineRule;

/// A forced line break: a newline preceded by a backslash escape, or by
/// the two-space convention. Consumes only the newline itself.
pub struct HardBreakRule;

impl InlineRule for HardBreakRule {
    fn name(&self) -> &'static str {
        "hard_break"
    }

    fn matches(&self, chars: &[char], index: usize) -> bool {
        if chars.get(index) != Some(&'\n') {
            return false;
        }

        if index >= 1 && chars[index - 1] == '\\' {
            return true;
        }

        index >= 2 && chars[index - 1] == ' ' && chars[index - 2] == ' '
    }

    fn parse(
        &self,
        _chars: &[char],
        index: usize,
        _parser: &MarkdownParser,
    ) -> Option<(Inline, usize)> {
        Some((Inline::HardBreak, index + 1))
    }

    /// Cleans the break marker out of the preceding text run: trailing
    /// whitespace goes, and one literal backslash with it.
    fn on_emit(&self, _inline: &mut Inline, output: &mut [Inline]) {
        let Some(Inline::Text(text)) = output.last_mut() else {
            return;
        };

        text.rewrite(|s| {
            let s = s.trim_end();

            s.strip_suffix('\\').unwrap_or(s).to_owned()
        });
    }
}
