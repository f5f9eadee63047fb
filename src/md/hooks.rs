//! Globally registered observers for freshly produced nodes.

use super::blocks::Block;
use super::inlines::Inline;

/// A hook invoked on every emission, independent of any specific rule.
///
/// Hooks run after the producing rule's own `on_emit` and before the node
/// is appended, so `output` never yet contains the node. A hook may mutate
/// the node or earlier siblings but must not remove or reorder entries.
pub trait EmitHook {
    fn on_block(&self, _block: &mut Block, _output: &mut [Block]) {}

    fn on_inline(&self, _inline: &mut Inline, _output: &mut [Inline]) {}
}

/// Default hook: collapses multi-line paragraph source into one rendered
/// line by rewriting newlines in the paragraph's direct text children to
/// spaces. Fires on every emission, acts only on paragraphs.
pub struct ParagraphNormalize;

impl EmitHook for ParagraphNormalize {
    fn on_block(&self, block: &mut Block, _output: &mut [Block]) {
        let Block::Paragraph(paragraph) = block else {
            return;
        };

        for inline in paragraph.content_mut() {
            if let Inline::Text(text) = inline {
                text.rewrite(|s| s.replace('\n', " "));
            }
        }
    }
}
