//! The capability contracts that let new syntaxes plug into the engine.
//!
//! Both rule families share one shape: a cheap `matches` look-ahead and a
//! `parse` that either consumes input and produces a node, or declines with
//! `None` so the engine can try the next rule. Registration order is the
//! only tie-break between rules claiming the same position.

use super::blocks::Block;
use super::inlines::Inline;
use super::parser::MarkdownParser;

/// A pluggable matcher and parser for one block-level construct.
///
/// Block rules see the whole line sequence and the index of the line the
/// engine is standing on.
pub trait BlockRule {
    /// Stable identifier, used in trace output.
    fn name(&self) -> &'static str;

    /// Does this rule claim the line at `index`? Must not consume anything.
    fn matches(&self, lines: &[&str], index: usize) -> bool;

    /// Consumes one or more lines starting at `index`, producing a block and
    /// the index of the first unconsumed line. `None` hands the line to the
    /// next rule; matching is not parsing.
    fn parse(&self, lines: &[&str], index: usize, parser: &MarkdownParser)
    -> Option<(Block, usize)>;

    /// Called right before the produced block joins `output`.
    fn on_emit(&self, _block: &mut Block, _output: &mut [Block]) {}
}

/// A pluggable matcher and parser for one inline-level construct,
/// operating over the character sequence of a single logical text unit.
pub trait InlineRule {
    /// Stable identifier, used in trace output.
    fn name(&self) -> &'static str;

    /// Does this rule claim the character at `index`?
    fn matches(&self, chars: &[char], index: usize) -> bool;

    /// Consumes one or more characters starting at `index`, producing an
    /// inline node and the index of the first unconsumed character.
    fn parse(&self, chars: &[char], index: usize, parser: &MarkdownParser)
    -> Option<(Inline, usize)>;

    /// Called right before the produced inline joins `output`.
    fn on_emit(&self, _inline: &mut Inline, _output: &mut [Inline]) {}
}
