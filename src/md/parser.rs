//! The parsing engine: three insertion-ordered registries and the two
//! first-match-wins dispatch loops, one over lines and one over chars.

use tracing::{debug, trace};

use super::blocks::{
    Block, BlockQuoteRule, BulletListRule, FencedCodeRule, HeadingRule, OrderedListRule, Paragraph,
    StyleBreakRule,
};
use super::hooks::{EmitHook, ParagraphNormalize};
use super::inlines::{EmphasisRule, HardBreakRule, Inline, InlineCodeRule, LinkRule, Text};
use super::rules::{BlockRule, InlineRule};

/// The parser. Holds the block-rule, inline-rule and emit-hook
/// registries; registration order is the only tie-break between rules
/// claiming the same position.
///
/// Registries are configuration: append rules and hooks before parsing,
/// then call the parse entry points any number of times. Parsing itself
/// takes `&self`, runs to completion, and keeps no state across calls.
pub struct MarkdownParser {
    block_rules: Vec<Box<dyn BlockRule>>,
    inline_rules: Vec<Box<dyn InlineRule>>,
    emit_hooks: Vec<Box<dyn EmitHook>>,
}

impl MarkdownParser {
    /// Creates a parser with empty registries.
    pub fn new() -> Self {
        Self {
            block_rules: Vec::new(),
            inline_rules: Vec::new(),
            emit_hooks: Vec::new(),
        }
    }

    /// The default rule set and the default hook in one go.
    pub fn with_defaults(self) -> Self {
        self.with_default_rules().with_default_hooks()
    }

    /// Registers the eleven default rules.
    ///
    /// The two-character emphasis markers go in ahead of the
    /// one-character ones; see [`EmphasisRule`].
    pub fn with_default_rules(self) -> Self {
        self.add_block_rule(StyleBreakRule)
            .add_block_rule(HeadingRule)
            .add_block_rule(FencedCodeRule)
            .add_block_rule(BlockQuoteRule)
            .add_block_rule(BulletListRule)
            .add_block_rule(OrderedListRule)
            .add_inline_rule(EmphasisRule::strong("**"))
            .add_inline_rule(EmphasisRule::strong("__"))
            .add_inline_rule(EmphasisRule::regular("*"))
            .add_inline_rule(EmphasisRule::regular("_"))
            .add_inline_rule(InlineCodeRule)
            .add_inline_rule(LinkRule)
            .add_inline_rule(HardBreakRule)
    }

    /// Registers the paragraph-normalize hook.
    pub fn with_default_hooks(self) -> Self {
        self.add_emit_hook(ParagraphNormalize)
    }

    pub fn add_block_rule(mut self, rule: impl BlockRule + 'static) -> Self {
        self.block_rules.push(Box::new(rule));
        self
    }

    pub fn add_inline_rule(mut self, rule: impl InlineRule + 'static) -> Self {
        self.inline_rules.push(Box::new(rule));
        self
    }

    pub fn add_emit_hook(mut self, hook: impl EmitHook + 'static) -> Self {
        self.emit_hooks.push(Box::new(hook));
        self
    }

    /// Renders each top-level block and concatenates the results.
    pub fn parse_to_html(&self, text: &str) -> String {
        self.parse(text).iter().map(ToString::to_string).collect()
    }

    /// The block loop: dispatches each line to the first rule that both
    /// matches and parses, falling back to paragraph accumulation.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let lines: Vec<&str> = text.split('\n').collect();

        debug!(lines = lines.len(), "block pass");

        let mut output = Vec::new();
        let mut at = 0;

        'lines: while at < lines.len() {
            if lines[at].trim_end().is_empty() {
                at += 1;
                continue;
            }

            for rule in &self.block_rules {
                if !rule.matches(&lines, at) {
                    continue;
                }

                // a rule may match yet decline to parse; move on to the
                // next one instead of aborting the line
                let Some((block, next)) = rule.parse(&lines, at, self) else {
                    continue;
                };

                trace!(rule = rule.name(), from = at, to = next, "block rule fired");

                self.emit_block(&mut output, block, Some(rule.as_ref()));
                at = next;

                continue 'lines;
            }

            let mut accumulated = Vec::new();

            while at < lines.len() {
                let line = lines[at];

                if line.is_empty() {
                    break;
                }

                // look-ahead boundary only: a match ends the paragraph
                // even if that rule would go on to decline the line
                if self.block_rules.iter().any(|rule| rule.matches(&lines, at)) {
                    break;
                }

                accumulated.push(line);
                at += 1;
            }

            if accumulated.is_empty() {
                // every matching rule declined this line; take it
                // verbatim so the loop always moves forward
                accumulated.push(lines[at]);
                at += 1;
            }

            let paragraph = Paragraph::new(self.parse_inline(&accumulated.join("\n")));

            self.emit_block(&mut output, Block::Paragraph(paragraph), None);
        }

        output
    }

    /// The inline loop: mirrors the block loop at character granularity,
    /// accumulating plain-text runs between rule matches.
    pub fn parse_inline(&self, text: &str) -> Vec<Inline> {
        let chars: Vec<char> = text.chars().collect();

        let mut output = Vec::new();
        let mut at = 0;

        'chars: while at < chars.len() {
            for rule in &self.inline_rules {
                if !rule.matches(&chars, at) {
                    continue;
                }

                let Some((inline, next)) = rule.parse(&chars, at, self) else {
                    continue;
                };

                trace!(rule = rule.name(), from = at, to = next, "inline rule fired");

                self.emit_inline(&mut output, inline, Some(rule.as_ref()));
                at = next;

                continue 'chars;
            }

            let mut run = String::new();

            while at < chars.len() {
                if self.inline_rules.iter().any(|rule| rule.matches(&chars, at)) {
                    break;
                }

                run.push(chars[at]);
                at += 1;
            }

            if run.is_empty() {
                // matched-but-unparseable marker, e.g. an unclosed
                // backtick; consume it as literal text to keep moving
                run.push(chars[at]);
                at += 1;
            }

            self.emit_inline(&mut output, Inline::Text(Text::new(run)), None);
        }

        output
    }

    /// The emission pipeline: producing rule's hook first, then every
    /// global hook in registration order, then append. `output` never
    /// yet contains the node while hooks run.
    fn emit_block(&self, output: &mut Vec<Block>, mut block: Block, rule: Option<&dyn BlockRule>) {
        if let Some(rule) = rule {
            rule.on_emit(&mut block, output);
        }

        for hook in &self.emit_hooks {
            hook.on_block(&mut block, output);
        }

        output.push(block);
    }

    fn emit_inline(
        &self,
        output: &mut Vec<Inline>,
        mut inline: Inline,
        rule: Option<&dyn InlineRule>,
    ) {
        if let Some(rule) = rule {
            rule.on_emit(&mut inline, output);
        }

        for hook in &self.emit_hooks {
            hook.on_inline(&mut inline, output);
        }

        output.push(inline);
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}
