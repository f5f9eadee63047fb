//! A small, extensible markdown-to-HTML parser.
//!
//! The engine is two first-match-wins dispatch loops over pluggable rule
//! registries: block rules consume lines, inline rules consume characters.
//! Every produced node runs through an emission pipeline of hooks before
//! joining the output, and renders itself to HTML via [`core::fmt::Display`].
//!
//! ```
//! use tinymark::MarkdownParser;
//!
//! let parser = MarkdownParser::new().with_defaults();
//! let html = parser.parse_to_html("# Hello\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Hello</h1><p>Some <strong>bold</strong> text.</p>");
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

mod md;

pub use md::blocks::{self, Block};
pub use md::hooks::{EmitHook, ParagraphNormalize};
pub use md::inlines::{self, Inline};
pub use md::parser::MarkdownParser;
pub use md::rules::{BlockRule, InlineRule};
pub use md::scan;
