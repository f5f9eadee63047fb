pub mod blocks;
pub mod hooks;
pub mod inlines;
pub mod parser;
pub mod rules;
pub mod scan;
