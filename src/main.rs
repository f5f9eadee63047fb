use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinymark::MarkdownParser;

/// Renders a markdown file (or stdin) to HTML.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input file; stdin when omitted
    input: Option<PathBuf>,

    /// Dump the parsed tree as JSON instead of rendering HTML
    #[arg(long)]
    json: bool,

    /// Enable debug logging; repeat for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }

        None => {
            let mut buffer = String::new();

            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;

            buffer
        }
    };

    let parser = MarkdownParser::new().with_defaults();

    if args.json {
        let blocks = parser.parse(&source);

        println!(
            "{}",
            serde_json::to_string_pretty(&blocks).context("encoding tree")?
        );
    } else {
        println!("{}", parser.parse_to_html(&source));
    }

    Ok(())
}
