//! Command-line interface definition using clap.
//!
//! The binary runs the whole pipeline offline: links come from a file
//! and/or repeated `--link` flags, posts come from a JSON snapshot capture,
//! records go to CSV/JSON/JSONL, and the raw objects optionally go to a
//! text dump.

use clap::Parser;

use crate::export::OutputFormat;

/// Retrieve and tabulate Telegram post data from t.me links.
#[derive(Parser, Debug, Clone)]
#[command(name = "linkpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    linkpack links.txt --snapshot capture.json
    linkpack links.txt -s capture.json -o posts.csv
    linkpack -s capture.json -l https://t.me/somechannel/42 -l t.me/c/123/456
    linkpack links.txt -s capture.json --format jsonl --raw raw.txt")]
pub struct Args {
    /// Path to a file of post links (whitespace- or comma-separated)
    pub input: Option<String>,

    /// Path to the JSON snapshot capture to fetch posts from
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: String,

    /// Additional post link (repeatable)
    #[arg(short, long, value_name = "LINK")]
    pub link: Vec<String>,

    /// Path to output file
    #[arg(short, long, default_value = "telegram_posts.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Also write a raw-object text dump to this path
    #[arg(long, value_name = "FILE")]
    pub raw: Option<String>,

    /// Suppress per-link warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
