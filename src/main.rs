//! # linkpack CLI
//!
//! Command-line interface for the linkpack library. Runs the pipeline
//! offline against a JSON snapshot capture.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use linkpack::cli::Args;
use linkpack::export::{write_raw_dump, write_to_format};
use linkpack::link::split_links;
use linkpack::retrieve::retrieve_batch;
use linkpack::snapshot::SnapshotFetcher;
use linkpack::{LinkpackError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("🔗 linkpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if let Some(ref input) = args.input {
        println!("📂 Links:    {}", input);
    }
    println!("📸 Snapshot: {}", args.snapshot);
    println!("💾 Output:   {}", args.output);
    println!("📄 Format:   {}", args.format);
    println!();

    // Collect links: file first, then inline flags, preserving order.
    let links = collect_links(&args)?;
    if links.is_empty() {
        return Err(LinkpackError::invalid_input(
            "no links provided (pass a links file and/or --link)",
        ));
    }
    println!("⏳ Processing {} links...", links.len());

    let mut fetcher = SnapshotFetcher::from_path(&args.snapshot)?;
    let fetch_start = Instant::now();
    let report = retrieve_batch(&links, &mut fetcher);
    let fetch_time = fetch_start.elapsed();

    if !args.quiet {
        for warning in &report.warnings {
            eprintln!("⚠️  {}", warning);
        }
    }
    println!(
        "   Retrieved {} of {} ({:.2}s)",
        report.len(),
        links.len(),
        fetch_time.as_secs_f64()
    );

    println!("💾 Writing {}...", args.format);
    write_to_format(&report.records, &args.output, args.format)?;

    if let Some(ref raw_path) = args.raw {
        println!("📝 Writing raw dump...");
        write_raw_dump(&report.raw, raw_path)?;
    }

    println!();
    println!("✅ Done! Output saved to {}", args.output);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Links:     {}", links.len());
    println!("   Records:   {}", report.len());
    println!("   Warnings:  {}", report.warnings.len());
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Gathers links from the input file (if any) and the inline flags.
fn collect_links(args: &Args) -> Result<Vec<String>> {
    let mut links = Vec::new();
    if let Some(ref input) = args.input {
        let content = fs::read_to_string(input)?;
        links.extend(split_links(&content));
    }
    for inline in &args.link {
        links.extend(split_links(inline));
    }
    Ok(links)
}
