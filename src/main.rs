use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::MultiProgress;
use std::time::Instant;

mod classify;
mod cli;
mod error;
mod utils;

use classify::{Bucket, BucketProgress, BucketTotals, ClassifyConfig, ClassifyEngine};
use cli::Args;
use utils::{create_bucket_bar, format_duration, verbose_println};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();

    // Print banner
    println!("{}", style("Aspect Sorter").bold().blue());
    println!(
        "{}",
        style("Copies images into horizontal/, vertical/ and square/ by aspect ratio").dim()
    );
    println!();

    let config = ClassifyConfig {
        root: args.path.clone(),
        approximate: args.approximate,
        verbose: args.verbose,
    };

    if config.verbose {
        println!("{}", style("Configuration:").bold());
        println!("  Root: {}", config.root.display());
        println!("  Approximate mode: {}", config.approximate);
        println!();
    }

    let engine = ClassifyEngine::new(config)?;

    verbose_println(args.verbose, &format!("scanning {}", args.path.display()));
    let files = engine
        .discover_candidates()
        .context("Failed to list the root directory")?;

    if files.is_empty() {
        println!("{}", style("No images found in the root directory").red());
        return Ok(());
    }

    println!(
        "Found {} image(s), counting categories...",
        style(files.len()).bold()
    );
    let counts = engine.count_categories(&files)?;
    let totals = BucketTotals::from_counts(&counts);

    // One progress stream per physical bucket, sized by the count pass.
    let multi_progress = MultiProgress::new();
    let bucket_bar = |bucket: Bucket| {
        multi_progress.add(create_bucket_bar(totals.get(bucket), bucket.dir_name()))
    };
    let progress = BucketProgress::new(
        bucket_bar(Bucket::Horizontal),
        bucket_bar(Bucket::Vertical),
        bucket_bar(Bucket::Square),
    );

    let summary = engine.place_all(&files, &progress)?;
    progress.finish();
    println!();

    // Print results summary
    println!("{}", style("Results Summary:").bold().green());
    for bucket in Bucket::ALL {
        let tally = summary.tally(bucket);
        println!(
            "  {:<12} {} copied, {} already present",
            format!("{}:", bucket.dir_name()),
            style(tally.copied).bold().green(),
            style(tally.skipped).yellow()
        );
    }
    println!();
    println!(
        "  {} file(s) processed in {}",
        style(summary.files).bold(),
        style(format_duration(start_time.elapsed())).bold()
    );

    Ok(())
}
