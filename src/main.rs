//! Cigar name extractor.
//!
//! Fetches r/cigars listings, guesses product names from post titles and
//! bodies, keeps the ones that mention a known brand, and writes them to a
//! JSON file.
//!
//!   1. fetch every listing (failures are skipped)
//!   2. regex + known-brand extraction per post
//!   3. dedup, filter, resolve brand
//!   4. write records (and optionally catalog rows)

mod brands;
mod catalog;
mod error;
mod filter;
mod matcher;
mod output;
mod pipeline;
mod record;
mod settings;
mod source;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use settings::Settings;
use source::HttpListingSource;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::load();
    info!(settings = ?settings, msg = "Starting cigar extraction");

    println!("Cigar Extraction");
    println!("================\n");

    let source = HttpListingSource::new(settings.timeout(), &settings.user_agent)
        .context("Failed to build HTTP client")?;
    let extraction = pipeline::run(&source, &settings.sources);
    let records = &extraction.records;
    let stats = &extraction.stats;

    println!(
        "\nSources: {} ({} failed), posts: {}, candidates: {} ({} unique), records: {}",
        stats.sources,
        stats.failed_sources,
        stats.text_units,
        stats.candidates,
        stats.unique_candidates,
        stats.records
    );

    let output_path = Path::new(&settings.output_path);
    output::write_json(output_path, records)?;

    if records.is_empty() {
        println!("No cigars extracted.");
        println!("Check the network connection and that the listings are reachable.");
        println!("Wrote an empty list to {}", output_path.display());
    } else {
        println!(
            "{} cigars extracted and saved to {}",
            records.len(),
            output_path.display()
        );
        println!("\nSample of extracted cigars:");
        for (i, r) in records.iter().take(settings.preview_limit).enumerate() {
            println!("  {}. {} ({})", i + 1, r.name, r.brand);
        }
    }

    if let Some(ref path) = settings.catalog_path {
        catalog::export_catalog(Path::new(path), records, chrono::Utc::now());
    }

    println!("\nDone.");
    Ok(())
}
