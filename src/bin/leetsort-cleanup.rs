//! leetsort-cleanup - remove duplicate organized solutions.
//!
//! Separate entry point for the one destructive operation: scan the
//! Easy/Medium/Hard folders, group files by leading identifier, and delete
//! all but the shortest-named copy per identifier. The organize pipeline
//! never runs this; it is a deliberate maintenance action.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use leetsort::config::{Config, RepoLayout};
use leetsort::placement::cleanup_duplicates;

/// Remove duplicate solutions from the organized folders
///
/// Groups files by their leading numeric identifier across all three
/// difficulty folders and keeps exactly one per identifier - the one with
/// the shortest filename. Deletion is permanent.
#[derive(Parser, Debug)]
#[command(name = "leetsort-cleanup")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Repository root containing the difficulty folders
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Narrate each duplicate group before deleting
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.root.canonicalize().map_err(|e| {
        anyhow::anyhow!("Failed to resolve root path '{}': {}", cli.root.display(), e)
    })?;

    let config = Config::load(&root);
    let layout = RepoLayout::new(&root, &config);

    println!("🧹 Scanning for duplicates in {}", root.display());

    let report = cleanup_duplicates(&layout, cli.verbose)?;

    println!(
        "✅ {} duplicate group(s), {} file(s) removed",
        report.duplicate_groups, report.removed
    );
    if report.failed_removals > 0 {
        println!("⚠️  {} file(s) could not be removed", report.failed_removals);
    }

    Ok(())
}
