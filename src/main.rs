//! leetsort CLI - organize solution files by difficulty.
//!
//! This is the command-line entry point for the organize pipeline:
//!
//! 1. Discovery: recent solution files in the intake folder
//! 2. Resolution: commit message → heuristics → catalog lookup (cached)
//! 3. Derivation: tier folder + normalized filename, global dup check
//! 4. Placement: non-destructive copy preserving metadata
//!
//! Per-file failures are reported and counted, never fatal. The only hard
//! failure is being unable to create the four working folders.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use clap::Parser;

use leetsort::cache::ResolutionCache;
use leetsort::config::{Config, RepoLayout};
use leetsort::discovery::find_intake_files;
use leetsort::lookup::LookupClient;
use leetsort::placement::{self, DeriveRejection};
use leetsort::resolve::Resolver;
use leetsort::types::RunSummary;

/// Organize solution files into difficulty folders
///
/// leetsort scans the intake folder for recently added solutions, works
/// out which catalog problem each one solves, and copies it into the
/// Easy/Medium/Hard folder under a normalized name. Problem identity
/// comes from commit messages, content heuristics, or a catalog lookup,
/// in that order.
///
/// Examples:
///   leetsort                    # Organize recent files in the cwd repo
///   leetsort ~/leetcode         # Organize a specific repository
///   leetsort --all --verbose    # Everything in intake, with narration
#[derive(Parser, Debug)]
#[command(name = "leetsort")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Repository root containing the intake and difficulty folders
    ///
    /// Defaults to the current directory.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Process every intake file, ignoring the recency window
    ///
    /// By default only files modified within the trailing window
    /// (24 hours unless configured otherwise) are considered, which
    /// bounds how many catalog lookups a run can issue.
    #[arg(long)]
    pub all: bool,

    /// Verbose output
    ///
    /// Narrates each stage: discovery counts, per-file strategy hits,
    /// cache and lookup activity.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the final per-tier distribution
    #[arg(long)]
    pub stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Per-file failures are part of the report, not an exit code.
    run(&cli).map(|_| ())
}

/// Execute the organize pipeline.
fn run(cli: &Cli) -> Result<RunSummary> {
    let root = cli.root.canonicalize().map_err(|e| {
        anyhow::anyhow!("Failed to resolve root path '{}': {}", cli.root.display(), e)
    })?;

    let config = Config::load(&root);

    if cli.verbose {
        eprintln!("🗂️  leetsort v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Repository: {}", root.display());
        eprintln!("{}", config.display_summary());
    }

    // The one unguardable precondition: the four working folders.
    let layout = RepoLayout::new(&root, &config);
    layout.ensure_directories()?;

    // Load the resolution cache; corruption degrades to empty but is said
    // out loud rather than swallowed.
    let (cache, cache_warning) = ResolutionCache::load(&root.join(&config.cache_file));
    if let Some(warning) = cache_warning {
        eprintln!("⚠️  {warning}");
    }

    // A client that cannot even be built leaves the run degraded but alive:
    // commit difficulty back-fill and slug lookups simply miss.
    let lookup = match LookupClient::new(
        &config.lookup_endpoint,
        Duration::from_secs(config.lookup_timeout_secs),
    ) {
        Ok(client) => Some(client),
        Err(err) => {
            eprintln!("⚠️  Catalog lookup unavailable: {err:#}");
            None
        }
    };

    let window = Duration::from_secs(config.recency_window_hours * 60 * 60);
    let files = find_intake_files(
        &layout.intake,
        &config.extension,
        window,
        cli.all,
        SystemTime::now(),
    )?;

    let mut summary = RunSummary {
        discovered: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        println!(
            "No .{} files to organize in {}",
            config.extension,
            layout.intake.display()
        );
        return Ok(summary);
    }

    if cli.verbose {
        eprintln!("✓ Found {} intake file(s)", files.len());
    }

    let mut resolver = Resolver::new(root.clone(), lookup, cache, cli.verbose);

    for file in &files {
        if cli.verbose {
            eprintln!("📄 {}", file.display_name());
        }

        let Some(resolution) = resolver.resolve(file) else {
            summary.unresolved += 1;
            println!("❌ {}: could not determine problem", file.display_name());
            continue;
        };

        let record = &resolution.record;
        match placement::derive_target(&layout, record, &config.extension) {
            Ok(target) => match placement::place_file(file, &target) {
                Ok(true) => {
                    summary.placed += 1;
                    let placed_name = target
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    println!(
                        "✅ {} → {}/{} (via {})",
                        file.display_name(),
                        record.difficulty,
                        placed_name,
                        resolution.source.label()
                    );
                }
                Ok(false) => {
                    summary.duplicates += 1;
                    println!(
                        "⚠️  {}: target already exists, skipped",
                        file.display_name()
                    );
                }
                Err(err) => {
                    summary.unresolved += 1;
                    println!("❌ {}: copy failed: {err:#}", file.display_name());
                }
            },
            Err(DeriveRejection::UnknownDifficulty) => {
                summary.unknown_difficulty += 1;
                println!(
                    "❌ {}: #{} {:?} has no recognized difficulty tier",
                    file.display_name(),
                    record.id,
                    record.title
                );
            }
            Err(DeriveRejection::Duplicate(existing)) => {
                summary.duplicates += 1;
                println!(
                    "⚠️  {}: #{} already organized as {}",
                    file.display_name(),
                    record.id,
                    existing.display()
                );
            }
        }
    }

    println!(
        "\n🎉 Done: {} placed, {} duplicate(s), {} unresolved, {} without difficulty ({} discovered)",
        summary.placed,
        summary.duplicates,
        summary.unresolved,
        summary.unknown_difficulty,
        summary.discovered
    );

    if cli.stats {
        print_distribution(&layout, &config.extension);
    }

    if cli.verbose {
        eprintln!("💾 Cache entries: {}", resolver.cache_len());
    }

    Ok(summary)
}

/// Count organized files per tier.
fn print_distribution(layout: &RepoLayout, extension: &str) {
    let count = |dir: &std::path::Path| -> usize {
        std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .flatten()
                    .filter(|e| {
                        e.path().is_file()
                            && e.path()
                                .extension()
                                .and_then(|x| x.to_str())
                                .map(|x| x.eq_ignore_ascii_case(extension))
                                .unwrap_or(false)
                    })
                    .count()
            })
            .unwrap_or(0)
    };

    let easy = count(&layout.easy);
    let medium = count(&layout.medium);
    let hard = count(&layout.hard);

    println!("\n📊 Distribution:");
    println!("   🟢 Easy:   {easy}");
    println!("   🟡 Medium: {medium}");
    println!("   🔴 Hard:   {hard}");
    println!("   📈 Total:  {}", easy + medium + hard);
}
