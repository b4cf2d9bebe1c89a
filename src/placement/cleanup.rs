//! Duplicate cleanup sweep over the organized folders.
//!
//! Groups files across the three destination folders by their leading
//! numeric identifier and deletes all but one copy per identifier. The
//! keeper is the file with the shortest name, ties broken
//! lexicographically - the shortest name is the one the organizer itself
//! would have produced.
//!
//! Destructive and irreversible. Never invoked by the organize pipeline;
//! it has its own binary entry point.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RepoLayout;

/// Leading numeric identifier of an organized filename: `3027_...`.
static ID_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)_").expect("Invalid id-prefix regex"));

/// What the sweep did.
#[derive(Debug, Clone, Default)]
pub struct CleanupReport {
    /// Identifiers that had more than one file.
    pub duplicate_groups: usize,
    /// Files deleted.
    pub removed: usize,
    /// Files that could not be deleted (reported, not fatal).
    pub failed_removals: usize,
}

/// Remove duplicate solutions, keeping one file per identifier.
///
/// Removal failures are counted and reported but do not stop the sweep -
/// the next run will see the leftover and try again.
pub fn cleanup_duplicates(layout: &RepoLayout, verbose: bool) -> Result<CleanupReport> {
    // BTreeMap so groups are visited in identifier order.
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

    for dir in layout.destination_dirs() {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(caps) = ID_PREFIX.captures(&name) {
                let id = caps[1].to_string();
                groups.entry(id).or_default().push(path);
            }
        }
    }

    let mut report = CleanupReport::default();

    for (id, mut files) in groups {
        if files.len() < 2 {
            continue;
        }
        report.duplicate_groups += 1;

        // Shortest name first, lexicographic tiebreak. The keeper is the
        // head; everything after it goes.
        files.sort_by(|a, b| {
            let name_a = a.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            let name_b = b.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            name_a.len().cmp(&name_b.len()).then(name_a.cmp(&name_b))
        });

        if verbose {
            eprintln!(
                "🧹 #{}: {} copies, keeping {}",
                id,
                files.len(),
                files[0].display()
            );
        }

        for path in &files[1..] {
            match std::fs::remove_file(path) {
                Ok(()) => report.removed += 1,
                Err(err) => {
                    report.failed_removals += 1;
                    eprintln!("⚠️  Could not remove {}: {}", path.display(), err);
                }
            }
        }
    }

    Ok(report)
}
