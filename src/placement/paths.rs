//! Target-path derivation and duplicate detection.
//!
//! Maps a resolved record to `{tier-folder}/{id}_{sanitized-title}.{ext}`.
//! Two rejection paths, both soft:
//! - `Unknown` difficulty has no folder
//! - the identifier already exists somewhere in the destination tree
//!   (uniqueness is global across all three tiers, not per-folder)

use std::path::{Path, PathBuf};

use crate::config::RepoLayout;
use crate::types::ProblemRecord;

/// Maximum length of the sanitized title portion of a filename.
const MAX_TITLE_LEN: usize = 50;

/// Why a record could not be given a target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveRejection {
    /// Difficulty tier is `Unknown` - no destination folder exists for it.
    UnknownDifficulty,
    /// Another file already carries this identifier.
    Duplicate(PathBuf),
}

/// Compute the destination path for a record, enforcing the global
/// identifier-uniqueness invariant before accepting it.
pub fn derive_target(
    layout: &RepoLayout,
    record: &ProblemRecord,
    extension: &str,
) -> Result<PathBuf, DeriveRejection> {
    let dir = layout
        .dir_for(record.difficulty)
        .ok_or(DeriveRejection::UnknownDifficulty)?;

    if let Some(existing) = find_existing(layout, &record.id) {
        return Err(DeriveRejection::Duplicate(existing));
    }

    let filename = format!(
        "{}_{}.{}",
        record.id,
        sanitize_title(&record.title),
        extension
    );
    Ok(dir.join(filename))
}

/// Scan every destination folder for a file whose name starts with
/// `{id}_`. The check is tree-wide on purpose: one identifier, one file,
/// regardless of which tier it was filed under.
pub fn find_existing(layout: &RepoLayout, id: &str) -> Option<PathBuf> {
    let prefix = format!("{id}_");
    for dir in layout.destination_dirs() {
        if let Some(path) = find_with_prefix(dir, &prefix) {
            return Some(path);
        }
    }
    None
}

fn find_with_prefix(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(prefix) && entry.path().is_file() {
            return Some(entry.path());
        }
    }
    None
}

/// Normalize a title into a filename-safe segment: keep only alphanumerics,
/// underscores, hyphens, and spaces; spaces become underscores; truncate to
/// 50 characters; trim trailing underscores.
pub fn sanitize_title(title: &str) -> String {
    let mut cleaned: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    if cleaned.len() > MAX_TITLE_LEN {
        cleaned.truncate(MAX_TITLE_LEN);
    }
    cleaned.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::Difficulty;
    use std::fs;

    fn scratch_layout(name: &str) -> RepoLayout {
        let root = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&root);
        let layout = RepoLayout::new(&root, &Config::default());
        layout.ensure_directories().unwrap();
        layout
    }

    #[test]
    fn test_sanitize_title_basic() {
        assert_eq!(
            sanitize_title("Find the Number of Ways to Place People II"),
            "Find_the_Number_of_Ways_to_Place_People_II"
        );
    }

    #[test]
    fn test_sanitize_title_strips_specials() {
        assert_eq!(sanitize_title("What's 2 + 2?"), "Whats_2__2");
        assert_eq!(sanitize_title("a/b\\c.d"), "abcd");
        assert_eq!(sanitize_title("No-Zero Integers"), "No-Zero_Integers");
    }

    #[test]
    fn test_sanitize_title_truncates_and_trims() {
        let long = "Word ".repeat(20); // 100 chars of "Word_"
        let sanitized = sanitize_title(&long);
        assert!(sanitized.len() <= 50);
        assert!(!sanitized.ends_with('_'));
    }

    #[test]
    fn test_sanitize_never_emits_separators() {
        let hostile = "../../etc/passwd (Hard)";
        let sanitized = sanitize_title(hostile);
        assert!(!sanitized.contains('/'));
        assert!(!sanitized.contains('.'));
    }

    #[test]
    fn test_derive_target_shape() {
        let layout = scratch_layout("leetsort_test_paths_shape");
        let record = ProblemRecord::new(
            "3027",
            "Find the Number of Ways to Place People II",
            Difficulty::Medium,
        );

        let target = derive_target(&layout, &record, "cpp").unwrap();
        assert_eq!(target.parent().unwrap(), layout.medium.as_path());
        assert_eq!(
            target.file_name().unwrap().to_string_lossy(),
            "3027_Find_the_Number_of_Ways_to_Place_People_II.cpp"
        );

        fs::remove_dir_all(&layout.root).unwrap();
    }

    #[test]
    fn test_derive_target_rejects_unknown_difficulty() {
        let layout = scratch_layout("leetsort_test_paths_unknown");
        let record = ProblemRecord::new("7", "Mystery", Difficulty::Unknown);

        assert_eq!(
            derive_target(&layout, &record, "cpp"),
            Err(DeriveRejection::UnknownDifficulty)
        );

        fs::remove_dir_all(&layout.root).unwrap();
    }

    #[test]
    fn test_duplicate_detection_is_tree_wide() {
        let layout = scratch_layout("leetsort_test_paths_dup");
        // Same identifier filed (even wrongly) under a different tier
        let existing = layout.easy.join("37_Sudoku_Solver.cpp");
        fs::write(&existing, "// solution").unwrap();

        let record = ProblemRecord::new("37", "Sudoku Solver", Difficulty::Hard);
        assert_eq!(
            derive_target(&layout, &record, "cpp"),
            Err(DeriveRejection::Duplicate(existing))
        );

        // A different identifier sharing a prefix is not a duplicate
        let record = ProblemRecord::new("3", "Longest Substring", Difficulty::Medium);
        assert!(derive_target(&layout, &record, "cpp").is_ok());

        fs::remove_dir_all(&layout.root).unwrap();
    }

    #[test]
    fn test_filename_matches_contract() {
        let layout = scratch_layout("leetsort_test_paths_contract");
        let record = ProblemRecord::new("2785", "Sort Vowels in a String!", Difficulty::Medium);

        let target = derive_target(&layout, &record, "cpp").unwrap();
        let name = target.file_name().unwrap().to_string_lossy().into_owned();
        let pattern = regex::Regex::new(r"^[0-9]+_[A-Za-z0-9_\-]{0,50}\.cpp$").unwrap();
        assert!(pattern.is_match(&name), "unexpected filename: {name}");

        fs::remove_dir_all(&layout.root).unwrap();
    }
}
