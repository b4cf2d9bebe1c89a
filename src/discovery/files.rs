//! Intake-folder discovery with a recency window.
//!
//! Scans the flat intake folder for solution files:
//! - Extension must match the configured solution language
//! - Modification time must fall within the trailing recency window,
//!   unless the bypass flag is set (the window bounds remote-lookup
//!   volume; it is a policy knob, not a correctness requirement)
//! - Unreadable files and files with no readable mtime are skipped
//! - Results are sorted by path for deterministic processing order
//!
//! The walk uses the `ignore` crate, depth-limited to the intake folder
//! itself and strictly sequential - the whole pipeline is single-threaded.

use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use ignore::WalkBuilder;

use crate::types::CandidateFile;

/// Find candidate files in the intake folder.
///
/// `now` is the invocation instant the recency window trails from; it is a
/// parameter (rather than read inside) so the filter is testable.
pub fn find_intake_files(
    intake: &Path,
    extension: &str,
    window: Duration,
    include_all: bool,
    now: SystemTime,
) -> Result<Vec<CandidateFile>> {
    if !intake.is_dir() {
        anyhow::bail!("Intake folder does not exist: {}", intake.display());
    }

    let walker = WalkBuilder::new(intake)
        .max_depth(Some(1)) // The intake folder is flat
        .hidden(true) // Skip dotfiles (editor droppings, the cache file)
        .git_ignore(true)
        .require_git(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let Ok(entry) = entry else { continue };
        let path = entry.path();

        if !path.is_file() || !has_extension(path, extension) {
            continue;
        }

        // No readable mtime means the recency filter can't run; skip the
        // file rather than guess.
        let Some(modified) = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
        else {
            continue;
        };

        if !include_all && !within_window(modified, now, window) {
            continue;
        }

        // Binary or otherwise unreadable content: skip silently, matching
        // the soft-failure policy everywhere else.
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };

        files.push(CandidateFile {
            path: path.to_path_buf(),
            modified,
            content,
        });
    }

    // Sort for reproducible processing order across runs.
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// True when `modified` is no older than `window` before `now`. Files with
/// mtimes in the future (clock skew) are treated as recent.
fn within_window(modified: SystemTime, now: SystemTime, window: Duration) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age <= window,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_extension_filter() -> Result<()> {
        let dir = scratch("leetsort_test_discovery_ext");
        fs::write(dir.join("a.cpp"), "int main() {}")?;
        fs::write(dir.join("b.CPP"), "int main() {}")?;
        fs::write(dir.join("notes.md"), "# notes")?;
        fs::write(dir.join("noext"), "")?;

        let files = find_intake_files(&dir, "cpp", DAY, false, SystemTime::now())?;
        let names: Vec<String> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a.cpp", "b.CPP"]);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_recency_window() -> Result<()> {
        let dir = scratch("leetsort_test_discovery_recency");
        let file = dir.join("old.cpp");
        fs::write(&file, "int main() {}")?;

        // Pretend the run happens 25 hours after the file was written:
        // excluded by a default run, included with the bypass flag.
        let now = SystemTime::now() + Duration::from_secs(25 * 60 * 60);

        let default_run = find_intake_files(&dir, "cpp", DAY, false, now)?;
        assert!(default_run.is_empty());

        let bypass_run = find_intake_files(&dir, "cpp", DAY, true, now)?;
        assert_eq!(bypass_run.len(), 1);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_fresh_file_included_by_default() -> Result<()> {
        let dir = scratch("leetsort_test_discovery_fresh");
        fs::write(dir.join("fresh.cpp"), "int main() {}")?;

        let files = find_intake_files(&dir, "cpp", DAY, false, SystemTime::now())?;
        assert_eq!(files.len(), 1);
        assert!(files[0].content.contains("main"));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_subdirectories_not_descended() -> Result<()> {
        let dir = scratch("leetsort_test_discovery_flat");
        fs::create_dir_all(dir.join("nested"))?;
        fs::write(dir.join("nested").join("deep.cpp"), "int main() {}")?;
        fs::write(dir.join("top.cpp"), "int main() {}")?;

        let files = find_intake_files(&dir, "cpp", DAY, true, SystemTime::now())?;
        let names: Vec<String> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["top.cpp"]);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_missing_intake_folder_errors() {
        let ghost = std::env::temp_dir().join("leetsort_test_discovery_ghost");
        let _ = fs::remove_dir_all(&ghost);
        assert!(find_intake_files(&ghost, "cpp", DAY, false, SystemTime::now()).is_err());
    }

    #[test]
    fn test_sorted_output() -> Result<()> {
        let dir = scratch("leetsort_test_discovery_sorted");
        for name in ["c.cpp", "a.cpp", "b.cpp"] {
            fs::write(dir.join(name), "int main() {}")?;
        }

        let files = find_intake_files(&dir, "cpp", DAY, true, SystemTime::now())?;
        let names: Vec<String> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a.cpp", "b.cpp", "c.cpp"]);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
