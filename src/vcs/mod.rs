//! Version-control queries.
//!
//! One question is asked of git: what is the most recent commit subject
//! that touched a given file? We spawn `git log` rather than binding
//! libgit2 - process spawn cost is irrelevant at this batch size and it
//! works with whatever git the user has.
//!
//! Everything degrades softly: not a repository, git missing, path outside
//! the work tree, empty history - all yield `None`.

use std::path::Path;
use std::process::Command;

/// Most recent commit subject associated with `file`, or `None`.
///
/// Runs `git log -n 1 --pretty=format:%s --follow -- <path>` from `root`.
/// The path is made relative to `root` when possible so renames tracked by
/// `--follow` resolve against the repository work tree.
pub fn latest_commit_subject(root: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).unwrap_or(file);

    let output = Command::new("git")
        .arg("log")
        .arg("-n")
        .arg("1")
        .arg("--pretty=format:%s")
        .arg("--follow")
        .arg("--")
        .arg(rel)
        .current_dir(root)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let subject = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if subject.is_empty() {
        None
    } else {
        Some(subject)
    }
}
