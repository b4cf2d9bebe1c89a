//! Core types for leetsort - the solution-file organizer.
//!
//! Everything here is a plain value type. Key design decisions:
//! - `Difficulty` is a closed enum; free-form tokens from commit messages or
//!   the lookup API are normalized through `from_token`, and anything
//!   unrecognized becomes `Unknown` (which the placement layer rejects)
//!   rather than flowing through as a raw string.
//! - `ProblemRecord` is immutable once resolved and serde-serializable,
//!   since it doubles as the on-disk cache entry format.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Catalog difficulty tier. Determines the destination folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Unrecognized or missing tier. Never placed - rejected at derivation.
    Unknown,
}

impl Difficulty {
    /// Normalize a free-form token ("medium", "MEDIUM", "Medium") into the
    /// closed enum. Unrecognized tokens map to `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    /// Canonical capitalized name, also the destination folder name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        }
    }

    /// True for the three placeable tiers.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved catalog entry: numeric identifier, human-readable title,
/// difficulty tier. Immutable once produced for a given file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Numeric catalog key, e.g. "3027". Kept as a string - it is an
    /// identifier, not a quantity, and filenames embed it verbatim.
    pub id: String,
    /// Human-readable title, whitespace-normalized, no trailing punctuation.
    pub title: String,
    pub difficulty: Difficulty,
}

impl ProblemRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty,
        }
    }
}

/// An intake file under consideration. Transient - lives for one run.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Absolute path in the intake folder.
    pub path: PathBuf,
    /// Filesystem modification time, used by the recency filter and
    /// preserved on the placed copy.
    pub modified: SystemTime,
    /// Raw text content, used by the heuristic classifier and symbol
    /// extraction.
    pub content: String,
}

impl CandidateFile {
    /// File name for display, lossily decoded.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Which strategy produced a resolution. Reported per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Parsed from the latest commit subject.
    CommitMessage,
    /// Matched by the keyword-category table.
    Heuristic,
    /// Found via the remote catalog lookup.
    RemoteLookup,
    /// Served from the persistent resolution cache.
    Cache,
}

impl ResolutionSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::CommitMessage => "commit message",
            Self::Heuristic => "heuristic",
            Self::RemoteLookup => "remote lookup",
            Self::Cache => "cache",
        }
    }
}

/// A resolved record together with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: ProblemRecord,
    pub source: ResolutionSource,
}

/// Per-run counters, printed as the final report.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Intake files that passed the recency filter.
    pub discovered: usize,
    /// Files copied into a difficulty folder.
    pub placed: usize,
    /// Files rejected because their identifier already exists somewhere in
    /// the destination tree.
    pub duplicates: usize,
    /// Files no strategy could resolve.
    pub unresolved: usize,
    /// Files resolved but with an unknown difficulty tier.
    pub unknown_difficulty: usize,
}
