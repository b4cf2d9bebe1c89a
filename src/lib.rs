//! leetsort - difficulty-partitioned organizer for solution files.
//!
//! Classifies newly added solution files against an online practice
//! catalog and copies each one into an Easy/Medium/Hard folder under a
//! normalized `{id}_{title}.{ext}` name.
//!
//! # Architecture
//!
//! ```text
//! Discovery → Resolver → Target-Path Deriver → Placer
//!     ↓          ↓               ↓                ↓
//!  intake    commit msg /    tier folder +    non-destructive
//!  folder    heuristics /    global dup        copy
//!            catalog+cache   check
//! ```
//!
//! The resolver tries three strategies in order, first success wins:
//! commit-message parsing, keyword-category heuristics, and a remote
//! catalog lookup keyed by the extracted symbol name (with a persistent
//! JSON cache in front of it). Every collaborator failure is soft - a
//! file that cannot be resolved is reported and skipped, never fatal.

pub mod cache;
pub mod classify;
pub mod config;
pub mod discovery;
pub mod lookup;
pub mod placement;
pub mod resolve;
pub mod types;
pub mod vcs;

// Re-export core types
pub use types::{
    CandidateFile, Difficulty, ProblemRecord, Resolution, ResolutionSource, RunSummary,
};

pub use cache::{CacheWarning, ResolutionCache};
pub use config::{Config, RepoLayout};
pub use resolve::Resolver;
