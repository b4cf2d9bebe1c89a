//! The resolution fallback chain.
//!
//! Orchestrates the three strategies over one candidate file, first
//! success wins:
//! 1. Commit message: latest commit subject, parsed by the grammar list.
//!    Difficulty is back-filled from the remote catalog when the subject
//!    carried none (only the difficulty - id and title stay as committed).
//! 2. Heuristic: keyword-category scoring over the file content.
//!    Difficulty is baked into the table; no lookup.
//! 3. Symbol: extract the primary operation name, consult the cache, then
//!    try the remote catalog over its slug variants. The first hit is
//!    cached under the symbol name and the cache is flushed immediately.
//!
//! Partial results never merge across strategies beyond that difficulty
//! back-fill. A file all three strategies miss is skipped for the run.

use std::path::PathBuf;

use crate::cache::{ResolutionCache, NO_KEY};
use crate::classify::{classify, extract_symbol, parse_commit_subject, slug_variants};
use crate::lookup::LookupClient;
use crate::types::{CandidateFile, Difficulty, ProblemRecord, Resolution, ResolutionSource};
use crate::vcs;

pub struct Resolver {
    root: PathBuf,
    lookup: Option<LookupClient>,
    cache: ResolutionCache,
    verbose: bool,
}

impl Resolver {
    /// `lookup` is optional: without it the commit strategy loses only its
    /// difficulty back-fill and the symbol strategy degrades to cache hits.
    pub fn new(
        root: PathBuf,
        lookup: Option<LookupClient>,
        cache: ResolutionCache,
        verbose: bool,
    ) -> Self {
        Self {
            root,
            lookup,
            cache,
            verbose,
        }
    }

    /// Run the fallback chain for one file.
    pub fn resolve(&mut self, file: &CandidateFile) -> Option<Resolution> {
        if let Some(resolution) = self.from_commit(file) {
            return Some(resolution);
        }
        if let Some(resolution) = self.from_heuristic(file) {
            return Some(resolution);
        }
        self.from_symbol(file)
    }

    /// Strategy 1: commit-message parsing with difficulty back-fill.
    fn from_commit(&self, file: &CandidateFile) -> Option<Resolution> {
        let subject = vcs::latest_commit_subject(&self.root, &file.path)?;
        if self.verbose {
            eprintln!("   📝 commit subject: {:?}", subject);
        }

        let parse = parse_commit_subject(&subject)?;

        let difficulty = match parse.difficulty {
            Some(tier) if tier.is_known() => tier,
            // Absent or unrecognized token: ask the catalog, keep the
            // committed id/title either way.
            _ => self
                .lookup
                .as_ref()
                .and_then(|client| client.difficulty_by_id(&parse.id))
                .unwrap_or(Difficulty::Unknown),
        };

        Some(Resolution {
            record: ProblemRecord::new(parse.id, parse.title, difficulty),
            source: ResolutionSource::CommitMessage,
        })
    }

    /// Strategy 2: keyword-category scoring. Pure, no I/O.
    fn from_heuristic(&self, file: &CandidateFile) -> Option<Resolution> {
        classify(&file.content).map(|record| Resolution {
            record,
            source: ResolutionSource::Heuristic,
        })
    }

    /// Strategy 3: symbol extraction, cache consult, remote slug lookup.
    fn from_symbol(&mut self, file: &CandidateFile) -> Option<Resolution> {
        let symbol = extract_symbol(&file.content);
        let key = symbol.as_deref().unwrap_or(NO_KEY);

        if let Some(record) = self.cache.get(key) {
            if self.verbose {
                eprintln!("   💾 cache hit for {:?}", key);
            }
            return Some(Resolution {
                record: record.clone(),
                source: ResolutionSource::Cache,
            });
        }

        // Nothing to slug, or nobody to ask.
        let symbol = symbol?;
        let lookup = self.lookup.as_ref()?;

        for slug in slug_variants(&symbol) {
            if self.verbose {
                eprintln!("   🔍 catalog lookup: {:?}", slug);
            }
            if let Some(record) = lookup.search_by_slug(&slug) {
                self.cache.put(&symbol, record.clone());
                if let Err(err) = self.cache.flush() {
                    eprintln!("⚠️  Cache flush failed: {err:#}");
                }
                return Some(Resolution {
                    record,
                    source: ResolutionSource::RemoteLookup,
                });
            }
        }

        None
    }

    /// Entries currently held in the resolution cache.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::SystemTime;

    const SUDOKU_SRC: &str = r#"
        void solveSudoku(vector<vector<char>>& board) {
            int rowStart = 0;
            int colStart = 0;
        }
    "#;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn candidate(dir: &std::path::Path, name: &str, content: &str) -> CandidateFile {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        CandidateFile {
            path,
            modified: SystemTime::now(),
            content: content.to_string(),
        }
    }

    fn resolver_without_lookup(root: PathBuf) -> Resolver {
        let (cache, _) = ResolutionCache::load(&root.join(".leetsort_cache.json"));
        Resolver::new(root, None, cache, false)
    }

    #[test]
    fn test_heuristic_wins_when_commit_strategy_misses() {
        // A scratch dir is not a git repository, so strategy 1 yields
        // nothing and the heuristic table must resolve the file.
        let root = scratch("leetsort_test_resolver_heuristic");
        let file = candidate(&root, "today.cpp", SUDOKU_SRC);

        let resolution = resolver_without_lookup(root.clone())
            .resolve(&file)
            .unwrap();
        assert_eq!(resolution.source, ResolutionSource::Heuristic);
        assert_eq!(resolution.record.id, "37");
        assert_eq!(resolution.record.difficulty, Difficulty::Hard);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_cache_hit_before_remote_lookup() {
        let root = scratch("leetsort_test_resolver_cache");
        // Content with an extractable symbol but no heuristic triggers
        let src = "int longestMountain(vector<int>& arr) { return 0; }";
        let file = candidate(&root, "today.cpp", src);

        let cache_path = root.join(".leetsort_cache.json");
        let (mut cache, _) = ResolutionCache::load(&cache_path);
        cache.put(
            "longestMountain",
            ProblemRecord::new("845", "Longest Mountain in Array", Difficulty::Medium),
        );

        let mut resolver = Resolver::new(root.clone(), None, cache, false);
        let resolution = resolver.resolve(&file).unwrap();
        assert_eq!(resolution.source, ResolutionSource::Cache);
        assert_eq!(resolution.record.id, "845");

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_all_strategies_miss() {
        let root = scratch("leetsort_test_resolver_miss");
        // No commit history, no heuristic triggers, no extractable symbol
        let file = candidate(&root, "today.cpp", "int main() { return 0; }");

        assert!(resolver_without_lookup(root.clone()).resolve(&file).is_none());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_symbol_without_lookup_degrades_to_none() {
        let root = scratch("leetsort_test_resolver_nolookup");
        let src = "int longestMountain(vector<int>& arr) { return 0; }";
        let file = candidate(&root, "today.cpp", src);

        // Extractable symbol, empty cache, no client: chain exhausts.
        assert!(resolver_without_lookup(root.clone()).resolve(&file).is_none());

        fs::remove_dir_all(&root).unwrap();
    }
}
