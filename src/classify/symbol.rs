//! Candidate symbol extraction and slug derivation.
//!
//! The last-resort resolution strategy needs a name to look up: the
//! primary exposed operation of a solution file (`numberOfPairs`,
//! `maxAverageRatio`), not its comparison or traversal helpers (`comp`,
//! `gain`, `isValid`). Extraction is regex-based over definition sites:
//! a lowercase-first identifier preceded by type tokens and followed by an
//! opening paren, at the start of a line.
//!
//! Selection rule: drop stoplisted generic names; if any multi-word
//! candidate (camelCase or snake_case) survives, single-word names are
//! dropped too; the longest remaining name wins, ties broken
//! lexicographically.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Generic names that never identify a problem: entry points, helpers,
/// traversal and comparison routines. Compared lowercase.
const STOPLIST: &[&str] = &[
    "main", "solution", "solve", "solver", "helper", "comp", "compare", "cmp", "check",
    "isvalid", "valid", "gain", "dfs", "bfs", "init", "build", "run", "calc", "count",
    "swap", "merge", "partition", "backtrack", "recurse", "traverse", "visit",
];

/// Symbol extraction patterns.
mod symbol_patterns {
    use super::*;

    /// A definition site: line start, one or more type-ish tokens, then a
    /// lowercase-first identifier and an opening paren. Matches
    /// `int numberOfPairs(...)` and `static bool comp(...)`, skips
    /// control-flow lines like `if (...)` and bare calls like `sort(...)`.
    pub static DEFINITION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^\s*(?:[A-Za-z_][\w:<>,*&\[\]]*\s+)+([a-z][A-Za-z0-9_]*)\s*\(")
            .expect("Invalid definition regex")
    });
}

/// Extract the best candidate symbol name from source text, if any.
pub fn extract_symbol(text: &str) -> Option<String> {
    // BTreeSet dedups repeated definitions and fixes iteration order.
    let mut candidates: BTreeSet<&str> = BTreeSet::new();
    for caps in symbol_patterns::DEFINITION.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            let name = name.as_str();
            if !STOPLIST.contains(&name.to_ascii_lowercase().as_str()) {
                candidates.insert(name);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    // Multi-word names look like primary operations; helpers tend to be
    // single words. Only fall back to single-word names when nothing
    // multi-word survived the stoplist.
    let has_multi_word = candidates.iter().any(|name| is_multi_word(name));
    let mut remaining: Vec<&str> = candidates
        .into_iter()
        .filter(|name| !has_multi_word || is_multi_word(name))
        .collect();

    // Longest first; lexicographic tiebreak (BTreeSet order is already
    // lexicographic, and the sort is stable).
    remaining.sort_by(|a, b| b.len().cmp(&a.len()));
    remaining.first().map(|name| name.to_string())
}

/// camelCase (interior uppercase) or snake_case (interior underscore).
fn is_multi_word(name: &str) -> bool {
    name.chars().skip(1).any(|c| c.is_ascii_uppercase()) || name.contains('_')
}

/// URL/key-safe lookup variants of a symbol name, most specific first:
/// word-split kebab-case, then the flat lowercase form. Deduplicated,
/// order-preserving.
pub fn slug_variants(name: &str) -> Vec<String> {
    let kebab = to_kebab(name);
    let flat = name.to_lowercase().replace('_', "");

    let mut variants = Vec::new();
    for variant in [kebab, flat] {
        if !variant.is_empty() && !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}

/// "numberOfPairs" -> "number-of-pairs"; "max_profit" -> "max-profit".
fn to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }
    out.trim_matches('-').to_string()
}
