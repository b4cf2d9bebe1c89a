//! Commit-message grammars.
//!
//! Parses a single commit subject line into a candidate
//! (identifier, title, difficulty) triple. Instead of one large regex
//! alternation, each grammar is its own pure function with its own anchored
//! pattern; they are tried in a fixed order and the first match wins. This
//! keeps grammar precedence explicit rather than an artifact of
//! backtracking order.
//!
//! Grammars, in order:
//! 1. `daily`    - "Daily Question - 03:09:2025 3027. Title (Medium)"
//! 2. `dotted`   - "3027. Title (Medium)"
//! 3. `solved`   - "Solved: 3027 - Title"
//! 4. `prefixed` - "LeetCode 3027: Title"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Difficulty;

/// A successful commit-subject parse. The difficulty is `None` when the
/// subject carried no difficulty token at all; an unrecognized token parses
/// to `Some(Difficulty::Unknown)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitParse {
    pub id: String,
    pub title: String,
    pub difficulty: Option<Difficulty>,
}

/// Regex patterns for the commit grammars.
/// Cached as statics to avoid recompilation on every parse.
mod grammar_patterns {
    use super::*;

    /// "Daily Question ... 3027. Title (Difficulty)?"
    pub static DAILY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)daily question.*?(\d+)\.\s*(.+?)(?:\s*\((\w+)\))?$")
            .expect("Invalid daily grammar regex")
    });

    /// "3027. Title (Difficulty)" - difficulty required, unanchored.
    pub static DOTTED: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(\d+)\.\s*(.+?)\s*\((\w+)\)").expect("Invalid dotted grammar regex")
    });

    /// "Solved: 3027 - Title (Difficulty)?"
    pub static SOLVED: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)solved:?\s*(\d+)[\s\-]+(.+?)(?:\s*\((\w+)\))?$")
            .expect("Invalid solved grammar regex")
    });

    /// "LeetCode 3027: Title (Difficulty)?"
    pub static PREFIXED: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)leetcode\s*(\d+):\s*(.+?)(?:\s*\((\w+)\))?$")
            .expect("Invalid prefixed grammar regex")
    });
}

type GrammarFn = fn(&str) -> Option<CommitParse>;

/// The grammars in precedence order. First `Some` wins.
pub const GRAMMARS: &[(&str, GrammarFn)] = &[
    ("daily", parse_daily),
    ("dotted", parse_dotted),
    ("solved", parse_solved),
    ("prefixed", parse_prefixed),
];

/// Try every grammar against a commit subject, in order.
pub fn parse_commit_subject(subject: &str) -> Option<CommitParse> {
    let subject = subject.trim();
    if subject.is_empty() {
        return None;
    }
    GRAMMARS.iter().find_map(|(_, grammar)| grammar(subject))
}

fn parse_daily(subject: &str) -> Option<CommitParse> {
    capture(&grammar_patterns::DAILY, subject)
}

fn parse_dotted(subject: &str) -> Option<CommitParse> {
    capture(&grammar_patterns::DOTTED, subject)
}

fn parse_solved(subject: &str) -> Option<CommitParse> {
    capture(&grammar_patterns::SOLVED, subject)
}

fn parse_prefixed(subject: &str) -> Option<CommitParse> {
    capture(&grammar_patterns::PREFIXED, subject)
}

/// Shared capture-group plumbing: every grammar captures
/// (id, title, optional difficulty token) in the same group positions.
fn capture(pattern: &Regex, subject: &str) -> Option<CommitParse> {
    let caps = pattern.captures(subject)?;
    let id = caps.get(1)?.as_str().to_string();
    let title = normalize_title(caps.get(2)?.as_str());
    if title.is_empty() {
        return None;
    }
    let difficulty = caps.get(3).map(|m| Difficulty::from_token(m.as_str()));
    Some(CommitParse {
        id,
        title,
        difficulty,
    })
}

/// Collapse runs of whitespace and strip trailing `. -` punctuation.
fn normalize_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(|c| matches!(c, '.' | ' ' | '-'))
        .to_string()
}
