//! Keyword-category table for the heuristic classifier.
//!
//! This is maintained data, not an algorithm: each category pairs a set of
//! case-insensitive substring triggers with an ordered list of catalog
//! records. Extending coverage means adding rows here; the scoring code in
//! `heuristic` never changes. Declaration order matters - earlier categories
//! win score ties.
//!
//! Triggers must be lowercase (the scorer lowercases the source text once
//! and does plain substring matching against these).

use crate::types::Difficulty;

/// One catalog entry a category can resolve to.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: Difficulty,
}

/// A named category: substring triggers plus the records it stands for.
/// The first record is the one emitted when the category wins.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub records: &'static [CategoryRecord],
}

/// The built-in category table, seeded from the solutions this repository
/// has accumulated. Ordered by how distinctive the triggers are.
pub static CATEGORIES: &[Category] = &[
    Category {
        name: "sudoku",
        triggers: &["sudoku", "rowstart", "colstart", "board[ii]"],
        records: &[CategoryRecord {
            id: "37",
            title: "Sudoku Solver",
            difficulty: Difficulty::Hard,
        }],
    },
    Category {
        name: "vowel-sort",
        triggers: &["sortvowels", "vowel", "priority_queue<char"],
        records: &[CategoryRecord {
            id: "2785",
            title: "Sort Vowels in a String",
            difficulty: Difficulty::Medium,
        }],
    },
    Category {
        name: "pass-ratio",
        triggers: &["maxaverageratio", "extrastudents", "pass / total"],
        records: &[CategoryRecord {
            id: "1792",
            title: "Maximum Average Pass Ratio",
            difficulty: Difficulty::Medium,
        }],
    },
    Category {
        name: "point-pairs",
        triggers: &["numberofpairs", "points[i][0]", "max_b"],
        records: &[CategoryRecord {
            id: "3027",
            title: "Find the Number of Ways to Place People II",
            difficulty: Difficulty::Hard,
        }],
    },
    Category {
        name: "two-sum",
        triggers: &["twosum", "target - nums", "unordered_map<int, int>"],
        records: &[CategoryRecord {
            id: "1",
            title: "Two Sum",
            difficulty: Difficulty::Easy,
        }],
    },
    Category {
        name: "no-zero-integers",
        triggers: &["getnozerointegers", "no-zero", "nozero"],
        records: &[CategoryRecord {
            id: "1317",
            title: "Convert Integer to the Sum of Two No-Zero Integers",
            difficulty: Difficulty::Easy,
        }],
    },
];
