//! Heuristic content classifier.
//!
//! Scores source text against the keyword-category table: a category's
//! score is the number of its distinct triggers present (case-insensitive
//! substring match). The category with the strictly highest score wins;
//! ties go to the earlier-declared category; zero matches everywhere means
//! no result. The winner's first record is emitted verbatim - difficulty is
//! baked into the table, so no remote lookup is needed on this path.
//!
//! Pure and deterministic: identical text always yields the identical
//! record, independent of call order or any cache state.

use crate::classify::table::{Category, CATEGORIES};
use crate::types::ProblemRecord;

/// Classify source text against the built-in table.
pub fn classify(text: &str) -> Option<ProblemRecord> {
    classify_with(text, CATEGORIES)
}

/// Classify against an explicit table. Split out so tests (and any future
/// user-supplied tables) can inject their own categories.
pub fn classify_with(text: &str, categories: &[Category]) -> Option<ProblemRecord> {
    let haystack = text.to_lowercase();

    let mut best: Option<(usize, &Category)> = None;
    for category in categories {
        let score = category
            .triggers
            .iter()
            .filter(|trigger| haystack.contains(**trigger))
            .count();
        if score == 0 {
            continue;
        }
        // Strictly-greater keeps the earlier-declared category on ties.
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, category));
        }
    }

    let (_, winner) = best?;
    winner
        .records
        .first()
        .map(|r| ProblemRecord::new(r.id, r.title, r.difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::table::CategoryRecord;
    use crate::types::Difficulty;

    const SUDOKU_SRC: &str = r#"
        bool isValid(char k, vector<vector<char>>& board, int i, int j) {
            int rowStart = (i / 3) * 3;
            int colStart = (j / 3) * 3;
            for (int ii = 0; ii < 9; ii++) {
                if (board[ii][j] == k) return false;
            }
            return true;
        }
        void solveSudoku(vector<vector<char>>& board) { solve(board); }
    "#;

    #[test]
    fn test_classify_sudoku_solution() {
        let record = classify(SUDOKU_SRC).unwrap();
        assert_eq!(record.id, "37");
        assert_eq!(record.title, "Sudoku Solver");
        assert_eq!(record.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let first = classify(SUDOKU_SRC);
        let second = classify(SUDOKU_SRC);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("int main() { return 0; }"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_distinct_triggers_counted_once() {
        // "vowel" appearing many times still counts as one trigger, so a
        // two-trigger category beats a repeated single-trigger one.
        let table: &[Category] = &[
            Category {
                name: "repeat",
                triggers: &["vowel"],
                records: &[CategoryRecord {
                    id: "1",
                    title: "Repeat",
                    difficulty: Difficulty::Easy,
                }],
            },
            Category {
                name: "pair",
                triggers: &["vowel", "positions"],
                records: &[CategoryRecord {
                    id: "2",
                    title: "Pair",
                    difficulty: Difficulty::Medium,
                }],
            },
        ];
        let text = "vowel vowel vowel positions";
        let record = classify_with(text, table).unwrap();
        assert_eq!(record.id, "2");
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let table: &[Category] = &[
            Category {
                name: "first",
                triggers: &["alpha"],
                records: &[CategoryRecord {
                    id: "10",
                    title: "First",
                    difficulty: Difficulty::Easy,
                }],
            },
            Category {
                name: "second",
                triggers: &["beta"],
                records: &[CategoryRecord {
                    id: "20",
                    title: "Second",
                    difficulty: Difficulty::Easy,
                }],
            },
        ];
        let record = classify_with("alpha beta", table).unwrap();
        assert_eq!(record.id, "10");
    }

    #[test]
    fn test_case_insensitive_triggers() {
        let record = classify("string SortVowels(string s)").unwrap();
        assert_eq!(record.id, "2785");
    }
}
