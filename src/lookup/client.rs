//! Remote catalog lookup client.
//!
//! Posts the catalog's GraphQL problemset query with a `searchKeywords`
//! filter carrying either a numeric identifier or a slug, and reads back
//! (identifier, title, difficulty) triples. Blocking HTTP with a fixed
//! per-request timeout; one request at a time, no automatic retry.
//!
//! Failure policy: non-200 status, network errors, and undecodable bodies
//! all yield `None`. A lookup miss is a normal outcome of the resolution
//! chain, never a reason to abort the batch.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{Difficulty, ProblemRecord};

/// The problemset search query. `searchKeywords` does the matching
/// server-side; we cap the page at 50 and match locally from there.
const PROBLEMSET_QUERY: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
    problemsetQuestionList: questionList(
        categorySlug: $categorySlug
        limit: $limit
        skip: $skip
        filters: $filters
    ) {
        questions: data {
            questionFrontendId
            title
            difficulty
        }
    }
}
"#;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(rename = "problemsetQuestionList")]
    problemset_question_list: Option<QuestionList>,
}

#[derive(Debug, Deserialize)]
struct QuestionList {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct Question {
    #[serde(rename = "questionFrontendId")]
    question_frontend_id: String,
    title: String,
    difficulty: String,
}

impl Question {
    fn into_record(self) -> ProblemRecord {
        let difficulty = Difficulty::from_token(&self.difficulty);
        ProblemRecord::new(self.question_frontend_id, self.title, difficulty)
    }
}

/// Blocking lookup client. Construct once per run.
pub struct LookupClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl LookupClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for catalog lookup")?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Look up the full record for a numeric identifier. The search is
    /// keyword-based, so results are scanned for an exact frontend-id match.
    pub fn search_by_id(&self, id: &str) -> Option<ProblemRecord> {
        let questions = self.query(id)?;
        questions
            .into_iter()
            .find(|q| q.question_frontend_id == id)
            .map(Question::into_record)
    }

    /// Back-fill only the difficulty tier for an identifier. Returns `None`
    /// rather than `Some(Unknown)` so callers can distinguish a miss.
    pub fn difficulty_by_id(&self, id: &str) -> Option<Difficulty> {
        let difficulty = self.search_by_id(id)?.difficulty;
        difficulty.is_known().then_some(difficulty)
    }

    /// Look up by slug. Slug searches are already specific, so the first
    /// returned question is taken.
    pub fn search_by_slug(&self, slug: &str) -> Option<ProblemRecord> {
        let questions = self.query(slug)?;
        questions.into_iter().next().map(Question::into_record)
    }

    /// One POST of the problemset query. Any failure along the way - send,
    /// status, body decode, missing data envelope - collapses to `None`.
    fn query(&self, term: &str) -> Option<Vec<Question>> {
        let payload = serde_json::json!({
            "query": PROBLEMSET_QUERY,
            "variables": {
                "categorySlug": "",
                "skip": 0,
                "limit": 50,
                "filters": { "searchKeywords": term },
            },
        });

        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&payload)
            .send()
            .ok()?;
        if !response.status().is_success() {
            return None;
        }

        let decoded: QueryResponse = response.json().ok()?;
        Some(decoded.data?.problemset_question_list?.questions)
    }
}
