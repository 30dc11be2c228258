use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use trivia_core::model::{Question, QuestionBatch, UserId};

use crate::error::TriviaError;

/// Number of questions requested for each user's round.
pub const QUESTIONS_PER_ROUND: usize = 5;

/// Public trivia provider endpoint.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

//
// ─── CATEGORY MAPPING ──────────────────────────────────────────────────────────
//

/// Upstream category assigned to each user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaCategory {
    GeneralKnowledge,
    Computers,
}

impl TriviaCategory {
    /// Fixed mapping: User 1 plays General Knowledge, User 2 plays Computers.
    #[must_use]
    pub fn for_user(user: UserId) -> Self {
        match user {
            UserId::One => TriviaCategory::GeneralKnowledge,
            UserId::Two => TriviaCategory::Computers,
        }
    }

    /// The provider's numeric category code.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            TriviaCategory::GeneralKnowledge => 9,
            TriviaCategory::Computers => 18,
        }
    }
}

//
// ─── WIRE PAYLOAD ──────────────────────────────────────────────────────────────
//

/// Body shape shared by the provider and this repo's proxy endpoint.
///
/// Questions are relayed verbatim; provider fields beyond the rendered three
/// (such as `response_code`) are ignored on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPayload {
    pub results: Vec<Question>,
}

//
// ─── SOURCE TRAIT ──────────────────────────────────────────────────────────────
//

/// Port for fetching one user's question batch.
///
/// The fetch is awaited to completion; callers consume its success or
/// failure before any session state exists.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the batch for the given user.
    ///
    /// # Errors
    ///
    /// Returns `TriviaError` when the provider is unreachable, responds with
    /// a non-success status, or delivers no questions.
    async fn fetch_batch(&self, user: UserId) -> Result<QuestionBatch, TriviaError>;
}

//
// ─── OPEN TRIVIA CLIENT ────────────────────────────────────────────────────────
//

/// Client for the public trivia provider.
///
/// Stateless across calls: each fetch is one outbound GET with the user's
/// category and the fixed batch size, no retry, no fallback content.
#[derive(Clone)]
pub struct OpenTriviaClient {
    client: Client,
    base_url: String,
}

impl OpenTriviaClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenTriviaClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl QuestionSource for OpenTriviaClient {
    async fn fetch_batch(&self, user: UserId) -> Result<QuestionBatch, TriviaError> {
        let category = TriviaCategory::for_user(user);
        let url = format!(
            "{}?amount={}&category={}",
            self.base_url.trim_end_matches('/'),
            QUESTIONS_PER_ROUND,
            category.code()
        );

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TriviaError::HttpStatus(response.status()));
        }

        let body: QuestionsPayload = response.json().await?;
        Ok(QuestionBatch::new(body.results)?)
    }
}

//
// ─── QUIZ PROXY CLIENT ─────────────────────────────────────────────────────────
//

/// Client for this repo's own `/fetch-questions` endpoint.
///
/// Lets a front-end consume the same proxy the browser pages do, selector
/// string and all.
#[derive(Clone)]
pub struct QuizProxyClient {
    client: Client,
    base_url: String,
}

impl QuizProxyClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for QuizProxyClient {
    async fn fetch_batch(&self, user: UserId) -> Result<QuestionBatch, TriviaError> {
        let url = format!(
            "{}/fetch-questions?user={}",
            self.base_url.trim_end_matches('/'),
            user.number()
        );

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TriviaError::HttpStatus(response.status()));
        }

        let body: QuestionsPayload = response.json().await?;
        Ok(QuestionBatch::new(body.results)?)
    }
}

//
// ─── FIXED SOURCE ──────────────────────────────────────────────────────────────
//

/// In-memory source serving a fixed batch per user.
///
/// Backs tests and offline runs; a user with no assigned batch gets the
/// same empty-batch error a dry upstream would produce.
#[derive(Debug, Clone, Default)]
pub struct FixedQuestionSource {
    batches: [Vec<Question>; 2],
}

impl FixedQuestionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the batch served to one user.
    #[must_use]
    pub fn with_batch(mut self, user: UserId, questions: Vec<Question>) -> Self {
        self.batches[user.index()] = questions;
        self
    }
}

#[async_trait]
impl QuestionSource for FixedQuestionSource {
    async fn fetch_batch(&self, user: UserId) -> Result<QuestionBatch, TriviaError> {
        Ok(QuestionBatch::new(self.batches[user.index()].clone())?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::BatchError;

    // Shape of a real provider response, trimmed to two questions.
    const PROVIDER_BODY: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "category": "General Knowledge",
                "type": "multiple",
                "difficulty": "easy",
                "question": "What is the capital of France?",
                "correct_answer": "Paris",
                "incorrect_answers": ["Lyon", "Marseille", "Lille"]
            },
            {
                "category": "General Knowledge",
                "type": "boolean",
                "difficulty": "easy",
                "question": "The sky is green.",
                "correct_answer": "False",
                "incorrect_answers": ["True"]
            }
        ]
    }"#;

    #[test]
    fn category_mapping_is_fixed_per_user() {
        assert_eq!(
            TriviaCategory::for_user(UserId::One),
            TriviaCategory::GeneralKnowledge
        );
        assert_eq!(TriviaCategory::for_user(UserId::Two), TriviaCategory::Computers);
        assert_eq!(TriviaCategory::GeneralKnowledge.code(), 9);
        assert_eq!(TriviaCategory::Computers.code(), 18);
    }

    #[test]
    fn provider_payload_deserializes_ignoring_extra_fields() {
        let payload: QuestionsPayload = serde_json::from_str(PROVIDER_BODY).unwrap();
        assert_eq!(payload.results.len(), 2);

        let first = &payload.results[0];
        assert_eq!(first.prompt(), "What is the capital of France?");
        assert_eq!(first.correct_answer(), "Paris");
        assert_eq!(first.incorrect_answers().len(), 3);
    }

    #[test]
    fn relayed_payload_keeps_wire_names() {
        let payload: QuestionsPayload = serde_json::from_str(PROVIDER_BODY).unwrap();
        let relayed = serde_json::to_value(&payload).unwrap();

        let first = &relayed["results"][0];
        assert_eq!(first["question"], "What is the capital of France?");
        assert_eq!(first["correct_answer"], "Paris");
        assert_eq!(first["incorrect_answers"][0], "Lyon");
    }

    #[tokio::test]
    async fn fixed_source_serves_assigned_batch() {
        let source = FixedQuestionSource::new().with_batch(
            UserId::One,
            vec![Question::new("q", "a", vec!["b".to_string()])],
        );

        let batch = source.fetch_batch(UserId::One).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.get(0).unwrap().prompt(), "q");
    }

    #[tokio::test]
    async fn fixed_source_errors_for_unassigned_user() {
        let source = FixedQuestionSource::new().with_batch(
            UserId::One,
            vec![Question::new("q", "a", vec!["b".to_string()])],
        );

        let err = source.fetch_batch(UserId::Two).await.unwrap_err();
        assert!(matches!(err, TriviaError::Batch(BatchError::Empty)));
    }
}
