use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while assembling a question batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("question batch is empty")]
    Empty,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single trivia question as delivered by the upstream provider.
///
/// Wire field names follow the provider (`question`, `correct_answer`,
/// `incorrect_answers`) so payloads can be relayed verbatim. Immutable once
/// fetched; extra provider fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Wrong options, in upstream order (typically three).
    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Whether the selected option text matches the known answer exactly.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// Number of selectable options (incorrect answers plus the correct one).
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

//
// ─── QUESTION BATCH ────────────────────────────────────────────────────────────
//

/// The ordered set of questions for one user's quiz round.
///
/// Owned exclusively by one session. Construction rejects the zero-length
/// case, so session completion is always an explicit transition instead of
/// an index running off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBatch {
    questions: Vec<Question>,
}

impl QuestionBatch {
    /// Create a batch from fetched questions.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, BatchError> {
        if questions.is_empty() {
            return Err(BatchError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question() -> Question {
        Question::new(
            "What does CPU stand for?",
            "Central Processing Unit",
            vec![
                "Central Process Unit".to_string(),
                "Computer Personal Unit".to_string(),
                "Central Processor Unit".to_string(),
            ],
        )
    }

    #[test]
    fn correctness_is_exact_string_equality() {
        let question = build_question();
        assert!(question.is_correct("Central Processing Unit"));
        assert!(!question.is_correct("central processing unit"));
        assert!(!question.is_correct("Central Processing Unit "));
    }

    #[test]
    fn option_count_includes_correct_answer() {
        assert_eq!(build_question().option_count(), 4);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = QuestionBatch::new(Vec::new()).unwrap_err();
        assert_eq!(err, BatchError::Empty);
    }

    #[test]
    fn batch_preserves_question_order() {
        let questions = vec![
            Question::new("q1", "a1", vec!["b1".to_string()]),
            Question::new("q2", "a2", vec!["b2".to_string()]),
        ];
        let batch = QuestionBatch::new(questions).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(0).unwrap().prompt(), "q1");
        assert_eq!(batch.get(1).unwrap().prompt(), "q2");
        assert!(batch.get(2).is_none());
    }
}
