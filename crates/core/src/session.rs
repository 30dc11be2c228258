use std::fmt;
use thiserror::Error;

use crate::model::{Question, QuestionBatch, UserId};

/// Points awarded for answering the displayed question correctly.
pub const CORRECT_AWARD: i64 = 5;
/// Points deducted for answering incorrectly. Skipping costs nothing.
pub const INCORRECT_PENALTY: i64 = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors emitted by quiz session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("question already answered; advance to the next one")]
    AlreadyAnswered,
    #[error("session already completed")]
    Completed,
}

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where the session currently stands.
///
/// `AwaitingAnswer` and `Answered` refer to the question at the current
/// index; `Complete` is terminal and one-way within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer,
    Answered,
    Complete,
}

/// Verdict for a single answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
}

impl AnswerVerdict {
    /// Score delta this verdict applies.
    #[must_use]
    pub fn points(self) -> i64 {
        match self {
            AnswerVerdict::Correct => CORRECT_AWARD,
            AnswerVerdict::Incorrect => -INCORRECT_PENALTY,
        }
    }
}

/// Captures the outcome of answering one question within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub index: usize,
    pub selected: String,
    pub verdict: AnswerVerdict,
}

/// Where an advance landed: the next question, or the end of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Next,
    Complete,
}

/// Aggregated view of session progress, useful for front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session for one user.
///
/// Owns its question batch and steps through it sequentially. Scoring is a
/// side effect of answering the currently displayed question only, at most
/// once per question; advancing moves the index forward by exactly one and
/// completes the session when it would pass the last question.
pub struct QuizSession {
    user: UserId,
    batch: QuestionBatch,
    current: usize,
    score: i64,
    phase: QuizPhase,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Start a session over a freshly fetched batch.
    ///
    /// The batch is never empty (`QuestionBatch::new` guards that), so the
    /// session always begins awaiting an answer for question 0.
    #[must_use]
    pub fn new(user: UserId, batch: QuestionBatch) -> Self {
        Self {
            user,
            batch,
            current: 0,
            score: 0,
            phase: QuizPhase::AwaitingAnswer,
            answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Index of the question currently displayed, up to the batch length
    /// once the session is complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.batch.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions not yet advanced past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.batch.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.batch.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    /// Apply an option-selected event to the displayed question.
    ///
    /// Correct selections add `CORRECT_AWARD`, anything else subtracts
    /// `INCORRECT_PENALTY`; either way the question locks until the next
    /// advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` if the question was answered
    /// before (the score is untouched) and `SessionError::Completed` once
    /// the session is over.
    pub fn answer(&mut self, selected: &str) -> Result<AnswerVerdict, SessionError> {
        if self.phase == QuizPhase::Answered {
            return Err(SessionError::AlreadyAnswered);
        }
        let Some(question) = self.current_question() else {
            return Err(SessionError::Completed);
        };

        let verdict = if question.is_correct(selected) {
            AnswerVerdict::Correct
        } else {
            AnswerVerdict::Incorrect
        };

        self.score += verdict.points();
        self.answers.push(AnswerRecord {
            index: self.current,
            selected: selected.to_string(),
            verdict,
        });
        self.phase = QuizPhase::Answered;
        Ok(verdict)
    }

    /// Move past the displayed question, answered or not.
    ///
    /// Skipping an unanswered question forfeits its points with no penalty.
    /// The index only ever moves forward by one; reaching the end of the
    /// batch completes the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn advance(&mut self) -> Result<SessionStep, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.current += 1;
        if self.current >= self.batch.len() {
            self.phase = QuizPhase::Complete;
            Ok(SessionStep::Complete)
        } else {
            self.phase = QuizPhase::AwaitingAnswer;
            Ok(SessionStep::Next)
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("user", &self.user)
            .field("batch_len", &self.batch.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
