#![forbid(unsafe_code)]

pub mod error;
pub mod rounds;
pub mod scorecard;
pub mod source;

pub use error::{RoundError, TriviaError};
pub use rounds::{QuestionView, RoundLoopService, RoundOutcome};
pub use scorecard::Scorecard;
pub use source::{
    DEFAULT_API_URL, FixedQuestionSource, OpenTriviaClient, QUESTIONS_PER_ROUND, QuestionSource,
    QuestionsPayload, QuizProxyClient, TriviaCategory,
};
