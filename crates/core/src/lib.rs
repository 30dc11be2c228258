#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{
    BatchError, ParseUserError, Question, QuestionBatch, RoundResult, RoundTally, TallyError,
    UserId, Winner,
};
pub use session::{
    AnswerRecord, AnswerVerdict, QuizPhase, QuizProgress, QuizSession, SessionError, SessionStep,
};
