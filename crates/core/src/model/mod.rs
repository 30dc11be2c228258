mod question;
mod round;
mod user;

pub use question::{BatchError, Question, QuestionBatch};
pub use round::{RoundResult, RoundTally, TallyError, Winner, decide_winner};
pub use user::{ParseUserError, UserId};
