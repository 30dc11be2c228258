mod view;
mod workflow;

// Public API of the round subsystem.
pub use crate::error::RoundError;
pub use view::QuestionView;
pub use workflow::{RoundLoopService, RoundOutcome};
