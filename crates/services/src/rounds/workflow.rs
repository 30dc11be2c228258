use std::fmt;
use std::sync::Arc;

use trivia_core::model::{RoundResult, RoundTally, UserId};
use trivia_core::session::QuizSession;

use crate::error::RoundError;
use crate::source::QuestionSource;

/// What the round looks like after one user reports a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One session is in; the round waits on the other user.
    Waiting { pending: UserId },
    /// Both sessions are in; the round is decided.
    Settled(RoundResult),
}

/// Orchestrates a round: one session per user, folded into a shared tally.
///
/// Sessions are independent once started; the service only sees them again
/// when they are complete. Settling hands back a `RoundResult` and leaves
/// the tally ready for the next round.
pub struct RoundLoopService {
    source: Arc<dyn QuestionSource>,
    tally: RoundTally,
}

impl RoundLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            tally: RoundTally::new(),
        }
    }

    /// Fetch the user's batch and open a session over it.
    ///
    /// The fetch runs to completion first; no session exists until the
    /// batch has arrived intact.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Trivia` when the batch cannot be fetched or
    /// arrives empty.
    pub async fn start_session(&self, user: UserId) -> Result<QuizSession, RoundError> {
        let batch = self.source.fetch_batch(user).await?;
        Ok(QuizSession::new(user, batch))
    }

    /// Fold a completed session's score into the round.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::SessionActive` if the session still has
    /// questions left, and `RoundError::Tally` if this user already
    /// reported a finished session this round.
    pub fn finish_session(&mut self, session: &QuizSession) -> Result<RoundOutcome, RoundError> {
        if !session.is_complete() {
            return Err(RoundError::SessionActive);
        }

        let user = session.user();
        self.tally.record(user, session.score())?;

        if self.tally.both_finished() {
            let result = self.tally.settle()?;
            Ok(RoundOutcome::Settled(result))
        } else {
            Ok(RoundOutcome::Waiting {
                pending: user.other(),
            })
        }
    }

    #[must_use]
    pub fn tally(&self) -> &RoundTally {
        &self.tally
    }
}

impl fmt::Debug for RoundLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundLoopService")
            .field("tally", &self.tally)
            .finish_non_exhaustive()
    }
}

//
// ─── Tests ─────────────────────────────────────────────────────────────────────
//
