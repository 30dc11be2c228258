use std::fmt;
use thiserror::Error;

use crate::model::user::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised by round bookkeeping guards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("{0} already reported a finished session this round")]
    AlreadyRecorded(UserId),
    #[error("both users must finish before the round can be settled")]
    Incomplete,
}

//
// ─── WINNER ────────────────────────────────────────────────────────────────────
//

/// Outcome of comparing the two final scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    User(UserId),
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::User(user) => write!(f, "{user} wins!"),
            Winner::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Strictly greater score wins; equal scores are a tie.
#[must_use]
pub fn decide_winner(score_one: i64, score_two: i64) -> Winner {
    if score_one > score_two {
        Winner::User(UserId::One)
    } else if score_two > score_one {
        Winner::User(UserId::Two)
    } else {
        Winner::Tie
    }
}

//
// ─── ROUND RESULT ──────────────────────────────────────────────────────────────
//

/// Final standing of one round.
///
/// Derived, never stored: it exists only once both sessions have reported
/// their scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    scores: [i64; 2],
    winner: Winner,
}

impl RoundResult {
    #[must_use]
    pub fn new(score_one: i64, score_two: i64) -> Self {
        Self {
            scores: [score_one, score_two],
            winner: decide_winner(score_one, score_two),
        }
    }

    #[must_use]
    pub fn score_of(&self, user: UserId) -> i64 {
        self.scores[user.index()]
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        self.winner
    }
}

//
// ─── ROUND TALLY ───────────────────────────────────────────────────────────────
//

/// Cross-session score slots for the round in progress.
///
/// Each user's finished session reports exactly once per round. Settling
/// consumes the slots and returns them to their initial state, so the next
/// round starts from zero scores and cleared flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTally {
    scores: [i64; 2],
    finished: [bool; 2],
}

impl RoundTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished session's score into the tally and mark the user done.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::AlreadyRecorded` if the user already reported
    /// this round.
    pub fn record(&mut self, user: UserId, score: i64) -> Result<(), TallyError> {
        if self.finished[user.index()] {
            return Err(TallyError::AlreadyRecorded(user));
        }
        self.scores[user.index()] = score;
        self.finished[user.index()] = true;
        Ok(())
    }

    #[must_use]
    pub fn is_finished(&self, user: UserId) -> bool {
        self.finished[user.index()]
    }

    #[must_use]
    pub fn both_finished(&self) -> bool {
        self.finished.iter().all(|&done| done)
    }

    #[must_use]
    pub fn score(&self, user: UserId) -> i64 {
        self.scores[user.index()]
    }

    /// Compute the round result and reset the tally for the next round.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Incomplete` unless both users have finished.
    pub fn settle(&mut self) -> Result<RoundResult, TallyError> {
        if !self.both_finished() {
            return Err(TallyError::Incomplete);
        }

        let result = RoundResult::new(self.scores[0], self.scores[1]);
        *self = Self::default();
        Ok(result)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn flip(winner: Winner) -> Winner {
        match winner {
            Winner::User(user) => Winner::User(user.other()),
            Winner::Tie => Winner::Tie,
        }
    }

    #[test]
    fn strictly_greater_score_wins() {
        assert_eq!(decide_winner(13, 10), Winner::User(UserId::One));
        assert_eq!(decide_winner(10, 13), Winner::User(UserId::Two));
        assert_eq!(decide_winner(-2, -7), Winner::User(UserId::One));
    }

    #[test]
    fn equal_scores_tie() {
        assert_eq!(decide_winner(8, 8), Winner::Tie);
        assert_eq!(decide_winner(0, 0), Winner::Tie);
        assert_eq!(decide_winner(-4, -4), Winner::Tie);
    }

    #[test]
    fn winner_is_symmetric_under_user_flip() {
        for (a, b) in [(13, 10), (10, 13), (8, 8), (0, -2), (-5, 25)] {
            assert_eq!(decide_winner(a, b), flip(decide_winner(b, a)));
        }
    }

    #[test]
    fn winner_announcements_name_the_user() {
        assert_eq!(Winner::User(UserId::One).to_string(), "User 1 wins!");
        assert_eq!(Winner::User(UserId::Two).to_string(), "User 2 wins!");
        assert_eq!(Winner::Tie.to_string(), "It's a tie!");
    }

    #[test]
    fn tally_records_each_user_once() {
        let mut tally = RoundTally::new();
        tally.record(UserId::One, 13).unwrap();
        assert!(tally.is_finished(UserId::One));
        assert!(!tally.both_finished());

        let err = tally.record(UserId::One, 99).unwrap_err();
        assert_eq!(err, TallyError::AlreadyRecorded(UserId::One));
        assert_eq!(tally.score(UserId::One), 13);
    }

    #[test]
    fn settle_requires_both_users() {
        let mut tally = RoundTally::new();
        tally.record(UserId::Two, 10).unwrap();
        assert_eq!(tally.settle().unwrap_err(), TallyError::Incomplete);
    }

    #[test]
    fn settle_computes_result_and_resets() {
        let mut tally = RoundTally::new();
        tally.record(UserId::One, 13).unwrap();
        tally.record(UserId::Two, 10).unwrap();

        let result = tally.settle().unwrap();
        assert_eq!(result.winner(), Winner::User(UserId::One));
        assert_eq!(result.score_of(UserId::One), 13);
        assert_eq!(result.score_of(UserId::Two), 10);

        // Initial round state again: zero scores, cleared flags.
        assert_eq!(tally, RoundTally::new());
        assert!(!tally.is_finished(UserId::One));
        assert!(!tally.is_finished(UserId::Two));
        assert_eq!(tally.score(UserId::One), 0);
        assert_eq!(tally.score(UserId::Two), 0);
    }

    #[test]
    fn next_round_behaves_like_the_first() {
        let mut tally = RoundTally::new();
        tally.record(UserId::One, 8).unwrap();
        tally.record(UserId::Two, 8).unwrap();
        assert_eq!(tally.settle().unwrap().winner(), Winner::Tie);

        tally.record(UserId::One, 3).unwrap();
        tally.record(UserId::Two, 20).unwrap();
        let result = tally.settle().unwrap();
        assert_eq!(result.winner(), Winner::User(UserId::Two));
    }
}
