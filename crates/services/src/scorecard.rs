use trivia_core::model::{RoundResult, UserId};

/// One user's final standing, rendered as a standalone page.
///
/// A settled round yields one scorecard per user; each becomes its own
/// small HTML document named after the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorecard {
    user: UserId,
    score: i64,
}

impl Scorecard {
    #[must_use]
    pub fn new(user: UserId, score: i64) -> Self {
        Self { user, score }
    }

    /// Both users' scorecards for a settled round.
    #[must_use]
    pub fn from_result(result: &RoundResult) -> [Scorecard; 2] {
        UserId::ALL.map(|user| Scorecard::new(user, result.score_of(user)))
    }

    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// File name the card is written under, `user1_scorecard.html` style.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("user{}_scorecard.html", self.user.number())
    }

    /// Render the card as a complete HTML document.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
               <title>{user} Scorecard</title>\n\
             </head>\n\
             <body>\n\
               <h1>{user} Scorecard</h1>\n\
               <p>Score: {score}</p>\n\
             </body>\n\
             </html>\n",
            user = self.user,
            score = self.score
        )
    }
}

//
// ─── Tests ─────────────────────────────────────────────────────────────────────
//
