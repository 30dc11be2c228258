use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the two quiz participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserId {
    One,
    Two,
}

impl UserId {
    /// Both participants, in play order.
    pub const ALL: [UserId; 2] = [UserId::One, UserId::Two];

    /// Slot of this participant in a per-user pair (0 or 1).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            UserId::One => 0,
            UserId::Two => 1,
        }
    }

    /// Numeric selector used on the wire ("1" or "2").
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            UserId::One => 1,
            UserId::Two => 2,
        }
    }

    /// The opposing participant.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            UserId::One => UserId::Two,
            UserId::Two => UserId::One,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {}", self.number())
    }
}

// ─── FromStr Implementation ────────────────────────────────────────────────────

/// Error type for parsing a user selector from a string.
///
/// The selector must be exactly "1" or "2".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid user selector: {raw:?}")]
pub struct ParseUserError {
    raw: String,
}

impl FromStr for UserId {
    type Err = ParseUserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(UserId::One),
            "2" => Ok(UserId::Two),
            _ => Err(ParseUserError { raw: s.to_string() }),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
