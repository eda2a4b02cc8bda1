//! Card ranks and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of copies of each rank in a single deck.
pub const SUITS_PER_DECK: usize = 4;

/// A card rank. Suits carry no information for counting or strategy, so the
/// shoe is tracked by rank alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks in shoe order (A, 2..10, J, Q, K).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Blackjack value with the ace counted high (11).
    ///
    /// This is also the dealer upcard value used by the strategy tables.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Omega II counting weight.
    #[must_use]
    pub const fn omega_ii(self) -> i32 {
        match self {
            Self::Ace | Self::Eight => 0,
            Self::Two | Self::Three | Self::Seven => 1,
            Self::Four | Self::Five | Self::Six => 2,
            Self::Nine => -1,
            Self::Ten | Self::Jack | Self::Queen | Self::King => -2,
        }
    }

    /// Returns whether this rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Short symbol used by observers when reporting a card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Parses an observer-reported card. Accepts `A` or `1` for an ace, `2`
    /// through `10`, and `J`, `Q`, `K` in either case. Surrounding whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rank = match s {
            "A" | "a" | "1" => Self::Ace,
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            _ => return Err(ParseRankError::InvalidRank),
        };
        Ok(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseRankError;

    /// Converts a numeric rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1..=13 => Ok(Self::ALL[rank as usize - 1]),
            _ => Err(ParseRankError::InvalidRank),
        }
    }
}
