//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Evaluates a run of ranks into `(total, soft)`.
///
/// Aces start at 11 and drop to 1 one at a time while the total is over 21.
/// The hand is soft when it stays at or under 21 with an ace still at 11.
///
/// Totals above 255 saturate at `u8::MAX`.
fn evaluate(cards: &[Rank]) -> (u8, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for rank in cards {
        if rank.is_ace() {
            aces += 1;
        }
        value += usize::from(rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Total of a run of ranks with aces adjusted.
#[must_use]
pub fn hand_value(cards: &[Rank]) -> u8 {
    evaluate(cards).0
}

/// Returns whether a run of ranks is soft (an ace still counted as 11).
#[must_use]
pub fn is_soft(cards: &[Rank]) -> bool {
    evaluate(cards).1
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still take actions.
    Active,
    /// Player has stood (or doubled and received their card).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack.
    Blackjack,
}

/// A player's hand, either the seat's only hand or one half of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
    status: HandStatus,
    /// Whether the stake on this hand was doubled.
    doubled: bool,
    /// Whether this hand is from a split.
    from_split: bool,
    /// Whether the hand has taken any action (hit, double).
    acted: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            doubled: false,
            from_split: false,
            acted: false,
        }
    }

    /// Creates a hand from one card of a split pair.
    #[must_use]
    pub fn from_split(rank: Rank) -> Self {
        Self {
            cards: alloc::vec![rank],
            status: HandStatus::Active,
            doubled: false,
            from_split: true,
            acted: false,
        }
    }

    /// Adds a card to the hand, updating bust and blackjack status.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);

        let value = self.value();

        if value > 21 {
            self.status = HandStatus::Bust;
        }
        // Any untouched two-card 21 is a blackjack, split halves included
        else if self.cards.len() == 2 && value == 21 && !self.acted {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand is still in play.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Records that the hand has acted; it can no longer double or split.
    pub const fn mark_acted(&mut self) {
        self.acted = true;
    }

    /// Returns whether the hand has taken a hit or double.
    #[must_use]
    pub const fn has_acted(&self) -> bool {
        self.acted
    }

    /// Marks the stake on this hand as doubled.
    pub const fn mark_doubled(&mut self) {
        self.doubled = true;
        self.acted = true;
    }

    /// Returns whether the stake on this hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.status == HandStatus::Blackjack
    }

    /// Returns whether the hand may double: exactly two cards and no prior action.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.is_active() && self.cards.len() == 2 && !self.acted
    }

    /// Returns whether the hand holds an untouched pair of equal ranks.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1] && !self.acted
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Rank> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand: the upcard, then the hole card, then any draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Rank>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Returns whether the hole card has been observed.
    #[must_use]
    pub fn has_hole_card(&self) -> bool {
        self.cards.len() >= 2
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether house rules make the dealer draw another card.
    ///
    /// The dealer draws below 17 and, when `hits_soft_17` is set, on soft 17.
    #[must_use]
    pub fn must_hit(&self, hits_soft_17: bool) -> bool {
        let (value, soft) = evaluate(&self.cards);
        value < 17 || (value == 17 && soft && hits_soft_17)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
