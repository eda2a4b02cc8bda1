//! Seats and their hands.

use crate::hand::Hand;

/// What the engine does for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatRole {
    /// The player being advised: receives recommendations and settles against
    /// the bankroll.
    Main,
    /// Another player whose cards are only recorded.
    Tracked,
}

/// The hands held by a seat. A seat splits at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatHands {
    /// The seat's original hand.
    Single(Hand),
    /// Two sibling hands formed from a pair.
    Split(Hand, Hand),
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    role: SeatRole,
    hands: SeatHands,
}

impl Seat {
    /// Creates a seat holding an empty hand.
    #[must_use]
    pub const fn new(role: SeatRole) -> Self {
        Self {
            role,
            hands: SeatHands::Single(Hand::new()),
        }
    }

    /// The seat's role.
    #[must_use]
    pub const fn role(&self) -> SeatRole {
        self.role
    }

    /// Returns whether this is the main seat.
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.role == SeatRole::Main
    }

    /// The seat's hands.
    #[must_use]
    pub const fn hands(&self) -> &SeatHands {
        &self.hands
    }

    /// Returns whether the seat has split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self.hands, SeatHands::Split(..))
    }

    /// Number of hands (1 or 2).
    #[must_use]
    pub const fn hand_count(&self) -> usize {
        match self.hands {
            SeatHands::Single(_) => 1,
            SeatHands::Split(..) => 2,
        }
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub const fn hand(&self, index: usize) -> Option<&Hand> {
        match (&self.hands, index) {
            (SeatHands::Single(hand) | SeatHands::Split(hand, _), 0)
            | (SeatHands::Split(_, hand), 1) => Some(hand),
            _ => None,
        }
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        match (&mut self.hands, index) {
            (SeatHands::Single(hand) | SeatHands::Split(hand, _), 0)
            | (SeatHands::Split(_, hand), 1) => Some(hand),
            _ => None,
        }
    }

    /// Iterates over the seat's hands in play order.
    pub fn iter_hands(&self) -> impl Iterator<Item = &Hand> {
        (0..self.hand_count()).filter_map(|index| self.hand(index))
    }

    /// Splits an untouched pair into two one-card hands.
    ///
    /// Returns `false` and leaves the seat untouched if it already split or does
    /// not hold a pair.
    pub(crate) fn split(&mut self) -> bool {
        let SeatHands::Single(hand) = &mut self.hands else {
            return false;
        };
        if !hand.is_pair() {
            return false;
        }
        let (Some(second), Some(&first)) = (hand.take_split_card(), hand.cards().first()) else {
            return false;
        };
        self.hands = SeatHands::Split(Hand::from_split(first), Hand::from_split(second));
        true
    }
}
