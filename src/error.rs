//! Error types for engine operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur when parsing an observer-reported card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRankError {
    /// Input is not one of A/1, 2-10, J, Q, K.
    #[error("invalid card: expected A/1, 2-10, J, Q or K")]
    InvalidRank,
}

/// Errors that can occur when parsing an observer-reported action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// Input is not one of hit, stand, double, split.
    #[error("invalid action: expected h/hit, s/stand, d/double or p/split")]
    InvalidAction,
}

/// Errors that can occur while tracking the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe must hold at least one deck.
    #[error("a shoe needs at least one deck")]
    InvalidDeckCount,
    /// The requested rank has no cards left in the shoe.
    #[error("no more {0}s in the shoe")]
    OutOfCards(Rank),
    /// Only the most recently dealt card can be returned to the shoe.
    #[error("only the most recently dealt card can be undone")]
    InvalidUndo,
}

/// Errors that can occur when undoing dealt cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    /// There is nothing to undo.
    #[error("nothing to undo")]
    EmptyHistory,
    /// Bulk undo size is outside `1..=available`.
    #[error("can undo between 1 and {available} cards, {requested} requested")]
    InvalidCount {
        /// Number of cards requested.
        requested: usize,
        /// Largest request currently allowed.
        available: usize,
    },
    /// The shoe rejected the reversal.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur when starting or finishing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round phase for this operation.
    #[error("invalid round phase for this operation")]
    InvalidState,
    /// No seats were supplied.
    #[error("a round needs at least one seat")]
    NoSeats,
    /// Exactly one seat must be the main seat.
    #[error("exactly one seat must be the main seat")]
    MainSeatCount,
    /// The bankroll is exhausted.
    #[error("out of money")]
    OutOfMoney,
}

/// Errors that can occur while submitting cards and actions during a round.
///
/// Everything except [`ActionError::Shoe`] is an illegal action: the request
/// arrived outside the window in which it is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress or the round is in the wrong phase.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// Seat index is out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// The round is waiting on a different seat or on the dealer.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// A card for the current hand must be submitted first.
    #[error("a card must be submitted before the next action")]
    CardPending,
    /// Hand is already complete.
    #[error("hand is not active")]
    HandNotActive,
    /// Doubling requires an untouched two-card hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Splitting requires an untouched pair of equal ranks.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Split hands cannot be split again.
    #[error("resplitting a split hand is not supported")]
    ResplitUnsupported,
    /// Insurance is only offered against a dealer ace, once per round.
    #[error("insurance is not on offer")]
    InsuranceNotOffered,
    /// The shoe rejected the card, normally [`ShoeError::OutOfCards`].
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
