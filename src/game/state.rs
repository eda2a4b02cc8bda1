//! Round state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// No round in progress; the next round's bet is open.
    Betting,
    /// Two cards to every seat, then the dealer upcard.
    DealInitial,
    /// Seats act in order.
    SeatPlay,
    /// Each half of a freshly split pair is waiting for its second card.
    Split,
    /// Waiting for the dealer's hole card.
    DealerHoleCard,
    /// Dealer draws to 17.
    DealerPlay,
    /// Hands are final and waiting to be settled.
    Settlement,
    /// The round has been settled.
    Complete,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnPosition {
    /// Index into the round's seats.
    pub seat: usize,
    /// Index into the seat's hands (1 only for the second half of a split).
    pub hand: usize,
}

/// Who the next observed card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// A seat, by index.
    Seat(usize),
    /// The dealer.
    Dealer,
}
