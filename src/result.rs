//! Round result types for settlement.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

use crate::game::SeatRole;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Natural blackjack beating a dealer without one.
    Blackjack,
    /// Player wins (dealer busts or player has the higher total).
    Player,
    /// Dealer has the higher total.
    Dealer,
    /// Equal totals, or blackjack against blackjack.
    Push,
    /// Player busted; loses whatever the dealer holds.
    Bust,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "BLACKJACK",
            Self::Player => "PLAYER",
            Self::Dealer => "DEALER",
            Self::Push => "PUSH",
            Self::Bust => "BUST",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (1 only for the second half of a split).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Amount at risk on this hand; zero for tracked seats.
    pub stake: i64,
    /// Signed change to the bankroll from this hand.
    pub payout: i64,
    /// The player's hand value.
    pub player_value: u8,
    /// Whether the stake was doubled.
    pub doubled: bool,
}

/// Result for a single seat after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// The seat's role.
    pub role: SeatRole,
    /// Results for each hand (two if split).
    pub hands: Vec<HandResult>,
    /// Sum of the hand payouts.
    pub payout: i64,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1 for the first round of the session.
    pub round: u32,
    /// Results for each seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// Bet placed for the main seat, in units.
    pub bet: u32,
    /// Net change applied to the bankroll.
    pub payout: i64,
    /// Bankroll after settlement.
    pub balance: i64,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
