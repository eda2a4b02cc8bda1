//! Basic strategy with Omega II index plays.
//!
//! [`recommend`] is a pure function of the hand, the dealer upcard, the true
//! count and what the hand is allowed to do. Pairs are checked first, then soft
//! totals, then hard totals with the count deviations.

use core::fmt;
use core::str::FromStr;

use crate::card::Rank;
use crate::error::ParseActionError;
use crate::hand::{hand_value, is_soft};

/// A playing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the stake and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "HIT",
            Self::Stand => "STAND",
            Self::Double => "DOUBLE",
            Self::Split => "SPLIT",
        })
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else if s.eq_ignore_ascii_case("d") || s.eq_ignore_ascii_case("double") {
            Ok(Self::Double)
        } else if s.eq_ignore_ascii_case("p") || s.eq_ignore_ascii_case("split") {
            Ok(Self::Split)
        } else {
            Err(ParseActionError::InvalidAction)
        }
    }
}

/// Recommends an action for `hand` against `dealer_upcard`.
///
/// `can_double` should be set only for an untouched two-card hand and
/// `can_split` only when splitting is allowed; the pair itself is checked here.
/// An ace upcard counts as 11 throughout, so it never satisfies the "7 or
/// lower" pair rules.
#[must_use]
pub fn recommend(
    hand: &[Rank],
    dealer_upcard: Rank,
    true_count: f64,
    can_double: bool,
    can_split: bool,
) -> Action {
    let dealer = dealer_upcard.value();

    if can_split
        && hand.len() == 2
        && hand[0] == hand[1]
        && should_split(hand[0], dealer, true_count)
    {
        return Action::Split;
    }

    let total = hand_value(hand);
    if is_soft(hand) {
        soft_total(total, dealer, can_double)
    } else {
        hard_total(total, dealer, true_count, can_double)
    }
}

fn should_split(rank: Rank, dealer: u8, true_count: f64) -> bool {
    match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Two | Rank::Three | Rank::Six | Rank::Seven => dealer <= 7,
        Rank::Four => matches!(dealer, 5 | 6),
        Rank::Nine => !matches!(dealer, 7 | 10 | 11),
        Rank::Ten => true_count >= 5.0 && matches!(dealer, 5 | 6),
        // Fives play as a hard 10; paired faces as a hard 20
        Rank::Five | Rank::Jack | Rank::Queen | Rank::King => false,
    }
}

const fn double_or_hit(can_double: bool) -> Action {
    if can_double { Action::Double } else { Action::Hit }
}

fn soft_total(total: u8, dealer: u8, can_double: bool) -> Action {
    match total {
        19.. => Action::Stand,
        18 => match dealer {
            2 | 7 | 8 => Action::Stand,
            3..=6 => double_or_hit(can_double),
            _ => Action::Hit,
        },
        16 | 17 if (3..=6).contains(&dealer) => double_or_hit(can_double),
        14 | 15 if (4..=6).contains(&dealer) => double_or_hit(can_double),
        13 if matches!(dealer, 5 | 6) => double_or_hit(can_double),
        _ => Action::Hit,
    }
}

fn hard_total(total: u8, dealer: u8, true_count: f64, can_double: bool) -> Action {
    match total {
        17.. => Action::Stand,
        16 => {
            if dealer < 7
                || (dealer == 10 && true_count >= 0.0)
                || (dealer == 9 && true_count >= 5.0)
            {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        15 => {
            if dealer < 7 || (dealer == 10 && true_count >= 4.0) {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        13 | 14 => {
            if dealer < 7 {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        12 => match dealer {
            4..=6 => Action::Stand,
            2 if true_count >= 3.0 => Action::Stand,
            3 if true_count >= 2.0 => Action::Stand,
            _ => Action::Hit,
        },
        11 => {
            if can_double && !(dealer == 11 && true_count < 1.0) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        // A ten upcard never reaches the double branch, so the 10-vs-10 index
        // play is subsumed by the upcard bound.
        10 if can_double && dealer <= 9 => Action::Double,
        9 if can_double && (3..=6).contains(&dealer) => Action::Double,
        _ => Action::Hit,
    }
}
