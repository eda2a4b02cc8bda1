//! Omega II running and true count.

use core::fmt;

use crate::card::Rank;
use crate::shoe::ShoeTracker;

#[cfg(feature = "std")]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_hundredths(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

/// Table-entry advice derived from the true count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WongingStatus {
    /// True count of +2 or better: stay at the table.
    Stay,
    /// True count between 0 and +2: acceptable conditions.
    Neutral,
    /// Negative true count: consider leaving.
    ConsiderExit,
}

impl WongingStatus {
    /// Classifies a true count.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count >= 2.0 {
            Self::Stay
        } else if true_count >= 0.0 {
            Self::Neutral
        } else {
            Self::ConsiderExit
        }
    }
}

impl fmt::Display for WongingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stay => "STAY - favorable count",
            Self::Neutral => "NEUTRAL - acceptable conditions",
            Self::ConsiderExit => "CONSIDER EXIT - unfavorable count",
        })
    }
}

/// Omega II running count over every card seen since the shoe was loaded.
///
/// The count only changes through [`CountEngine::record`] and
/// [`CountEngine::revert`], which the table calls in lockstep with the shoe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountEngine {
    running: i32,
}

impl CountEngine {
    /// Creates a count of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { running: 0 }
    }

    /// Adds the weight of a dealt card.
    pub const fn record(&mut self, rank: Rank) {
        self.running += rank.omega_ii();
    }

    /// Removes the weight of an undone card.
    pub const fn revert(&mut self, rank: Rank) {
        self.running -= rank.omega_ii();
    }

    /// Zeroes the count for a fresh shoe.
    pub const fn reset(&mut self) {
        self.running = 0;
    }

    /// The running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running
    }

    /// Running count per remaining deck, rounded to two decimals.
    ///
    /// Returns 0 for an exhausted shoe.
    #[must_use]
    pub fn true_count(&self, shoe: &ShoeTracker) -> f64 {
        let decks_remaining = shoe.decks_remaining();
        if decks_remaining <= 0.0 {
            return 0.0;
        }
        round_hundredths(f64::from(self.running) / decks_remaining)
    }

    /// Wonging advice for the current true count.
    #[must_use]
    pub fn wonging_status(&self, shoe: &ShoeTracker) -> WongingStatus {
        WongingStatus::from_true_count(self.true_count(shoe))
    }
}
