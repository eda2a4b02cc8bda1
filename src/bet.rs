//! Count-driven bet sizing.

use core::fmt;

/// The band of the bet table a true count falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetTier {
    /// True count of 0 or below.
    Unfavorable,
    /// True count above 0, up to +1.
    LowPositive,
    /// Up to +2.
    Moderate,
    /// Up to +3.
    Good,
    /// Up to +4.
    VeryGood,
    /// Up to +5.
    Excellent,
    /// Above +5.
    Maximum,
}

impl BetTier {
    /// Classifies a true count. Every upper bound is inclusive.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count <= 0.0 {
            Self::Unfavorable
        } else if true_count <= 1.0 {
            Self::LowPositive
        } else if true_count <= 2.0 {
            Self::Moderate
        } else if true_count <= 3.0 {
            Self::Good
        } else if true_count <= 4.0 {
            Self::VeryGood
        } else if true_count <= 5.0 {
            Self::Excellent
        } else {
            Self::Maximum
        }
    }

    /// Bet in units for this tier.
    ///
    /// The top tier is capped at 10 units and at one twentieth of the bankroll,
    /// and never goes below zero.
    #[must_use]
    pub fn units(self, balance: i64) -> u32 {
        match self {
            Self::Unfavorable | Self::LowPositive => 1,
            Self::Moderate => 2,
            Self::Good => 4,
            Self::VeryGood => 6,
            Self::Excellent => 8,
            Self::Maximum => (balance / 20).clamp(0, 10) as u32,
        }
    }
}

impl fmt::Display for BetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unfavorable => "minimum bet (unfavorable count)",
            Self::LowPositive => "minimum bet (low positive count)",
            Self::Moderate => "2 units (moderate positive count)",
            Self::Good => "4 units (good positive count)",
            Self::VeryGood => "6 units (very good positive count)",
            Self::Excellent => "8 units (excellent positive count)",
            Self::Maximum => "maximum bet (extremely favorable count)",
        })
    }
}

/// Bet size in units for a true count and bankroll.
#[must_use]
pub fn recommend_bet(true_count: f64, balance: i64) -> u32 {
    BetTier::from_true_count(true_count).units(balance)
}
