//! Shoe composition tracking.
//!
//! The shoe is never shuffled or drawn from here: an observer reports each card
//! as it leaves the physical shoe and the tracker keeps the remaining count per
//! rank together with an append-only log of what was dealt.

extern crate alloc;

use core::cmp::Reverse;
use core::fmt;

use alloc::vec::Vec;

use crate::card::{DECK_SIZE, Rank, SUITS_PER_DECK};
use crate::error::ShoeError;

/// A single observed card leaving the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealEvent {
    /// The rank that was dealt.
    pub rank: Rank,
    /// Position of the card in the dealt log (0 for the first card of the shoe).
    pub sequence: usize,
}

/// Odds of the next card being a given rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOdds {
    /// The rank.
    pub rank: Rank,
    /// Cards of this rank still in the shoe.
    pub remaining: usize,
    /// Probability of drawing this rank next, in percent.
    pub probability: f64,
}

impl RankOdds {
    /// The "1 in X" chance of drawing this rank, or `None` when no cards are left.
    #[must_use]
    pub fn one_in(&self) -> Option<f64> {
        if self.probability > 0.0 {
            Some(100.0 / self.probability)
        } else {
            None
        }
    }
}

impl fmt::Display for RankOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.one_in() {
            Some(x) => write!(
                f,
                "{}: {} cards ({:.1}%), 1 in {x:.1}",
                self.rank, self.remaining, self.probability
            ),
            None => write!(f, "{}: no cards left", self.rank),
        }
    }
}

/// Raised once the dealt fraction of the shoe reaches the warning threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenetrationAdvisory {
    /// Current penetration in percent.
    pub penetration: f64,
    /// Threshold that was reached, in percent.
    pub threshold: f64,
}

impl fmt::Display for PenetrationAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deck penetration {:.1}% reached {:.0}%, recommend ending this session",
            self.penetration, self.threshold
        )
    }
}

/// Remaining shoe composition and the log of dealt cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeTracker {
    decks: u8,
    remaining: [usize; 13],
    dealt: Vec<DealEvent>,
}

impl ShoeTracker {
    /// Loads a fresh shoe of `decks` full decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidDeckCount`] if `decks` is zero.
    pub fn load(decks: u8) -> Result<Self, ShoeError> {
        if decks < 1 {
            return Err(ShoeError::InvalidDeckCount);
        }

        Ok(Self {
            decks,
            remaining: [SUITS_PER_DECK * decks as usize; 13],
            dealt: Vec::with_capacity(decks as usize * DECK_SIZE),
        })
    }

    /// Records a card leaving the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::OutOfCards`] if no card of that rank is left.
    pub fn deal(&mut self, rank: Rank) -> Result<DealEvent, ShoeError> {
        let left = &mut self.remaining[rank.index()];
        if *left == 0 {
            return Err(ShoeError::OutOfCards(rank));
        }
        *left -= 1;

        let event = DealEvent {
            rank,
            sequence: self.dealt.len(),
        };
        self.dealt.push(event);
        Ok(event)
    }

    /// Returns every dealt card to the shoe, keeping the deck count.
    pub fn reload(&mut self) {
        self.remaining = [SUITS_PER_DECK * self.decks as usize; 13];
        self.dealt.clear();
    }

    /// Returns the most recently dealt card to the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidUndo`] unless `event` is the last entry of
    /// the dealt log.
    pub fn undo(&mut self, event: DealEvent) -> Result<(), ShoeError> {
        if self.dealt.last() != Some(&event) {
            return Err(ShoeError::InvalidUndo);
        }
        self.dealt.pop();
        self.remaining[event.rank.index()] += 1;
        Ok(())
    }

    /// Number of decks the shoe was loaded with.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Total cards in a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Cards of `rank` still in the shoe.
    #[must_use]
    pub const fn remaining(&self, rank: Rank) -> usize {
        self.remaining[rank.index()]
    }

    /// Cards still in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    /// Cards dealt since the shoe was loaded.
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.dealt.len()
    }

    /// The dealt log, oldest first.
    #[must_use]
    pub fn dealt(&self) -> &[DealEvent] {
        &self.dealt
    }

    /// Decks still in the shoe, fractional.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let (cards, deck) = (self.cards_remaining() as f64, DECK_SIZE as f64);
        cards / deck
    }

    /// Percentage of the shoe already dealt.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let (dealt, total) = (self.cards_dealt() as f64, self.total_cards() as f64);
        dealt * 100.0 / total
    }

    /// Returns an advisory once penetration has reached `threshold` percent.
    #[must_use]
    pub fn penetration_advisory(&self, threshold: f64) -> Option<PenetrationAdvisory> {
        let penetration = self.penetration();
        (penetration >= threshold).then_some(PenetrationAdvisory {
            penetration,
            threshold,
        })
    }

    /// Odds of each rank being the next card, most likely first.
    ///
    /// Ranks with equal odds keep shoe order. An exhausted shoe reports every
    /// rank at probability zero.
    #[must_use]
    pub fn probability_board(&self) -> Vec<RankOdds> {
        let total = self.cards_remaining();

        let mut board: Vec<RankOdds> = Rank::ALL
            .iter()
            .map(|&rank| {
                let remaining = self.remaining(rank);
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for card counts"
                )]
                let probability = if total == 0 {
                    0.0
                } else {
                    remaining as f64 * 100.0 / total as f64
                };
                RankOdds {
                    rank,
                    remaining,
                    probability,
                }
            })
            .collect();

        board.sort_by_key(|odds| Reverse(odds.remaining));
        board
    }
}
