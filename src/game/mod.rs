//! Table engine and round management.

extern crate alloc;

use alloc::vec::Vec;

use crate::bet::recommend_bet;
use crate::card::Rank;
use crate::count::{CountEngine, WongingStatus};
use crate::error::{RoundError, ShoeError, UndoError};
use crate::history::{HistoryStack, ReentryHint};
use crate::options::TableOptions;
use crate::shoe::{DealEvent, PenetrationAdvisory, RankOdds, ShoeTracker};
use crate::strategy::{Action, recommend};

mod actions;
mod dealer;
mod round;
mod seat;
pub mod state;

pub use round::Round;
pub use seat::{Seat, SeatHands, SeatRole};
pub use state::{Recipient, RoundPhase, TurnPosition};

/// A card taken back by [`Table::undo_last`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undone {
    /// The event that was reverted.
    pub event: DealEvent,
    /// Which card the observer should report next.
    pub hint: ReentryHint,
}

/// A tracked blackjack table: the shoe, the count, the undo history, the
/// bankroll and the round in progress.
///
/// Every card observed goes through [`Table::deal_card`] or
/// [`Table::submit_card`], which update the shoe, the count and the history
/// together. All mutation goes through `&mut self`, so one table has exactly
/// one writer.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    shoe: ShoeTracker,
    count: CountEngine,
    history: HistoryStack,
    balance: i64,
    round: Option<Round>,
    rounds_played: u32,
    /// Seats in the most recent round, for undo hints.
    seat_count: usize,
    /// Whether the penetration advisory has been raised for this shoe.
    advised: bool,
}

impl Table {
    /// Loads a fresh shoe and bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default().with_decks(2)).unwrap();
    /// assert_eq!(table.shoe().cards_remaining(), 104);
    /// assert_eq!(table.balance(), 1000);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidDeckCount`] if the options ask for zero decks.
    pub fn new(options: TableOptions) -> Result<Self, ShoeError> {
        let shoe = ShoeTracker::load(options.decks)?;
        tracing::info!(decks = options.decks, "shoe loaded");

        Ok(Self {
            balance: options.starting_balance,
            options,
            shoe,
            count: CountEngine::new(),
            history: HistoryStack::new(),
            round: None,
            rounds_played: 0,
            seat_count: 1,
            advised: false,
        })
    }

    /// Records a card leaving the shoe: shoe, count and history move together.
    fn observe(&mut self, rank: Rank) -> Result<DealEvent, ShoeError> {
        let event = self.shoe.deal(rank)?;
        self.count.record(rank);
        self.history.push(event);

        tracing::debug!(
            card = %rank,
            sequence = event.sequence,
            running_count = self.count.running_count(),
            "card dealt"
        );

        if !self.advised {
            if let Some(advisory) = self.penetration_advisory() {
                self.advised = true;
                tracing::warn!(
                    penetration = advisory.penetration,
                    threshold = advisory.threshold,
                    "deck penetration reached, recommend ending this session"
                );
            }
        }

        Ok(event)
    }

    /// Rewinds the open round past `event` if the card was its latest.
    fn rewind_round(round: &mut Option<Round>, event: DealEvent) {
        if let Some(round) = round.as_mut() {
            if round.phase() != RoundPhase::Complete && round.rewind_card(event.sequence) {
                tracing::debug!(round = round.number(), "round rewound");
            }
        }
        tracing::debug!(card = %event.rank, sequence = event.sequence, "card undone");
    }

    /// Re-arms the penetration warning once undo drops below the threshold.
    fn rearm_advisory(&mut self) {
        if self.penetration_advisory().is_none() {
            self.advised = false;
        }
    }

    /// Records a card seen outside the round flow, such as a burn card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::OutOfCards`] if no card of that rank is left.
    pub fn deal_card(&mut self, rank: Rank) -> Result<DealEvent, ShoeError> {
        self.observe(rank)
    }

    /// Undoes the most recent card.
    ///
    /// If the card belonged to the round in progress the round is rewound to
    /// just before it was submitted.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] if no card has been dealt.
    pub fn undo_last(&mut self) -> Result<Undone, UndoError> {
        let event = self.history.undo_one(&mut self.shoe, &mut self.count)?;
        Self::rewind_round(&mut self.round, event);
        self.rearm_advisory();

        tracing::debug!(running_count = self.count.running_count(), "undo complete");
        Ok(Undone {
            event,
            hint: ReentryHint::derive(self.shoe.cards_dealt(), self.seat_count),
        })
    }

    /// Undoes the `n` most recent cards, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::InvalidCount`] unless `1 <= n <= available_undos()`.
    /// Nothing is undone on error.
    pub fn undo_many(&mut self, n: usize) -> Result<Vec<DealEvent>, UndoError> {
        let round = &mut self.round;
        let undone = self
            .history
            .undo_many_with(n, &mut self.shoe, &mut self.count, |event| {
                Self::rewind_round(round, event);
            })?;
        self.rearm_advisory();

        tracing::debug!(
            count = n,
            running_count = self.count.running_count(),
            "undo complete"
        );
        Ok(undone)
    }

    /// Largest bulk undo currently allowed.
    #[must_use]
    pub fn available_undos(&self) -> usize {
        self.history.available_undos()
    }

    /// Re-entry hint for the current dealt-card count.
    #[must_use]
    pub fn reentry_hint(&self) -> ReentryHint {
        ReentryHint::derive(self.shoe.cards_dealt(), self.seat_count)
    }

    /// The shoe.
    #[must_use]
    pub const fn shoe(&self) -> &ShoeTracker {
        &self.shoe
    }

    /// The undo history.
    #[must_use]
    pub const fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// The Omega II running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.count.running_count()
    }

    /// The true count, rounded to two decimals.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.count.true_count(&self.shoe)
    }

    /// Percentage of the shoe already dealt.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        self.shoe.penetration()
    }

    /// The end-of-shoe advisory, once penetration reaches the configured
    /// threshold.
    #[must_use]
    pub fn penetration_advisory(&self) -> Option<PenetrationAdvisory> {
        self.shoe.penetration_advisory(self.options.penetration_warning)
    }

    /// Odds of each rank being the next card, most likely first.
    #[must_use]
    pub fn probability_board(&self) -> Vec<RankOdds> {
        self.shoe.probability_board()
    }

    /// Wonging advice for the current true count.
    #[must_use]
    pub fn wonging_status(&self) -> WongingStatus {
        self.count.wonging_status(&self.shoe)
    }

    /// Strategy recommendation for an arbitrary hand at the current true count.
    #[must_use]
    pub fn recommend(
        &self,
        hand: &[Rank],
        dealer_upcard: Rank,
        can_double: bool,
        can_split: bool,
    ) -> Action {
        recommend(hand, dealer_upcard, self.true_count(), can_double, can_split)
    }

    /// Bet in units for `balance` at the current true count.
    #[must_use]
    pub fn recommend_bet(&self, balance: i64) -> u32 {
        recommend_bet(self.true_count(), balance)
    }

    /// The bankroll.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Rounds started since the shoe was loaded or reset.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The round in progress, or the last settled one.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Current round phase; [`RoundPhase::Betting`] when no round is open.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match &self.round {
            Some(round) if round.phase() != RoundPhase::Complete => round.phase(),
            _ => RoundPhase::Betting,
        }
    }

    /// Starts a round with the given seats, in deal order.
    ///
    /// The main seat's bet is fixed here from the bet table. Returns the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, `seats` is empty,
    /// there is not exactly one main seat, or the bankroll is exhausted.
    pub fn start_round(&mut self, seats: &[SeatRole]) -> Result<u32, RoundError> {
        if self.phase() != RoundPhase::Betting {
            return Err(RoundError::InvalidState);
        }
        if seats.is_empty() {
            return Err(RoundError::NoSeats);
        }
        if seats.iter().filter(|&&role| role == SeatRole::Main).count() != 1 {
            return Err(RoundError::MainSeatCount);
        }
        if self.balance <= 0 {
            return Err(RoundError::OutOfMoney);
        }

        let bet = self.recommend_bet(self.balance);
        self.rounds_played += 1;
        self.seat_count = seats.len();
        self.round = Some(Round::new(
            self.rounds_played,
            bet,
            seats,
            self.options.dealer_hits_soft_17,
        ));

        tracing::info!(
            round = self.rounds_played,
            seats = seats.len(),
            bet,
            true_count = self.true_count(),
            balance = self.balance,
            "round started"
        );
        Ok(bet)
    }

    /// Abandons the round in progress.
    ///
    /// Hands, bet and results are discarded; the shoe, count, history and
    /// bankroll are kept. Cards already observed stay dealt.
    pub fn restart_round(&mut self) {
        if let Some(round) = self.round.take() {
            tracing::info!(round = round.number(), phase = ?round.phase(), "round restarted");
        }
    }

    /// Starts over with a fresh shoe, zero count, empty history and the
    /// starting bankroll.
    pub fn reset(&mut self) {
        self.shoe.reload();
        self.count.reset();
        self.history.clear();
        self.balance = self.options.starting_balance;
        self.round = None;
        self.rounds_played = 0;
        self.seat_count = 1;
        self.advised = false;
        tracing::info!("table reset");
    }
}
