use crate::card::Rank;
use crate::error::{ActionError, RoundError};
use crate::result::RoundResult;
use crate::shoe::DealEvent;
use crate::strategy::{Action, recommend};

use super::round::RoundInput;
use super::seat::SeatHands;
use super::state::{Recipient, RoundPhase};
use super::Table;

impl Table {
    /// Who the round in progress is waiting on for the next card.
    #[must_use]
    pub fn expected_card(&self) -> Option<Recipient> {
        self.round
            .as_ref()
            .filter(|round| round.phase() != RoundPhase::Complete)
            .and_then(super::Round::expected_card)
    }

    /// Submits an observed card for `to`.
    ///
    /// The card is dealt from the shoe, counted, recorded in the history and
    /// applied to the round as one step.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is waiting for a card, the card is addressed
    /// to someone other than [`Table::expected_card`], or the shoe has no card of
    /// that rank left. Nothing changes on error.
    pub fn submit_card(&mut self, to: Recipient, rank: Rank) -> Result<DealEvent, ActionError> {
        let round = self
            .round
            .as_ref()
            .filter(|round| round.phase() != RoundPhase::Complete)
            .ok_or(ActionError::InvalidState)?;
        round.check_card(to)?;

        let event = self.observe(rank)?;

        if let Some(round) = self.round.as_mut() {
            round.apply(RoundInput::Card {
                to,
                rank,
                sequence: event.sequence,
            });
            tracing::debug!(recipient = ?to, card = %rank, phase = ?round.phase(), "card applied");
        }
        Ok(event)
    }

    /// Submits the action a seat took.
    ///
    /// A hit or double then waits for its card through [`Table::submit_card`].
    ///
    /// # Errors
    ///
    /// Returns an error if seats are not playing, it is not this seat's turn, a
    /// card is still pending, or the action is illegal for the hand (double
    /// after the first two cards, split without a pair, resplit).
    pub fn submit_action(&mut self, seat: usize, action: Action) -> Result<(), ActionError> {
        let advised = self.recommendation();
        let round = self.round.as_mut().ok_or(ActionError::InvalidState)?;
        round.check_action(seat, action)?;
        round.apply(RoundInput::Action { seat, action });

        match advised {
            Some(advised) if advised != action => tracing::debug!(
                seat,
                %action,
                %advised,
                "main seat deviated from recommendation"
            ),
            _ => tracing::debug!(seat, %action, "action applied"),
        }
        Ok(())
    }

    /// Records the main seat's insurance decision.
    ///
    /// Insurance carries no stake: the decision is recorded and has no effect on
    /// settlement.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsuranceNotOffered`] unless the dealer shows an
    /// ace, the deal is complete, and no decision has been recorded yet.
    pub fn decide_insurance(&mut self, take: bool) -> Result<(), ActionError> {
        let round = self.round.as_mut().ok_or(ActionError::InvalidState)?;
        round.check_insurance()?;
        round.apply(RoundInput::Insurance(take));
        tracing::info!(round = round.number(), take, "insurance decision recorded");
        Ok(())
    }

    /// The recommended action for the main seat, when it is the main seat's
    /// turn to decide.
    #[must_use]
    pub fn recommendation(&self) -> Option<Action> {
        let round = self.round.as_ref()?;
        let (seat, hand) = round.deciding_main_hand()?;
        let up_card = round.dealer().up_card()?;

        let can_split = matches!(seat.hands(), SeatHands::Single(_)) && hand.is_pair();
        Some(recommend(
            hand.cards(),
            up_card,
            self.true_count(),
            hand.can_double(),
            can_split,
        ))
    }

    /// Settles the round and applies the main seat's payout to the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless the dealer has finished.
    pub fn complete_round(&mut self) -> Result<RoundResult, RoundError> {
        let round = self
            .round
            .as_mut()
            .filter(|round| round.phase() == RoundPhase::Settlement)
            .ok_or(RoundError::InvalidState)?;

        let seats = round.settle();
        let payout: i64 = seats
            .iter()
            .filter(|seat| seat.role == super::SeatRole::Main)
            .map(|seat| seat.payout)
            .sum();
        round.set_phase(RoundPhase::Complete);

        let dealer = round.dealer();
        let result = RoundResult {
            round: round.number(),
            bet: round.bet(),
            seats,
            payout,
            balance: self.balance + payout,
            dealer_value: dealer.value(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        };
        self.balance = result.balance;

        tracing::info!(
            round = result.round,
            payout,
            balance = self.balance,
            dealer_value = result.dealer_value,
            "round settled"
        );
        Ok(result)
    }
}
