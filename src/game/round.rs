//! Round-scoped state and its transitions.
//!
//! A [`Round`] only ever changes through [`RoundInput`]s. Each input is
//! validated first and then applied; applied inputs are kept so that the round
//! can be rebuilt up to any earlier card when that card is undone.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::strategy::Action;

use super::seat::{Seat, SeatRole};
use super::state::{Recipient, RoundPhase, TurnPosition};

/// An accepted change to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundInput {
    Card {
        to: Recipient,
        rank: Rank,
        sequence: usize,
    },
    Action {
        seat: usize,
        action: Action,
    },
    Insurance(bool),
}

/// A hit or double waiting for its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Hit,
    Double,
}

/// One round at the table: seats, dealer hand, bet and turn.
#[derive(Debug, Clone)]
pub struct Round {
    number: u32,
    bet: u32,
    roles: Vec<SeatRole>,
    hits_soft_17: bool,
    seats: Vec<Seat>,
    dealer: DealerHand,
    phase: RoundPhase,
    turn: TurnPosition,
    pending: Option<Pending>,
    initial_dealt: usize,
    insurance: Option<bool>,
    inputs: Vec<RoundInput>,
}

impl Round {
    pub(crate) fn new(number: u32, bet: u32, roles: &[SeatRole], hits_soft_17: bool) -> Self {
        Self {
            number,
            bet,
            roles: roles.to_vec(),
            hits_soft_17,
            seats: roles.iter().map(|&role| Seat::new(role)).collect(),
            dealer: DealerHand::new(),
            phase: RoundPhase::DealInitial,
            turn: TurnPosition { seat: 0, hand: 0 },
            pending: None,
            initial_dealt: 0,
            insurance: None,
            inputs: Vec::new(),
        }
    }

    /// Round number within the session.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Bet for the main seat, in units.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The seats, in deal order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// The hand whose turn it is, while seats are playing.
    #[must_use]
    pub const fn turn(&self) -> Option<TurnPosition> {
        match self.phase {
            RoundPhase::SeatPlay | RoundPhase::Split => Some(self.turn),
            _ => None,
        }
    }

    /// Returns whether the current hand is waiting for a hit or double card.
    #[must_use]
    pub const fn is_card_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns whether insurance is on offer (dealer shows an ace and the main
    /// seat has not decided yet).
    #[must_use]
    pub fn insurance_offered(&self) -> bool {
        self.insurance.is_none()
            && self.dealer.up_card() == Some(Rank::Ace)
            && matches!(
                self.phase,
                RoundPhase::SeatPlay | RoundPhase::Split | RoundPhase::DealerHoleCard
            )
    }

    /// The main seat's insurance decision, if one was made.
    #[must_use]
    pub const fn insurance_taken(&self) -> Option<bool> {
        self.insurance
    }

    /// Index of the main seat.
    #[must_use]
    pub fn main_seat(&self) -> Option<usize> {
        self.seats.iter().position(Seat::is_main)
    }

    /// Who the round is waiting on for the next card, if anyone.
    #[must_use]
    pub fn expected_card(&self) -> Option<Recipient> {
        let seats = self.seats.len();
        match self.phase {
            RoundPhase::DealInitial if self.initial_dealt < seats * 2 => {
                Some(Recipient::Seat(self.initial_dealt % seats))
            }
            RoundPhase::DealInitial | RoundPhase::DealerHoleCard => Some(Recipient::Dealer),
            RoundPhase::SeatPlay if self.pending.is_some() => Some(Recipient::Seat(self.turn.seat)),
            RoundPhase::Split => Some(Recipient::Seat(self.turn.seat)),
            RoundPhase::DealerPlay => Some(Recipient::Dealer),
            _ => None,
        }
    }

    fn current_hand_mut(&mut self) -> Option<&mut Hand> {
        self.seats
            .get_mut(self.turn.seat)
            .and_then(|seat| seat.hand_mut(self.turn.hand))
    }

    /// The main seat's hand, when it is the main seat's turn to decide.
    pub(crate) fn deciding_main_hand(&self) -> Option<(&Seat, &Hand)> {
        if self.phase != RoundPhase::SeatPlay || self.pending.is_some() {
            return None;
        }
        let seat = self.seats.get(self.turn.seat)?;
        if !seat.is_main() {
            return None;
        }
        seat.hand(self.turn.hand).map(|hand| (seat, hand))
    }

    pub(crate) fn check_card(&self, to: Recipient) -> Result<(), ActionError> {
        if let Recipient::Seat(seat) = to {
            if seat >= self.seats.len() {
                return Err(ActionError::SeatNotFound);
            }
        }
        match self.expected_card() {
            Some(expected) if expected == to => Ok(()),
            Some(_) => Err(ActionError::NotYourTurn),
            None => Err(ActionError::InvalidState),
        }
    }

    pub(crate) fn check_action(&self, seat: usize, action: Action) -> Result<(), ActionError> {
        match self.phase {
            RoundPhase::SeatPlay => {}
            RoundPhase::Split => return Err(ActionError::CardPending),
            _ => return Err(ActionError::InvalidState),
        }

        let target = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;
        if seat != self.turn.seat {
            return Err(ActionError::NotYourTurn);
        }
        if self.pending.is_some() {
            return Err(ActionError::CardPending);
        }

        let hand = target
            .hand(self.turn.hand)
            .ok_or(ActionError::HandNotActive)?;
        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        match action {
            Action::Hit | Action::Stand => Ok(()),
            Action::Double if hand.can_double() => Ok(()),
            Action::Double => Err(ActionError::CannotDouble),
            Action::Split if target.is_split() && hand.is_pair() => {
                Err(ActionError::ResplitUnsupported)
            }
            Action::Split if !target.is_split() && hand.is_pair() => Ok(()),
            Action::Split => Err(ActionError::CannotSplit),
        }
    }

    pub(crate) fn check_insurance(&self) -> Result<(), ActionError> {
        if self.insurance_offered() {
            Ok(())
        } else {
            Err(ActionError::InsuranceNotOffered)
        }
    }

    /// Applies a validated input and records it.
    pub(crate) fn apply(&mut self, input: RoundInput) {
        match input {
            RoundInput::Card { to, rank, .. } => self.apply_card(to, rank),
            RoundInput::Action { seat, action } => self.apply_action(seat, action),
            RoundInput::Insurance(take) => self.insurance = Some(take),
        }
        self.inputs.push(input);
    }

    /// Rebuilds the round as it was just before the card with `sequence` was
    /// submitted. Returns `false` if that card is not the round's latest card.
    pub(crate) fn rewind_card(&mut self, sequence: usize) -> bool {
        let Some(position) = self
            .inputs
            .iter()
            .rposition(|input| matches!(input, RoundInput::Card { .. }))
        else {
            return false;
        };
        if !matches!(self.inputs[position], RoundInput::Card { sequence: s, .. } if s == sequence)
        {
            return false;
        }

        let mut replayed = Self::new(self.number, self.bet, &self.roles, self.hits_soft_17);
        for &input in &self.inputs[..position] {
            replayed.apply(input);
        }
        *self = replayed;
        true
    }

    /// Number of cards this round has received.
    #[must_use]
    pub fn cards_received(&self) -> usize {
        self.inputs
            .iter()
            .filter(|input| matches!(input, RoundInput::Card { .. }))
            .count()
    }

    fn apply_card(&mut self, to: Recipient, rank: Rank) {
        match (self.phase, to) {
            (RoundPhase::DealInitial, Recipient::Seat(seat)) => {
                if let Some(hand) = self.seats.get_mut(seat).and_then(|s| s.hand_mut(0)) {
                    hand.add_card(rank);
                }
                self.initial_dealt += 1;
            }
            (RoundPhase::DealInitial, Recipient::Dealer) => {
                self.dealer.add_card(rank);
                self.initial_dealt += 1;
                self.seek(0, 0);
            }
            (RoundPhase::SeatPlay, Recipient::Seat(_)) => self.apply_play_card(rank),
            (RoundPhase::Split, Recipient::Seat(_)) => self.apply_split_card(rank),
            (RoundPhase::DealerHoleCard | RoundPhase::DealerPlay, Recipient::Dealer) => {
                self.apply_dealer_card(rank);
            }
            _ => {}
        }
    }

    fn apply_play_card(&mut self, rank: Rank) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let Some(hand) = self.current_hand_mut() else {
            return;
        };
        hand.add_card(rank);

        if pending == Pending::Double && hand.is_active() {
            hand.set_status(HandStatus::Stand);
        }
        if !hand.is_active() {
            self.seek(self.turn.seat, self.turn.hand + 1);
        }
    }

    fn apply_split_card(&mut self, rank: Rank) {
        let seat = self.turn.seat;
        let Some(target) = self.seats.get_mut(seat) else {
            return;
        };

        // First half, then second half, before either is played
        let waiting = (0..target.hand_count())
            .find(|&index| target.hand(index).is_some_and(|hand| hand.len() < 2));
        if let Some(hand) = waiting.and_then(|index| target.hand_mut(index)) {
            hand.add_card(rank);
        }

        let all_dealt = target.iter_hands().all(|hand| hand.len() >= 2);
        if all_dealt {
            self.seek(seat, 0);
        }
    }

    fn apply_action(&mut self, seat: usize, action: Action) {
        if seat != self.turn.seat {
            return;
        }
        match action {
            Action::Hit => {
                if let Some(hand) = self.current_hand_mut() {
                    hand.mark_acted();
                }
                self.pending = Some(Pending::Hit);
            }
            Action::Double => {
                if let Some(hand) = self.current_hand_mut() {
                    hand.mark_doubled();
                }
                self.pending = Some(Pending::Double);
            }
            Action::Stand => {
                if let Some(hand) = self.current_hand_mut() {
                    hand.set_status(HandStatus::Stand);
                }
                self.seek(self.turn.seat, self.turn.hand + 1);
            }
            Action::Split => {
                if let Some(target) = self.seats.get_mut(seat) {
                    if target.split() {
                        self.turn.hand = 0;
                        self.phase = RoundPhase::Split;
                    }
                }
            }
        }
    }

    /// Moves the turn to the first active hand at or after `(seat, hand)`,
    /// or on to the dealer once every seat is done.
    fn seek(&mut self, mut seat: usize, mut hand: usize) {
        while let Some(current) = self.seats.get(seat) {
            while hand < current.hand_count() {
                if current.hand(hand).is_some_and(Hand::is_active) {
                    self.turn = TurnPosition { seat, hand };
                    self.phase = RoundPhase::SeatPlay;
                    return;
                }
                hand += 1;
            }
            seat += 1;
            hand = 0;
        }

        self.turn = TurnPosition { seat, hand: 0 };
        self.phase = RoundPhase::DealerHoleCard;
    }

    pub(super) const fn hits_soft_17(&self) -> bool {
        self.hits_soft_17
    }

    pub(super) const fn set_phase(&mut self, phase: RoundPhase) {
        self.phase = phase;
    }

    pub(super) const fn dealer_mut(&mut self) -> &mut DealerHand {
        &mut self.dealer
    }
}
