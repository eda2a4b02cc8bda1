extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;
use crate::hand::{DealerHand, Hand};
use crate::result::{HandOutcome, HandResult, SeatResult};

use super::round::Round;
use super::state::RoundPhase;

/// Settles one hand against the dealer's final hand.
///
/// `bet` is the hand's base stake; a doubled hand risks twice that. Returns the
/// outcome and the signed bankroll change.
fn settle_hand(hand: &Hand, dealer: &DealerHand, bet: i64) -> (HandOutcome, i64) {
    let stake = if hand.is_doubled() { bet * 2 } else { bet };

    if hand.is_blackjack() {
        return if dealer.is_blackjack() {
            (HandOutcome::Push, 0)
        } else {
            // 3:2, rounded down
            (HandOutcome::Blackjack, stake * 3 / 2)
        };
    }

    let player_value = hand.value();
    let dealer_value = dealer.value();

    if player_value > 21 {
        (HandOutcome::Bust, -stake)
    } else if dealer_value > 21 || player_value > dealer_value {
        (HandOutcome::Player, stake)
    } else if player_value < dealer_value {
        (HandOutcome::Dealer, -stake)
    } else {
        (HandOutcome::Push, 0)
    }
}

impl Round {
    /// Adds a dealer card and moves on once the dealer stands or busts.
    ///
    /// The dealer draws below 17 and, under the table's soft-17 rule, on soft 17.
    pub(super) fn apply_dealer_card(&mut self, rank: Rank) {
        let hits_soft_17 = self.hits_soft_17();
        let dealer = self.dealer_mut();
        dealer.add_card(rank);

        let next = if dealer.must_hit(hits_soft_17) {
            RoundPhase::DealerPlay
        } else {
            RoundPhase::Settlement
        };
        self.set_phase(next);
    }

    /// Computes every seat's results against the dealer's final hand.
    ///
    /// Only the main seat carries a stake; tracked seats settle at zero.
    pub(crate) fn settle(&self) -> Vec<SeatResult> {
        let dealer = self.dealer();
        let bet = i64::from(self.bet());

        self.seats()
            .iter()
            .enumerate()
            .map(|(seat_index, seat)| {
                let base = if seat.is_main() { bet } else { 0 };

                let hands: Vec<HandResult> = seat
                    .iter_hands()
                    .enumerate()
                    .map(|(hand_index, hand)| {
                        let (outcome, payout) = settle_hand(hand, dealer, base);
                        HandResult {
                            hand_index,
                            outcome,
                            stake: if hand.is_doubled() { base * 2 } else { base },
                            payout,
                            player_value: hand.value(),
                            doubled: hand.is_doubled(),
                        }
                    })
                    .collect();

                SeatResult {
                    seat: seat_index,
                    role: seat.role(),
                    payout: hands.iter().map(|hand| hand.payout).sum(),
                    hands,
                }
            })
            .collect()
    }
}
