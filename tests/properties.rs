//! Property-based tests for the shoe, count and decision tables.

use proptest::prelude::*;

use bjcount::{
    Action, CountEngine, HistoryStack, MAX_BULK_UNDO, Rank, ShoeTracker, Table, TableOptions,
    recommend, recommend_bet,
};

/// Strategy: any rank.
fn rank_strategy() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Strategy: a run of observed cards, some of which may exceed the shoe.
fn cards_strategy() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::vec(rank_strategy(), 0..120)
}

/// Strategy: a hand of two to five cards.
fn hand_strategy() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::vec(rank_strategy(), 2..=5)
}

proptest! {
    // 1. Every card is either in the shoe or in the dealt log
    #[test]
    fn shoe_conserves_cards(decks in 1..=8u8, cards in cards_strategy()) {
        let mut shoe = ShoeTracker::load(decks).unwrap();
        for rank in cards {
            let _ = shoe.deal(rank);
        }

        prop_assert_eq!(shoe.cards_remaining() + shoe.cards_dealt(), shoe.total_cards());
        for rank in Rank::ALL {
            let dealt = shoe.dealt().iter().filter(|event| event.rank == rank).count();
            prop_assert_eq!(shoe.remaining(rank) + dealt, 4 * decks as usize);
        }
    }

    // 2. The running count is the weight sum of the dealt log
    #[test]
    fn running_count_matches_dealt_log(decks in 1..=2u8, cards in cards_strategy()) {
        let mut table = Table::new(TableOptions::default().with_decks(decks)).unwrap();
        for rank in cards {
            let _ = table.deal_card(rank);
        }

        let expected: i32 = table.shoe().dealt().iter().map(|event| event.rank.omega_ii()).sum();
        prop_assert_eq!(table.running_count(), expected);
        prop_assert_eq!(table.history().len(), table.shoe().cards_dealt());
    }

    // 3. Deal followed by undo restores the shoe and the count
    #[test]
    fn deal_then_undo_is_identity(cards in cards_strategy(), rank in rank_strategy()) {
        let mut shoe = ShoeTracker::load(2).unwrap();
        let mut count = CountEngine::new();
        let mut history = HistoryStack::new();
        for card in cards {
            if let Ok(event) = shoe.deal(card) {
                count.record(card);
                history.push(event);
            }
        }

        let before = (shoe.clone(), count);
        if let Ok(event) = shoe.deal(rank) {
            count.record(rank);
            history.push(event);
            prop_assert_eq!(history.undo_one(&mut shoe, &mut count), Ok(event));
        }
        prop_assert_eq!((shoe, count), before);
    }

    // 4. Bulk undo never exceeds the bound and reverts in LIFO order
    #[test]
    fn bulk_undo_is_bounded(cards in cards_strategy(), n in 0..=8usize) {
        let mut table = Table::new(TableOptions::default().with_decks(2)).unwrap();
        for rank in cards {
            let _ = table.deal_card(rank);
        }
        let available = table.available_undos();
        prop_assert!(available <= MAX_BULK_UNDO);

        let log = table.shoe().dealt().to_vec();
        match table.undo_many(n) {
            Ok(undone) => {
                prop_assert!((1..=available).contains(&n));
                let newest: Vec<_> = log.iter().rev().take(n).copied().collect();
                prop_assert_eq!(undone, newest);
                prop_assert_eq!(table.shoe().dealt(), &log[..log.len() - n]);
            }
            Err(_) => {
                prop_assert!(n == 0 || n > available);
                prop_assert_eq!(table.shoe().dealt(), &log[..]);
            }
        }
    }

    // 5. Bets never shrink as the count rises once the bankroll covers the top tier
    #[test]
    fn bet_is_non_decreasing(a in -20.0..20.0f64, b in -20.0..20.0f64, balance in 160..100_000i64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(recommend_bet(low, balance) <= recommend_bet(high, balance));
        prop_assert!((1..=10).contains(&recommend_bet(high, balance)));
    }

    // 6. Recommendations are deterministic and respect what the hand may do
    #[test]
    fn recommendation_respects_permissions(
        hand in hand_strategy(),
        upcard in rank_strategy(),
        true_count in -10.0..10.0f64,
        can_double in any::<bool>(),
        can_split in any::<bool>(),
    ) {
        let action = recommend(&hand, upcard, true_count, can_double, can_split);
        prop_assert_eq!(action, recommend(&hand, upcard, true_count, can_double, can_split));
        if !can_double {
            prop_assert_ne!(action, Action::Double);
        }
        if !can_split || hand.len() != 2 || hand[0] != hand[1] {
            prop_assert_ne!(action, Action::Split);
        }
    }

    // 7. The true count is zero exactly when nothing is counted or the shoe is empty
    #[test]
    fn true_count_sign_follows_running_count(cards in cards_strategy()) {
        let mut table = Table::new(TableOptions::default().with_decks(1)).unwrap();
        for rank in cards {
            let _ = table.deal_card(rank);
        }
        let (running, true_count) = (table.running_count(), table.true_count());
        if table.shoe().cards_remaining() == 0 || running == 0 {
            prop_assert!(true_count.abs() < f64::EPSILON);
        } else {
            prop_assert_eq!(running > 0, true_count > 0.0);
        }
    }
}
