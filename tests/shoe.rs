//! Shoe, count and history tests.

#![expect(clippy::float_cmp, reason = "counts are rounded to exact decimals")]

use bjcount::{
    CountEngine, DECK_SIZE, HistoryStack, ParseRankError, Rank, ReentryHint, ShoeError,
    ShoeTracker, UndoError, WongingStatus,
};

fn deal_all(shoe: &mut ShoeTracker, count: &mut CountEngine, ranks: &[Rank]) {
    for &rank in ranks {
        shoe.deal(rank).unwrap();
        count.record(rank);
    }
}

#[test]
fn rank_values_and_weights() {
    assert_eq!(Rank::Ace.value(), 11);
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(Rank::Queen.value(), 10);

    let weights: Vec<i32> = Rank::ALL.iter().map(|rank| rank.omega_ii()).collect();
    assert_eq!(weights, vec![0, 1, 1, 2, 2, 2, 1, 0, -1, -2, -2, -2, -2]);

    // Omega II is balanced over a full deck
    let deck_total: i32 = weights.iter().sum::<i32>() * 4;
    assert_eq!(deck_total, 0);
}

#[test]
fn rank_parsing() {
    assert_eq!("A".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!("1".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!(" q ".parse::<Rank>(), Ok(Rank::Queen));
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert_eq!("11".parse::<Rank>(), Err(ParseRankError::InvalidRank));
    assert_eq!("".parse::<Rank>(), Err(ParseRankError::InvalidRank));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(ParseRankError::InvalidRank));
    assert_eq!(Rank::Ten.to_string(), "10");
}

#[test]
fn load_rejects_empty_shoe() {
    assert_eq!(ShoeTracker::load(0), Err(ShoeError::InvalidDeckCount));

    let shoe = ShoeTracker::load(6).unwrap();
    assert_eq!(shoe.total_cards(), 6 * DECK_SIZE);
    assert_eq!(shoe.cards_remaining(), 312);
    assert!(Rank::ALL.iter().all(|&rank| shoe.remaining(rank) == 24));
}

#[test]
fn deal_until_rank_runs_out() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    for sequence in 0..4 {
        let event = shoe.deal(Rank::Ace).unwrap();
        assert_eq!(event.sequence, sequence);
    }

    assert_eq!(shoe.deal(Rank::Ace), Err(ShoeError::OutOfCards(Rank::Ace)));
    assert_eq!(shoe.remaining(Rank::Ace), 0);
    assert_eq!(shoe.cards_dealt(), 4);
    assert_eq!(shoe.cards_remaining() + shoe.cards_dealt(), DECK_SIZE);
}

#[test]
fn undo_only_accepts_last_event() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    let first = shoe.deal(Rank::Two).unwrap();
    let second = shoe.deal(Rank::King).unwrap();

    assert_eq!(shoe.undo(first), Err(ShoeError::InvalidUndo));
    shoe.undo(second).unwrap();
    assert_eq!(shoe.remaining(Rank::King), 4);
    assert_eq!(shoe.dealt(), &[first]);
}

#[test]
fn penetration_and_advisory() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    for rank in Rank::ALL.iter().cycle().take(26) {
        shoe.deal(*rank).unwrap();
    }
    assert_eq!(shoe.penetration(), 50.0);
    assert!(shoe.penetration_advisory(70.0).is_none());

    for rank in Rank::ALL.iter().cycle().take(10) {
        shoe.deal(*rank).unwrap();
    }
    // 36 of 52 dealt
    assert!(shoe.penetration_advisory(70.0).is_none());

    shoe.deal(Rank::Ace).unwrap();
    let advisory = shoe.penetration_advisory(70.0).unwrap();
    assert!(advisory.penetration > 71.0 && advisory.penetration < 71.2);
    assert_eq!(advisory.threshold, 70.0);
}

#[test]
fn probability_board_orders_by_likelihood() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    shoe.deal(Rank::King).unwrap();
    shoe.deal(Rank::King).unwrap();

    let board = shoe.probability_board();
    assert_eq!(board.len(), 13);
    assert_eq!(board[0].rank, Rank::Ace);
    assert_eq!(board[0].remaining, 4);
    assert_eq!(board[0].probability, 8.0);
    assert_eq!(board[0].one_in(), Some(12.5));
    assert_eq!(board[12].rank, Rank::King);
    assert_eq!(board[12].remaining, 2);

    let ranks: Vec<Rank> = board.iter().take(3).map(|odds| odds.rank).collect();
    assert_eq!(ranks, vec![Rank::Ace, Rank::Two, Rank::Three]);
}

#[test]
fn probability_board_reports_exhausted_ranks() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    for _ in 0..4 {
        shoe.deal(Rank::Five).unwrap();
    }

    let board = shoe.probability_board();
    let five = board.last().unwrap();
    assert_eq!(five.rank, Rank::Five);
    assert_eq!(five.probability, 0.0);
    assert_eq!(five.one_in(), None);
    assert_eq!(five.to_string(), "5: no cards left");
}

#[test]
fn true_count_uses_decks_remaining() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    let mut count = CountEngine::new();
    deal_all(
        &mut shoe,
        &mut count,
        &[Rank::Five, Rank::Five, Rank::Six, Rank::Six],
    );

    assert_eq!(count.running_count(), 8);
    // 8 / (48 / 52)
    assert_eq!(count.true_count(&shoe), 8.67);
    assert_eq!(count.wonging_status(&shoe), WongingStatus::Stay);
}

#[test]
fn true_count_is_zero_for_exhausted_shoe() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    let mut count = CountEngine::new();
    let deck: Vec<Rank> = Rank::ALL.iter().flat_map(|&rank| [rank; 4]).collect();
    deal_all(&mut shoe, &mut count, &deck);

    assert_eq!(shoe.cards_remaining(), 0);
    assert_eq!(count.running_count(), 0);
    assert_eq!(count.true_count(&shoe), 0.0);
}

#[test]
fn wonging_thresholds() {
    assert_eq!(WongingStatus::from_true_count(2.0), WongingStatus::Stay);
    assert_eq!(WongingStatus::from_true_count(1.99), WongingStatus::Neutral);
    assert_eq!(WongingStatus::from_true_count(0.0), WongingStatus::Neutral);
    assert_eq!(
        WongingStatus::from_true_count(-0.01),
        WongingStatus::ConsiderExit
    );
}

#[test]
fn history_undo_reverts_shoe_and_count() {
    let mut shoe = ShoeTracker::load(2).unwrap();
    let mut count = CountEngine::new();
    let mut history = HistoryStack::new();

    assert_eq!(
        history.undo_one(&mut shoe, &mut count),
        Err(UndoError::EmptyHistory)
    );

    let before = (shoe.clone(), count);
    let event = shoe.deal(Rank::Four).unwrap();
    count.record(Rank::Four);
    history.push(event);
    assert_eq!(count.running_count(), 2);

    assert_eq!(history.undo_one(&mut shoe, &mut count), Ok(event));
    assert_eq!((shoe, count), before);
    assert!(history.is_empty());
}

#[test]
fn history_bulk_undo_is_bounded() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    let mut count = CountEngine::new();
    let mut history = HistoryStack::new();

    let ranks = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];
    for rank in ranks {
        history.push(shoe.deal(rank).unwrap());
        count.record(rank);
    }
    assert_eq!(history.available_undos(), 5);

    assert_eq!(
        history.undo_many(0, &mut shoe, &mut count),
        Err(UndoError::InvalidCount {
            requested: 0,
            available: 5
        })
    );
    assert_eq!(
        history.undo_many(6, &mut shoe, &mut count),
        Err(UndoError::InvalidCount {
            requested: 6,
            available: 5
        })
    );
    assert_eq!(history.len(), 7);

    let undone = history.undo_many(3, &mut shoe, &mut count).unwrap();
    let undone: Vec<Rank> = undone.iter().map(|event| event.rank).collect();
    assert_eq!(undone, vec![Rank::Eight, Rank::Seven, Rank::Six]);
    assert_eq!(shoe.cards_dealt(), 4);
    // 2, 3, 4, 5
    assert_eq!(count.running_count(), 6);
}

#[test]
fn bulk_undo_reports_each_event() {
    let mut shoe = ShoeTracker::load(1).unwrap();
    let mut count = CountEngine::new();
    let mut history = HistoryStack::new();
    for rank in [Rank::Ace, Rank::King, Rank::Five] {
        history.push(shoe.deal(rank).unwrap());
        count.record(rank);
    }

    let mut seen = Vec::new();
    assert!(
        history
            .undo_many_with(4, &mut shoe, &mut count, |event| seen.push(event.rank))
            .is_err()
    );
    assert!(seen.is_empty());

    let undone = history
        .undo_many_with(2, &mut shoe, &mut count, |event| seen.push(event.rank))
        .unwrap();
    assert_eq!(seen, vec![Rank::Five, Rank::King]);
    assert_eq!(undone.len(), 2);
    assert_eq!(count.running_count(), 0);
    assert_eq!(shoe.cards_dealt(), 1);
}

#[test]
fn shoe_reload_returns_every_card() {
    let mut shoe = ShoeTracker::load(2).unwrap();
    shoe.deal(Rank::Queen).unwrap();
    shoe.deal(Rank::Two).unwrap();

    shoe.reload();
    assert_eq!(shoe, ShoeTracker::load(2).unwrap());
}

#[test]
fn reentry_hints_follow_deal_order() {
    assert_eq!(ReentryHint::derive(0, 3), ReentryHint::FirstCard(1));
    assert_eq!(ReentryHint::derive(2, 3), ReentryHint::FirstCard(3));
    assert_eq!(ReentryHint::derive(3, 3), ReentryHint::DealerUpcard);
    assert_eq!(ReentryHint::derive(4, 3), ReentryHint::SecondCard(1));
    assert_eq!(ReentryHint::derive(6, 3), ReentryHint::SecondCard(3));
    assert_eq!(ReentryHint::derive(7, 3), ReentryHint::MidHand);
    assert_eq!(
        ReentryHint::DealerUpcard.to_string(),
        "re-enter the dealer's upcard"
    );
}
