//! A live-shoe blackjack counting and decision engine with optional `no_std`
//! support.
//!
//! Cards are reported by an observer as they leave a physical shoe. The crate
//! tracks the remaining composition, keeps an Omega II count, recommends plays
//! with count-based index deviations, sizes bets from the true count and runs
//! each round from the deal through settlement. The [`Table`] type ties it all
//! together; the pure decision tables live in [`strategy`] and [`bet`].
//!
//! # Example
//!
//! ```
//! use bjcount::{Action, Rank, Recipient, RoundPhase, SeatRole, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default().with_decks(1)).unwrap();
//! let bet = table.start_round(&[SeatRole::Main]).unwrap();
//! assert_eq!(bet, 1);
//!
//! table.submit_card(Recipient::Seat(0), Rank::Ten).unwrap();
//! table.submit_card(Recipient::Seat(0), Rank::Six).unwrap();
//! table.submit_card(Recipient::Dealer, Rank::Ten).unwrap();
//!
//! // Running count is -2 with 49 cards left, so 16 against a ten is a hit.
//! assert_eq!(table.recommendation(), Some(Action::Hit));
//! table.submit_action(0, Action::Stand).unwrap();
//!
//! table.submit_card(Recipient::Dealer, Rank::Nine).unwrap();
//! assert_eq!(table.phase(), RoundPhase::Settlement);
//!
//! let result = table.complete_round().unwrap();
//! assert_eq!(result.payout, -1);
//! assert_eq!(table.balance(), 999);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
pub mod result;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use bet::{BetTier, recommend_bet};
pub use card::{DECK_SIZE, Rank};
pub use count::{CountEngine, WongingStatus};
pub use error::{
    ActionError, ParseActionError, ParseRankError, RoundError, ShoeError, UndoError,
};
pub use game::{
    Recipient, Round, RoundPhase, Seat, SeatHands, SeatRole, Table, TurnPosition, Undone,
};
pub use hand::{DealerHand, Hand, HandStatus};
pub use history::{HistoryStack, MAX_BULK_UNDO, ReentryHint};
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, RoundResult, SeatResult};
pub use shoe::{DealEvent, PenetrationAdvisory, RankOdds, ShoeTracker};
pub use strategy::{Action, recommend};
