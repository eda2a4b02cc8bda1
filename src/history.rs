//! Undo history for observed cards.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

use crate::count::CountEngine;
use crate::error::UndoError;
use crate::shoe::{DealEvent, ShoeTracker};

/// Largest number of cards a single bulk undo may revert.
pub const MAX_BULK_UNDO: usize = 5;

/// Which card the observer has to report again after an undo.
///
/// Derived from the dealt-card count and the seat count assuming the shoe's
/// cards were dealt as one round's initial deal; it is advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReentryHint {
    /// Re-enter the first card of this seat (1-based).
    FirstCard(usize),
    /// Re-enter the dealer upcard.
    DealerUpcard,
    /// Re-enter the second card of this seat (1-based).
    SecondCard(usize),
    /// The undone card was dealt during play; resume from there.
    MidHand,
}

impl ReentryHint {
    /// Derives the hint from `dealt` cards remaining in the log and `seats`
    /// seats at the table.
    #[must_use]
    pub const fn derive(dealt: usize, seats: usize) -> Self {
        if dealt < seats {
            Self::FirstCard(dealt + 1)
        } else if dealt == seats {
            Self::DealerUpcard
        } else if dealt < seats * 2 + 1 {
            Self::SecondCard(dealt - seats)
        } else {
            Self::MidHand
        }
    }
}

impl fmt::Display for ReentryHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstCard(seat) => write!(f, "re-enter seat {seat}'s first card"),
            Self::DealerUpcard => f.write_str("re-enter the dealer's upcard"),
            Self::SecondCard(seat) => write!(f, "re-enter seat {seat}'s second card"),
            Self::MidHand => f.write_str("card undone mid-hand, resume play"),
        }
    }
}

/// LIFO stack of deal events that can be reverted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<DealEvent>,
}

impl HistoryStack {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a dealt card.
    pub fn push(&mut self, event: DealEvent) {
        self.entries.push(event);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&DealEvent> {
        self.entries.last()
    }

    /// Largest bulk undo currently allowed.
    #[must_use]
    pub fn available_undos(&self) -> usize {
        self.entries.len().min(MAX_BULK_UNDO)
    }

    /// Drops every event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reverts the most recent event through the shoe and the count.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] if there is nothing to undo, or
    /// [`UndoError::Shoe`] if the shoe's log disagrees with the history.
    pub fn undo_one(
        &mut self,
        shoe: &mut ShoeTracker,
        count: &mut CountEngine,
    ) -> Result<DealEvent, UndoError> {
        let event = *self.entries.last().ok_or(UndoError::EmptyHistory)?;
        shoe.undo(event)?;
        count.revert(event.rank);
        self.entries.pop();
        Ok(event)
    }

    /// Reverts the `n` most recent events, newest first.
    ///
    /// Either all `n` events are reverted or none are.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::InvalidCount`] unless `1 <= n <= available_undos()`.
    pub fn undo_many(
        &mut self,
        n: usize,
        shoe: &mut ShoeTracker,
        count: &mut CountEngine,
    ) -> Result<Vec<DealEvent>, UndoError> {
        self.undo_many_with(n, shoe, count, |_| {})
    }

    /// Like [`HistoryStack::undo_many`], calling `on_undo` with each event
    /// right after it is reverted.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::InvalidCount`] unless `1 <= n <= available_undos()`.
    pub fn undo_many_with<F>(
        &mut self,
        n: usize,
        shoe: &mut ShoeTracker,
        count: &mut CountEngine,
        mut on_undo: F,
    ) -> Result<Vec<DealEvent>, UndoError>
    where
        F: FnMut(DealEvent),
    {
        let available = self.available_undos();
        if n == 0 || n > available {
            return Err(UndoError::InvalidCount {
                requested: n,
                available,
            });
        }

        let mut undone = Vec::with_capacity(n);
        for _ in 0..n {
            let event = self.undo_one(shoe, count)?;
            on_undo(event);
            undone.push(event);
        }
        Ok(undone)
    }
}
