//! Score sheet and selection recording
//!
//! This module tracks the single participant's recorded selections and the
//! accumulated score across the contest. Each item gets at most one recorded
//! answer for its whole lifetime; the total only ever grows.

use serde::{Deserialize, Serialize};

/// One recorded selection for one item
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Answer {
    /// Index of the chosen answer within the item's choices
    pub choice: usize,
    /// Points this selection earned (zero for an incorrect choice)
    pub earned: u64,
}

/// Tracks selections and the accumulated score for one contest run
///
/// The sheet has one slot per item. A slot is written exactly once, when
/// the participant answers that item, and never overwritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Recorded selection per item, in item order
    recorded: Vec<Option<Answer>>,
    /// Total points earned so far
    total: u64,
}

impl ScoreSheet {
    /// Creates an empty sheet with one slot per item
    ///
    /// # Arguments
    ///
    /// * `len` - The number of items in the contest
    pub fn new(len: usize) -> Self {
        Self {
            recorded: vec![None; len],
            total: 0,
        }
    }

    /// Records a selection for the given item
    ///
    /// The first record for an item wins; later attempts are ignored and
    /// logged, leaving the sheet and the total untouched.
    ///
    /// # Arguments
    ///
    /// * `index` - Index of the item being answered
    /// * `choice` - Index of the chosen answer
    /// * `earned` - Points awarded for this selection
    ///
    /// # Returns
    ///
    /// `true` if the selection was recorded, `false` if the slot was
    /// already taken or the index is out of range
    pub fn record(&mut self, index: usize, choice: usize, earned: u64) -> bool {
        match self.recorded.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(Answer { choice, earned });
                self.total += earned;
                true
            }
            Some(_) => {
                tracing::warn!(index, "selection already recorded, ignoring");
                false
            }
            None => {
                tracing::warn!(index, "selection index out of range, ignoring");
                false
            }
        }
    }

    /// Returns the recorded selection for an item, if any
    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.recorded.get(index).and_then(Option::as_ref)
    }

    /// Checks whether an item already has a recorded selection
    pub fn is_recorded(&self, index: usize) -> bool {
        self.answer(index).is_some()
    }

    /// Returns the total points earned so far
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of item slots on the sheet
    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    /// Checks whether the sheet has no item slots
    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }
}
