//! Contest configuration and round dispatch
//!
//! This module defines the contest structure embedded in the page, the per
//! item round configurations, and the runtime dispatch over the two round
//! types. It is the central coordination layer between the round controller
//! and the individual round implementations.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    player::{PlaybackState, PlayerHandle},
    score::ScoreSheet,
    screen::Screen,
};

use super::{clip, question};

/// A complete contest: an ordered list of rounds with a title
///
/// This is the single structured payload embedded in the page. It is parsed
/// and validated once at load time; a malformed payload fails fast.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct Contest {
    /// The title of the contest
    #[garde(length(max = crate::constants::contest::MAX_TITLE_LENGTH))]
    title: String,
    /// The ordered items of the contest
    #[garde(length(max = crate::constants::contest::MAX_ITEMS_COUNT), dive)]
    items: Vec<ItemConfig>,
}

/// Configuration for a single contest item
///
/// Each item is either a multiple choice question round or an audio clip
/// round, carrying the configuration specific to that round type.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub enum ItemConfig {
    /// A multiple choice question with predefined answer choices
    Question(#[garde(dive)] question::RoundConfig),
    /// A randomized audio clip snippet
    Clip(#[garde(dive)] clip::RoundConfig),
}

impl ItemConfig {
    /// Converts this configuration into a runtime round state
    ///
    /// # Returns
    ///
    /// A new `RoundState` initialized from this configuration
    pub fn to_state(&self) -> RoundState {
        match self {
            Self::Question(config) => RoundState::Question(config.to_state()),
            Self::Clip(config) => RoundState::Clip(config.to_state()),
        }
    }
}

/// Represents the currently active round with its runtime state
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentRound {
    /// The index of the current round in the item list
    pub index: usize,
    /// The runtime state of the current round
    pub state: RoundState,
}

/// Runtime state for a round during the contest
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum RoundState {
    /// Runtime state for a question round
    Question(question::State),
    /// Runtime state for a clip round
    Clip(clip::State),
}

/// Errors loading a contest payload
#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not valid JSON
    #[error("contest payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The payload violates a structural bound
    #[error("contest payload failed validation: {0}")]
    Invalid(#[from] garde::Report),
    /// A question marks a correct choice that does not exist
    #[error("question {index} marks correct choice {correct} out of {count} choices")]
    CorrectOutOfRange {
        /// Index of the offending item
        index: usize,
        /// The out-of-range correct index
        correct: usize,
        /// Number of choices the question actually has
        count: usize,
    },
}

impl Contest {
    /// Parses and validates a contest from the embedded JSON payload
    ///
    /// # Arguments
    ///
    /// * `payload` - The JSON payload embedded in the page
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the payload is not valid JSON, violates a
    /// structural bound, or marks a correct choice that does not exist.
    pub fn from_json(payload: &str) -> Result<Self, Error> {
        let contest: Self = serde_json::from_str(payload)?;
        contest.validate()?;

        for (index, item) in contest.items.iter().enumerate() {
            if let ItemConfig::Question(config) = item {
                if !config.correct_in_range() {
                    return Err(Error::CorrectOutOfRange {
                        index,
                        correct: config.correct(),
                        count: config.choices().len(),
                    });
                }
            }
        }

        Ok(contest)
    }

    /// Creates a contest from already constructed parts
    ///
    /// # Arguments
    ///
    /// * `title` - The contest title
    /// * `items` - The ordered items of the contest
    pub fn new(title: impl Into<String>, items: Vec<ItemConfig>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Returns the contest title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered items of the contest
    pub fn items(&self) -> &[ItemConfig] {
        &self.items
    }

    /// Returns the item at the given index, if it exists
    pub fn item(&self, index: usize) -> Option<&ItemConfig> {
        self.items.get(index)
    }

    /// Returns the number of items in this contest
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if this contest contains any items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RoundState {
    /// Starts the round
    ///
    /// # Arguments
    ///
    /// * `screen` - The render boundary to announce through
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    pub fn play<T: Screen>(&mut self, screen: &T, index: usize, count: usize) {
        match self {
            Self::Question(state) => state.play(screen, index, count),
            Self::Clip(state) => state.play(screen),
        }
    }

    /// Routes a selection to the active round
    ///
    /// Selections only mean something to question rounds; a clip round
    /// ignores them.
    ///
    /// # Arguments
    ///
    /// * `choice` - Index of the selected choice
    /// * `sheet` - The score sheet recording selections and points
    /// * `screen` - The render boundary to announce through
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    pub fn receive_answer<T: Screen>(
        &mut self,
        choice: usize,
        sheet: &mut ScoreSheet,
        screen: &T,
        index: usize,
        count: usize,
    ) {
        match self {
            Self::Question(state) => state.receive_answer(choice, sheet, screen, index, count),
            Self::Clip(_) => {
                tracing::debug!(choice, "selection during a clip round, ignoring");
            }
        }
    }

    /// Routes the player's ready notification to the active round
    ///
    /// Ready notifications only mean something to clip rounds; a question
    /// round ignores them.
    ///
    /// # Arguments
    ///
    /// * `handle` - The live player handle
    /// * `screen` - The render boundary to announce through
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    pub fn on_ready<H: PlayerHandle, T: Screen>(
        &mut self,
        handle: &mut H,
        screen: &T,
        index: usize,
        count: usize,
    ) {
        match self {
            Self::Clip(state) => state.on_ready(handle, screen, index, count),
            Self::Question(_) => {
                tracing::debug!("player ready during a question round, ignoring");
            }
        }
    }

    /// Routes a playback state change to the active round
    ///
    /// # Arguments
    ///
    /// * `playback` - The reported playback state
    /// * `handle` - The live player handle
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    pub fn on_state_change<
        H: PlayerHandle,
        T: Screen,
        S: FnMut(crate::AlarmMessage, std::time::Duration),
    >(
        &mut self,
        playback: PlaybackState,
        handle: &mut H,
        screen: &T,
        schedule_message: S,
        index: usize,
        count: usize,
    ) {
        match self {
            Self::Clip(state) => {
                state.on_state_change(playback, handle, screen, schedule_message, index, count);
            }
            Self::Question(_) => {
                tracing::debug!(?playback, "playback change during a question round, ignoring");
            }
        }
    }

    /// Routes a scheduled alarm to the active round
    ///
    /// # Arguments
    ///
    /// * `alarm` - The alarm message to process
    /// * `handle` - The live player handle
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    pub fn receive_alarm<
        H: PlayerHandle,
        T: Screen,
        S: FnMut(crate::AlarmMessage, std::time::Duration),
    >(
        &mut self,
        alarm: &clip::AlarmMessage,
        handle: &mut H,
        screen: &T,
        schedule_message: S,
        index: usize,
        count: usize,
    ) {
        match self {
            Self::Clip(state) => {
                state.receive_alarm(alarm, handle, screen, schedule_message, index, count);
            }
            Self::Question(_) => {
                tracing::debug!("clip alarm during a question round, ignoring");
            }
        }
    }

    /// Reports whether the continue affordance may conclude this round
    ///
    /// # Returns
    ///
    /// `true` once the round has run its course, `false` before that
    pub fn receive_proceed(&self) -> bool {
        match self {
            Self::Question(state) => state.receive_proceed(),
            Self::Clip(state) => state.receive_proceed(),
        }
    }

    /// Generates a synchronization message for the round's current view
    ///
    /// # Arguments
    ///
    /// * `sheet` - The score sheet holding any recorded selection
    /// * `index` - The current round index
    /// * `count` - The total number of rounds
    ///
    /// # Returns
    ///
    /// A crate-level `SyncMessage` describing the round's current view
    pub fn state_message(
        &self,
        sheet: &ScoreSheet,
        index: usize,
        count: usize,
    ) -> crate::SyncMessage {
        match self {
            Self::Question(state) => state.state_message(sheet, index, count).into(),
            Self::Clip(state) => state.state_message(index, count).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_payload() -> String {
        r#"{
            "title": "Database night",
            "items": [
                {
                    "Question": {
                        "prompt": "Which statement removes every row?",
                        "choices": ["DELETE without WHERE", "SELECT *", "EXPLAIN"],
                        "correct": 0,
                        "points": 10
                    }
                },
                {
                    "Clip": {
                        "media": { "Video": { "Hosted": { "id": "mystery-track" } } },
                        "snippet": 10
                    }
                }
            ]
        }"#
        .to_string()
    }

    #[test]
    fn test_from_json_accepts_valid_payload() {
        let contest = Contest::from_json(&create_test_payload()).unwrap();

        assert_eq!(contest.title(), "Database night");
        assert_eq!(contest.len(), 2);
        assert!(!contest.is_empty());
        assert!(matches!(contest.item(0), Some(ItemConfig::Question(_))));
        assert!(matches!(contest.item(1), Some(ItemConfig::Clip(_))));
        assert!(contest.item(2).is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        let result = Contest::from_json("{not json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_from_json_rejects_out_of_range_correct() {
        let payload = r#"{
            "title": "Broken",
            "items": [
                {
                    "Question": {
                        "prompt": "Prompt",
                        "choices": ["A", "B"],
                        "correct": 5,
                        "points": 10
                    }
                }
            ]
        }"#;

        let result = Contest::from_json(payload);
        assert!(matches!(
            result,
            Err(Error::CorrectOutOfRange {
                index: 0,
                correct: 5,
                count: 2,
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_structural_violations() {
        let payload = r#"{
            "title": "Broken",
            "items": [
                {
                    "Question": {
                        "prompt": "Prompt",
                        "choices": ["Only one"],
                        "correct": 0,
                        "points": 10
                    }
                }
            ]
        }"#;

        let result = Contest::from_json(payload);
        assert!(matches!(result, Err(Error::Invalid(_))));
    }

    #[test]
    fn test_item_config_to_state() {
        let contest = Contest::from_json(&create_test_payload()).unwrap();

        let states: Vec<RoundState> = contest.items().iter().map(ItemConfig::to_state).collect();
        assert!(matches!(states[0], RoundState::Question(_)));
        assert!(matches!(states[1], RoundState::Clip(_)));
    }
}
