//! Multiple choice question round implementation
//!
//! This module implements the question round type. A question round presents
//! a prompt with several answer choices, accepts exactly one selection,
//! reveals the correct choice, and awards the item's points when the
//! selection was correct. The module handles single-fire answer recording,
//! scoring, and the continue affordance that moves the contest along.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{score::ScoreSheet, screen::Screen};

/// Represents the current phase of a question round
///
/// Question rounds progress through distinct phases: first showing the
/// prompt with its choices, then showing the reveal after the single
/// permitted selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoundPhase {
    /// Initial state before the round has been rendered
    #[default]
    Unstarted,
    /// Displaying the prompt and choices, waiting for a selection
    Rendered,
    /// A selection was recorded and the correct choice is revealed
    Answered,
}

/// Configuration for a multiple choice question round
///
/// This struct defines all the parameters needed to present one question:
/// the prompt, the ordered answer choices, which choice is correct, and the
/// points awarded for picking it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoundConfig {
    /// The prompt text displayed to the participant
    #[garde(length(max = crate::constants::question::MAX_PROMPT_LENGTH))]
    prompt: String,
    /// The ordered answer choices for this question
    #[garde(
        length(min = crate::constants::question::MIN_CHOICE_COUNT, max = crate::constants::question::MAX_CHOICE_COUNT),
        inner(length(max = crate::constants::question::MAX_CHOICE_LENGTH))
    )]
    choices: Vec<String>,
    /// Index of the correct choice
    #[garde(skip)]
    correct: usize,
    /// Points awarded for selecting the correct choice
    #[garde(skip)]
    points: u64,
}

impl RoundConfig {
    /// Creates a new question round configuration
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt text
    /// * `choices` - The ordered answer choices
    /// * `correct` - Index of the correct choice
    /// * `points` - Points awarded for a correct selection
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct: usize,
        points: u64,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            correct,
            points,
        }
    }

    /// Creates a new runtime state from this configuration
    ///
    /// # Returns
    ///
    /// A new `State` ready for rendering
    pub fn to_state(&self) -> State {
        State {
            config: self.clone(),
            phase: RoundPhase::Unstarted,
        }
    }

    /// Returns the prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered answer choices
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Returns the index of the correct choice
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Returns the points awarded for a correct selection
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Checks that the correct index actually addresses one of the choices
    pub(crate) fn correct_in_range(&self) -> bool {
        self.correct < self.choices.len()
    }
}

/// Runtime state for a question round during the contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// The configuration this state was created from
    config: RoundConfig,
    /// Current phase of the round
    phase: RoundPhase,
}

/// Update messages sent to the page during question rounds
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Announces the prompt with its choices
    Prompt {
        /// Index of the current round (0-based)
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
        /// The prompt text being asked
        prompt: String,
        /// The ordered answer choices
        choices: Vec<String>,
        /// Points at stake on this question
        points: u64,
    },
    /// Reveals the correct choice after a selection
    ///
    /// The page highlights the correct choice regardless of correctness and
    /// marks the selected choice distinctly when it was wrong. All choice
    /// controls are disabled from this point on.
    Reveal {
        /// Index of the correct choice
        correct: usize,
        /// Index of the recorded selection
        selected: usize,
        /// Total score after this selection
        score: u64,
    },
    /// Reveals the continue affordance
    Proceed {
        /// Whether this was the last round, relabeling the affordance to
        /// lead into the results instead of the next round
        terminal: bool,
    },
}

/// Synchronization messages for rebuilding a question round's view
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// Synchronizes the prompt phase
    Prompt {
        /// Index of the current round
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
        /// The prompt text being asked
        prompt: String,
        /// The ordered answer choices
        choices: Vec<String>,
        /// Points at stake on this question
        points: u64,
    },
    /// Synchronizes the reveal phase
    Reveal {
        /// Index of the current round
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
        /// The prompt text that was asked
        prompt: String,
        /// The ordered answer choices
        choices: Vec<String>,
        /// Index of the correct choice
        correct: usize,
        /// Index of the recorded selection, if one was recorded
        selected: Option<usize>,
        /// Total score after this selection
        score: u64,
    },
}

impl State {
    /// Renders the question by announcing the prompt and its choices
    ///
    /// Rendering is what moves the contest cursor; the round controller
    /// counts this call, not the eventual answer. Re-rendering an already
    /// rendered round is a structural no-op.
    ///
    /// # Arguments
    ///
    /// * `screen` - The render boundary to announce through
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    pub fn play<T: Screen>(&mut self, screen: &T, index: usize, count: usize) {
        if self.change_state(RoundPhase::Unstarted, RoundPhase::Rendered) {
            screen.send_message(
                &UpdateMessage::Prompt {
                    index,
                    count,
                    prompt: self.config.prompt.clone(),
                    choices: self.config.choices.clone(),
                    points: self.config.points,
                }
                .into(),
            );
        }
    }

    /// Handles a selection made by the participant
    ///
    /// Only the first selection on a rendered round counts; anything after
    /// that is ignored (the page disables the controls, the engine enforces
    /// it). A valid selection is recorded on the score sheet exactly once,
    /// awards the item's points when correct, and reveals both the correct
    /// choice and the continue affordance.
    ///
    /// # Arguments
    ///
    /// * `choice` - Index of the selected choice
    /// * `sheet` - The score sheet recording selections and points
    /// * `screen` - The render boundary to announce through
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    pub fn receive_answer<T: Screen>(
        &mut self,
        choice: usize,
        sheet: &mut ScoreSheet,
        screen: &T,
        index: usize,
        count: usize,
    ) {
        if self.phase != RoundPhase::Rendered {
            tracing::debug!(choice, "selection outside the answering window, ignoring");
            return;
        }
        if choice >= self.config.choices.len() {
            tracing::debug!(choice, "selection does not address a choice, ignoring");
            return;
        }

        self.phase = RoundPhase::Answered;

        let earned = if choice == self.config.correct {
            self.config.points
        } else {
            0
        };
        sheet.record(index, choice, earned);

        screen.send_message(
            &UpdateMessage::Reveal {
                correct: self.config.correct,
                selected: choice,
                score: sheet.total(),
            }
            .into(),
        );
        screen.send_message(
            &UpdateMessage::Proceed {
                terminal: index + 1 == count,
            }
            .into(),
        );
    }

    /// Reports whether the continue affordance may conclude this round
    ///
    /// # Returns
    ///
    /// `true` once a selection has been recorded, `false` before that
    pub fn receive_proceed(&self) -> bool {
        self.phase == RoundPhase::Answered
    }

    /// Generates a synchronization message for the current phase
    ///
    /// # Arguments
    ///
    /// * `sheet` - The score sheet holding any recorded selection
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    ///
    /// # Returns
    ///
    /// A `SyncMessage` describing the round's current view
    pub fn state_message(&self, sheet: &ScoreSheet, index: usize, count: usize) -> SyncMessage {
        match self.phase {
            RoundPhase::Unstarted | RoundPhase::Rendered => SyncMessage::Prompt {
                index,
                count,
                prompt: self.config.prompt.clone(),
                choices: self.config.choices.clone(),
                points: self.config.points,
            },
            RoundPhase::Answered => SyncMessage::Reveal {
                index,
                count,
                prompt: self.config.prompt.clone(),
                choices: self.config.choices.clone(),
                correct: self.config.correct,
                selected: sheet.answer(index).map(|answer| answer.choice),
                score: sheet.total(),
            },
        }
    }

    /// Attempts to transition from one phase to another
    ///
    /// # Arguments
    ///
    /// * `before` - Expected current phase
    /// * `after` - Target phase to transition to
    ///
    /// # Returns
    ///
    /// `true` if the transition was taken, `false` if the current phase
    /// didn't match
    fn change_state(&mut self, before: RoundPhase, after: RoundPhase) -> bool {
        if self.phase == before {
            self.phase = after;

            true
        } else {
            false
        }
    }

    /// Returns the current phase of the round
    pub(crate) fn phase(&self) -> RoundPhase {
        self.phase
    }
}
