//! Round controller and contest state management
//!
//! This module contains the main controller driving a contest from its first
//! round to the final summary. The controller owns every transient per-round
//! resource: the cursor over the item list, the score sheet, the single live
//! player handle, and the countdown alarms. Exactly one round is active at
//! any time; starting a new round always tears down whatever the previous
//! round left behind first.

use std::fmt::Debug;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    AlarmMessage,
    contest::config::{Contest, CurrentRound, ItemConfig},
    player::{PlayerEvent, PlayerHandle, PlayerProvider},
    report::{self, ResultSink},
    score::ScoreSheet,
    screen::Screen,
};

/// Represents the current phase of the contest
///
/// The contest progresses from the idle page, through one round at a time,
/// to the terminal finished state showing the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum State {
    /// The page has loaded but no round has been rendered yet
    Idle,
    /// Currently presenting a specific round
    Round(Box<CurrentRound>),
    /// All rounds are done; the summary is showing
    Finished,
}

/// Headline shown above the quiz, switched per round kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenTitle {
    /// A question round is showing
    Trivia,
    /// A clip round is showing
    AudioQuiz,
    /// The contest is over
    Finished,
}

/// Messages received from the participant's interactions with the page
#[derive(Debug, Deserialize, Clone, Copy)]
pub enum IncomingMessage {
    /// A choice was clicked on a question round
    Answer(usize),
    /// The continue affordance was clicked
    Proceed,
    /// The submit affordance on the results view was clicked
    Submit,
}

/// Update messages sent to the page about contest-level changes
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Switches the page headline
    Title(ScreenTitle),
    /// Presents the final summary
    Summary(report::SummaryMessage),
    /// Navigates the page to the given location after submission
    Redirect(String),
}

/// Sync messages describing the contest-level view
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// No round has been rendered yet
    NotStarted,
    /// The contest is over; re-render the summary
    Summary(report::SummaryMessage),
}

/// The round controller for one contest run
///
/// This struct lives for the whole page session. It is created once from
/// the embedded contest payload and a player provider, and mutated only
/// through its event entry points: page interactions, player callbacks, and
/// scheduled alarms.
pub struct Game<P: PlayerProvider> {
    /// The contest configuration containing all items
    contest: Contest,
    /// Factory for embedded player instances
    provider: P,
    /// The single live player handle, if a clip round is active
    player: Option<P::Handle>,
    /// Recorded selections and accumulated score
    sheet: ScoreSheet,
    /// Current phase of the contest
    state: State,
    /// Number of rounds rendered so far; the contest cursor
    rendered: usize,
    /// Final summary, computed once on demand
    summary: once_cell_serde::sync::OnceCell<report::SummaryMessage>,
    /// Whether the results were already handed to the submission sink
    submitted: bool,
}

impl<P: PlayerProvider> Debug for Game<P> {
    /// Custom debug implementation that avoids printing the player handle
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("contest", &self.contest)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<P: PlayerProvider> Game<P> {
    /// Creates a new controller for the given contest
    ///
    /// # Arguments
    ///
    /// * `contest` - The parsed and validated contest payload
    /// * `provider` - Factory for embedded player instances
    ///
    /// # Returns
    ///
    /// A new controller in the idle state, ready for [`Game::play`]
    pub fn new(contest: Contest, provider: P) -> Self {
        let sheet = ScoreSheet::new(contest.len());
        Self {
            contest,
            provider,
            player: None,
            sheet,
            state: State::Idle,
            rendered: 0,
            summary: once_cell_serde::sync::OnceCell::new(),
            submitted: false,
        }
    }

    /// Starts the contest by rendering the first round
    ///
    /// An empty contest goes straight to the summary. Calling this again
    /// after the contest started is a no-op.
    ///
    /// # Arguments
    ///
    /// * `screen` - The render boundary to announce through
    pub fn play<T: Screen>(&mut self, screen: &T) {
        if matches!(self.state, State::Idle) {
            self.round_play(0, screen);
        } else {
            tracing::debug!("contest already started, ignoring");
        }
    }

    /// Handles an interaction coming from the page
    ///
    /// # Arguments
    ///
    /// * `message` - The incoming interaction
    /// * `screen` - The render boundary to announce through
    /// * `sink` - The submission sink used when the results are sent
    pub fn receive_message<T: Screen, R: ResultSink>(
        &mut self,
        message: IncomingMessage,
        screen: &T,
        sink: &R,
    ) {
        match message {
            IncomingMessage::Answer(choice) => {
                if let State::Round(current) = &mut self.state {
                    current.state.receive_answer(
                        choice,
                        &mut self.sheet,
                        screen,
                        current.index,
                        self.contest.len(),
                    );
                } else {
                    tracing::debug!(choice, "selection outside an active round, ignoring");
                }
            }
            IncomingMessage::Proceed => {
                let next = match &self.state {
                    State::Round(current) if current.state.receive_proceed() => {
                        Some(current.index + 1)
                    }
                    _ => None,
                };
                match next {
                    Some(next) => self.round_play(next, screen),
                    None => {
                        tracing::debug!("continue request outside a concluded round, ignoring");
                    }
                }
            }
            IncomingMessage::Submit => self.submit(screen, sink),
        }
    }

    /// Handles an event forwarded from the embedded player's callbacks
    ///
    /// Events arriving while no clip round is active, or after the round's
    /// player was torn down, belong to a destroyed player and are dropped.
    ///
    /// # Arguments
    ///
    /// * `event` - The forwarded player event
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    pub fn receive_player_event<T: Screen, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        event: PlayerEvent,
        screen: &T,
        mut schedule_message: S,
    ) {
        let State::Round(current) = &mut self.state else {
            tracing::debug!(?event, "player event outside an active round, ignoring");
            return;
        };
        let Some(handle) = self.player.as_mut() else {
            tracing::debug!(?event, "player event without a live player, ignoring");
            return;
        };

        let count = self.contest.len();
        match event {
            PlayerEvent::Ready => current.state.on_ready(handle, screen, current.index, count),
            PlayerEvent::StateChange(playback) => current.state.on_state_change(
                playback,
                handle,
                screen,
                &mut schedule_message,
                current.index,
                count,
            ),
        }
    }

    /// Handles a scheduled alarm coming due
    ///
    /// Alarms carry the index of the round that armed them; an alarm whose
    /// round is no longer current outlived its round and is dropped, so a
    /// countdown can never leak into a later round.
    ///
    /// # Arguments
    ///
    /// * `alarm` - The alarm message coming due
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    pub fn receive_alarm<T: Screen, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        alarm: &AlarmMessage,
        screen: &T,
        mut schedule_message: S,
    ) {
        let State::Round(current) = &mut self.state else {
            tracing::debug!("alarm outside an active round, ignoring");
            return;
        };
        let AlarmMessage::Clip(clip_alarm) = alarm;
        if clip_alarm.index() != current.index {
            tracing::debug!(
                alarm_index = clip_alarm.index(),
                current_index = current.index,
                "alarm for a previous round, ignoring"
            );
            return;
        }
        let Some(handle) = self.player.as_mut() else {
            tracing::debug!("alarm without a live player, ignoring");
            return;
        };

        current.state.receive_alarm(
            clip_alarm,
            handle,
            screen,
            &mut schedule_message,
            current.index,
            self.contest.len(),
        );
    }

    /// Generates a synchronization message for the contest's current view
    ///
    /// # Returns
    ///
    /// A `SyncMessage` from which the page can rebuild its view; rendering
    /// it repeatedly yields the same output for unchanged state
    pub fn state_message(&self) -> crate::SyncMessage {
        match &self.state {
            State::Idle => SyncMessage::NotStarted.into(),
            State::Round(current) => {
                current
                    .state
                    .state_message(&self.sheet, current.index, self.contest.len())
            }
            State::Finished => SyncMessage::Summary(self.cached_summary().clone()).into(),
        }
    }

    /// Returns the number of rounds rendered so far
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Returns the total points earned so far
    pub fn score(&self) -> u64 {
        self.sheet.total()
    }

    /// Checks whether the contest reached its terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// Renders the round at the given index, or the summary past the end
    ///
    /// This is the only place the contest cursor moves: rendering a round
    /// counts it, answering does not. Any previous round's player handle is
    /// destroyed before the new round starts, so at most one player is ever
    /// live.
    fn round_play<T: Screen>(&mut self, index: usize, screen: &T) {
        if let Some(handle) = self.player.take() {
            handle.destroy();
        }

        match self.contest.item(index) {
            Some(item) => {
                let mut state = item.to_state();
                match item {
                    ItemConfig::Question(_) => {
                        screen.send_message(&UpdateMessage::Title(ScreenTitle::Trivia).into());
                    }
                    ItemConfig::Clip(config) => {
                        screen.send_message(&UpdateMessage::Title(ScreenTitle::AudioQuiz).into());
                        self.player = Some(self.provider.create(config.media()));
                    }
                }
                state.play(screen, index, self.contest.len());
                self.rendered += 1;
                self.state = State::Round(Box::new(CurrentRound { index, state }));
            }
            None => self.announce_summary(screen),
        }
    }

    /// Moves the contest to its terminal state and presents the summary
    fn announce_summary<T: Screen>(&mut self, screen: &T) {
        if let Some(handle) = self.player.take() {
            handle.destroy();
        }
        self.state = State::Finished;

        screen.send_message(&UpdateMessage::Title(ScreenTitle::Finished).into());
        let summary = self.cached_summary().clone();
        screen.send_message(&UpdateMessage::Summary(summary).into());
    }

    /// Hands the results to the submission sink, once
    ///
    /// The submission is fire-and-forget: a response carrying a redirect
    /// navigates the page there, anything else is logged, and a failure is
    /// logged without retry. A second submit request changes nothing.
    fn submit<T: Screen, R: ResultSink>(&mut self, screen: &T, sink: &R) {
        if !matches!(self.state, State::Finished) {
            tracing::debug!("submission requested before the contest finished, ignoring");
            return;
        }
        if self.submitted {
            tracing::debug!("results already submitted, ignoring");
            return;
        }
        self.submitted = true;

        let submission = report::Submission::assemble(&self.contest, &self.sheet);
        match sink.submit(&submission) {
            Ok(response) => match response.redirect {
                Some(location) => {
                    screen.send_message(&UpdateMessage::Redirect(location).into());
                }
                None => tracing::info!("submission accepted without redirect"),
            },
            Err(error) => tracing::error!(%error, "failed to submit contest results"),
        }
    }

    /// Returns the final summary, computing it on first use
    fn cached_summary(&self) -> &report::SummaryMessage {
        self.summary
            .get_or_init(|| report::summarize(&self.contest, &self.sheet))
    }
}
