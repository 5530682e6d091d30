//! Audio clip round implementation
//!
//! This module implements the clip round type. A clip round loads a hosted
//! clip through the player adapter, seeks to a random offset, plays a fixed
//! snippet of it while a countdown runs, and forcibly stops playback when
//! the snippet is over even if the player keeps going. A clip whose duration
//! cannot be determined, or is too short for the snippet, skips playback
//! without derailing the contest.

use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    player::{PlaybackState, PlayerHandle},
    screen::Screen,
};

use super::media::Media;

/// Represents the current phase of a clip round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoundPhase {
    /// Initial state before the round has started
    #[default]
    Unstarted,
    /// Waiting for the player to load the clip
    Loading,
    /// The player reported ready and was sent to the snippet offset
    Seeking,
    /// The snippet is playing and the countdown is running
    Playing,
    /// Playback is over (naturally, forcibly, or skipped)
    Stopped,
}

type ValidationResult = garde::Result;

/// Validates that the snippet length falls within the configured bounds
fn validate_snippet(val: &Duration) -> ValidationResult {
    let bounds =
        crate::constants::snippet::MIN_SECONDS..=crate::constants::snippet::MAX_SECONDS;
    if bounds.contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "snippet is outside of the bounds [{},{}]",
            crate::constants::snippet::MIN_SECONDS,
            crate::constants::snippet::MAX_SECONDS,
        )))
    }
}

fn default_snippet() -> Duration {
    Duration::from_secs(crate::constants::snippet::DEFAULT_SECONDS)
}

/// Configuration for a clip round
///
/// This struct defines the hosted clip to play and how long the snippet
/// lasts. The snippet length defaults to ten seconds when the payload does
/// not specify one.
#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoundConfig {
    /// The hosted clip this round plays
    #[garde(dive)]
    media: Media,
    /// Length of the snippet the clip is truncated to
    #[garde(custom(|v, _| validate_snippet(v)))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_snippet")]
    snippet: Duration,
}

impl RoundConfig {
    /// Creates a new clip round configuration
    ///
    /// # Arguments
    ///
    /// * `media` - The hosted clip to play
    /// * `snippet` - Length of the snippet the clip is truncated to
    pub fn new(media: Media, snippet: Duration) -> Self {
        Self { media, snippet }
    }

    /// Creates a new runtime state from this configuration
    ///
    /// # Returns
    ///
    /// A new `State` ready for playback
    pub fn to_state(&self) -> State {
        State {
            config: self.clone(),
            phase: RoundPhase::Unstarted,
            remaining: 0,
        }
    }

    /// Returns the hosted clip this round plays
    pub fn media(&self) -> &Media {
        &self.media
    }

    /// Returns the snippet length
    pub fn snippet(&self) -> Duration {
        self.snippet
    }
}

/// Runtime state for a clip round during the contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// The configuration this state was created from
    config: RoundConfig,
    /// Current phase of the round
    phase: RoundPhase,
    /// Seconds left on the countdown display
    remaining: u64,
}

/// Update messages sent to the page during clip rounds
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Shows the loading screen while the player loads the clip
    Loading {
        /// A quip to show under the spinner
        tip: String,
    },
    /// Updates the countdown display
    Countdown {
        /// Seconds left until the snippet ends
        remaining: u64,
    },
    /// Clears the countdown display
    CountdownCleared,
    /// Hides the media view; the snippet is over
    Stopped,
    /// Reveals the continue affordance
    Proceed {
        /// Whether this was the last round, relabeling the affordance to
        /// lead into the results instead of the next round
        terminal: bool,
    },
}

/// Synchronization messages for rebuilding a clip round's view
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// The clip is still loading
    Loading {
        /// Index of the current round
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
    },
    /// The snippet is playing
    Playing {
        /// Index of the current round
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
        /// Seconds left until the snippet ends
        remaining: u64,
    },
    /// The snippet is over
    Stopped {
        /// Index of the current round
        index: usize,
        /// Total number of rounds in the contest
        count: usize,
    },
}

/// Alarm messages for timed events in clip rounds
///
/// Each alarm carries the round index it was scheduled for so that alarms
/// outliving their round are dropped by the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Advances the countdown display by one time unit
    Tick {
        /// Index of the round the tick belongs to
        index: usize,
    },
    /// Forces playback to stop at the end of the snippet
    ForceStop {
        /// Index of the round the stop belongs to
        index: usize,
    },
}

impl AlarmMessage {
    /// Returns the round index this alarm was scheduled for
    pub fn index(&self) -> usize {
        match self {
            Self::Tick { index } | Self::ForceStop { index } => *index,
        }
    }
}

impl State {
    /// Starts the clip round by showing the loading screen
    ///
    /// The round controller creates the player handle around this call; the
    /// round itself waits for the handle's `Ready` event before doing
    /// anything with it.
    ///
    /// # Arguments
    ///
    /// * `screen` - The render boundary to announce through
    pub fn play<T: Screen>(&mut self, screen: &T) {
        if self.change_state(RoundPhase::Unstarted, RoundPhase::Loading) {
            screen.send_message(
                &UpdateMessage::Loading {
                    tip: crate::tips::pick().to_owned(),
                }
                .into(),
            );
        }
    }

    /// Handles the player's ready notification
    ///
    /// Picks a start offset uniformly at random in `[0, duration - snippet)`
    /// and starts playback there. A clip with a missing, non-finite, or
    /// too-short duration never starts playing: the failure is logged and
    /// the round concludes immediately so the contest can move on.
    ///
    /// # Arguments
    ///
    /// * `handle` - The live player handle for this round's clip
    /// * `screen` - The render boundary to announce through
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    pub fn on_ready<H: PlayerHandle, T: Screen>(
        &mut self,
        handle: &mut H,
        screen: &T,
        index: usize,
        count: usize,
    ) {
        if !self.change_state(RoundPhase::Loading, RoundPhase::Seeking) {
            tracing::debug!(index, "ready notification outside the loading phase, ignoring");
            return;
        }

        let snippet = self.config.snippet.as_secs_f64();
        match handle
            .duration()
            .filter(|duration| duration.is_finite() && *duration > snippet)
        {
            Some(duration) => {
                let offset = (fastrand::f64() * (duration - snippet)).floor();
                handle.seek_to(offset);
                handle.play();
            }
            None => {
                tracing::error!(
                    clip = self.config.media.id(),
                    "clip duration missing or shorter than the snippet, skipping playback"
                );
                self.conclude(screen, index, count);
            }
        }
    }

    /// Handles a playback state change reported by the player
    ///
    /// Once the player actually starts playing, the countdown display is
    /// started and two alarms are armed: a one-second tick chain for the
    /// display, and an unconditional stop at exactly the snippet length.
    /// The stop alarm is a hard timeout; it fires whether or not the player
    /// ever reports an end of playback. Natural `Ended` notifications stop
    /// the round the same way, and whichever of the two signals arrives
    /// first wins.
    ///
    /// # Arguments
    ///
    /// * `state` - The reported playback state
    /// * `handle` - The live player handle for this round's clip
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    pub fn on_state_change<H: PlayerHandle, T: Screen, S: FnMut(crate::AlarmMessage, Duration)>(
        &mut self,
        state: PlaybackState,
        handle: &mut H,
        screen: &T,
        mut schedule_message: S,
        index: usize,
        count: usize,
    ) {
        match state {
            PlaybackState::Playing => {
                if self.change_state(RoundPhase::Seeking, RoundPhase::Playing) {
                    self.remaining = self.config.snippet.as_secs();
                    screen.send_message(
                        &UpdateMessage::Countdown {
                            remaining: self.remaining,
                        }
                        .into(),
                    );
                    schedule_message(
                        AlarmMessage::Tick { index }.into(),
                        Duration::from_secs(crate::constants::snippet::TICK_SECONDS),
                    );
                    schedule_message(AlarmMessage::ForceStop { index }.into(), self.config.snippet);
                }
            }
            PlaybackState::Ended => self.stop(handle, screen, index, count),
            PlaybackState::Unstarted
            | PlaybackState::Paused
            | PlaybackState::Buffering
            | PlaybackState::Cued => {}
        }
    }

    /// Handles a scheduled alarm for this round
    ///
    /// Ticks advance the countdown display while the snippet is playing and
    /// re-arm themselves until the display reaches zero and clears. The
    /// forced stop truncates playback at the snippet length; if the clip
    /// already ended naturally it finds the round stopped and does nothing.
    ///
    /// # Arguments
    ///
    /// * `alarm` - The alarm message to process
    /// * `handle` - The live player handle for this round's clip
    /// * `screen` - The render boundary to announce through
    /// * `schedule_message` - Function to schedule delayed alarm messages
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    pub fn receive_alarm<H: PlayerHandle, T: Screen, S: FnMut(crate::AlarmMessage, Duration)>(
        &mut self,
        alarm: &AlarmMessage,
        handle: &mut H,
        screen: &T,
        mut schedule_message: S,
        index: usize,
        count: usize,
    ) {
        match alarm {
            AlarmMessage::Tick { .. } => {
                if self.phase == RoundPhase::Playing && self.remaining > 0 {
                    self.remaining -= 1;
                    if self.remaining == 0 {
                        screen.send_message(&UpdateMessage::CountdownCleared.into());
                    } else {
                        screen.send_message(
                            &UpdateMessage::Countdown {
                                remaining: self.remaining,
                            }
                            .into(),
                        );
                        schedule_message(
                            AlarmMessage::Tick { index }.into(),
                            Duration::from_secs(crate::constants::snippet::TICK_SECONDS),
                        );
                    }
                }
            }
            AlarmMessage::ForceStop { .. } => self.stop(handle, screen, index, count),
        }
    }

    /// Reports whether the continue affordance may conclude this round
    ///
    /// # Returns
    ///
    /// `true` once playback is over, `false` before that
    pub fn receive_proceed(&self) -> bool {
        self.phase == RoundPhase::Stopped
    }

    /// Generates a synchronization message for the current phase
    ///
    /// # Arguments
    ///
    /// * `index` - Current round index in the contest
    /// * `count` - Total number of rounds in the contest
    ///
    /// # Returns
    ///
    /// A `SyncMessage` describing the round's current view
    pub fn state_message(&self, index: usize, count: usize) -> SyncMessage {
        match self.phase {
            RoundPhase::Unstarted | RoundPhase::Loading | RoundPhase::Seeking => {
                SyncMessage::Loading { index, count }
            }
            RoundPhase::Playing => SyncMessage::Playing {
                index,
                count,
                remaining: self.remaining,
            },
            RoundPhase::Stopped => SyncMessage::Stopped { index, count },
        }
    }

    /// Stops the snippet if it is still live
    ///
    /// First completion signal wins: whichever of the natural end, the
    /// forced stop, or a skip arrives first moves the round to `Stopped`;
    /// any later signal finds the phase already moved and is a no-op.
    fn stop<H: PlayerHandle, T: Screen>(
        &mut self,
        handle: &mut H,
        screen: &T,
        index: usize,
        count: usize,
    ) {
        if matches!(self.phase, RoundPhase::Seeking | RoundPhase::Playing) {
            handle.stop();
            if self.remaining > 0 {
                self.remaining = 0;
                screen.send_message(&UpdateMessage::CountdownCleared.into());
            }
            self.conclude(screen, index, count);
        }
    }

    /// Moves the round to `Stopped` and reveals the continue affordance
    fn conclude<T: Screen>(&mut self, screen: &T, index: usize, count: usize) {
        self.phase = RoundPhase::Stopped;
        screen.send_message(&UpdateMessage::Stopped.into());
        screen.send_message(
            &UpdateMessage::Proceed {
                terminal: index + 1 == count,
            }
            .into(),
        );
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::media::Video;

    const SNIPPET: u64 = 10;

    fn create_test_config() -> RoundConfig {
        RoundConfig::new(
            Media::Video(Video::Hosted {
                id: "mystery-track".to_string(),
            }),
            Duration::from_secs(SNIPPET),
        )
    }

    #[derive(Debug, Clone)]
    struct MockScreen {
        messages:
            std::sync::Arc<std::sync::Mutex<std::collections::VecDeque<crate::UpdateMessage>>>,
    }

    impl MockScreen {
        fn new() -> Self {
            Self {
                messages: std::sync::Arc::new(std::sync::Mutex::new(
                    std::collections::VecDeque::new(),
                )),
            }
        }

        fn drain(&self) -> Vec<crate::UpdateMessage> {
            self.messages.lock().unwrap().drain(..).collect()
        }
    }

    impl Screen for MockScreen {
        fn send_message(&self, message: &crate::UpdateMessage) {
            self.messages.lock().unwrap().push_back(message.clone());
        }

        fn send_state(&self, _state: &crate::SyncMessage) {}
    }

    #[derive(Debug, Default)]
    struct FakeHandle {
        duration: Option<f64>,
        seeks: Vec<f64>,
        playing: bool,
        stopped: bool,
    }

    impl FakeHandle {
        fn with_duration(duration: f64) -> Self {
            Self {
                duration: Some(duration),
                ..Self::default()
            }
        }
    }

    impl PlayerHandle for FakeHandle {
        fn duration(&self) -> Option<f64> {
            self.duration
        }

        fn seek_to(&mut self, seconds: f64) {
            self.seeks.push(seconds);
        }

        fn play(&mut self) {
            self.playing = true;
        }

        fn stop(&mut self) {
            self.stopped = true;
        }

        fn destroy(self) {}
    }

    fn no_schedule(_msg: crate::AlarmMessage, _delay: Duration) {}

    #[test]
    fn test_config_validation() {
        let config = create_test_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_snippet_out_of_bounds() {
        let config = RoundConfig::new(
            Media::Video(Video::Hosted {
                id: "mystery-track".to_string(),
            }),
            Duration::from_secs(crate::constants::snippet::MAX_SECONDS + 1),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snippet_defaults_when_absent() {
        let config: RoundConfig =
            serde_json::from_str(r#"{"media":{"Video":{"Hosted":{"id":"mystery-track"}}}}"#)
                .unwrap();
        assert_eq!(
            config.snippet(),
            Duration::from_secs(crate::constants::snippet::DEFAULT_SECONDS)
        );
    }

    #[test]
    fn test_play_announces_loading_once() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();

        state.play(&screen);
        state.play(&screen);

        let messages = screen.drain();
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            &messages[0],
            crate::UpdateMessage::Clip(UpdateMessage::Loading { .. })
        ));
        assert_eq!(state.phase(), RoundPhase::Loading);
    }

    #[test]
    fn test_offset_stays_within_bounds() {
        let duration = 47.0;
        for _ in 0..200 {
            let config = create_test_config();
            let mut state = config.to_state();
            let screen = MockScreen::new();
            let mut handle = FakeHandle::with_duration(duration);

            state.play(&screen);
            state.on_ready(&mut handle, &screen, 0, 1);

            assert!(handle.playing);
            assert_eq!(handle.seeks.len(), 1);
            let offset = handle.seeks[0];
            assert!(offset >= 0.0);
            assert!(offset < duration - SNIPPET as f64);
        }
    }

    #[test]
    fn test_missing_duration_skips_playback() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::default();

        state.play(&screen);
        screen.drain();
        state.on_ready(&mut handle, &screen, 0, 1);

        assert!(!handle.playing);
        assert!(handle.seeks.is_empty());
        assert_eq!(state.phase(), RoundPhase::Stopped);

        let messages = screen.drain();
        assert!(matches!(
            &messages[0],
            crate::UpdateMessage::Clip(UpdateMessage::Stopped)
        ));
        assert!(matches!(
            &messages[1],
            crate::UpdateMessage::Clip(UpdateMessage::Proceed { terminal: true })
        ));
    }

    #[test]
    fn test_short_clip_skips_playback() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(SNIPPET as f64);

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 0, 1);

        assert!(!handle.playing);
        assert_eq!(state.phase(), RoundPhase::Stopped);
    }

    #[test]
    fn test_playing_starts_countdown_and_arms_alarms() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);
        let mut scheduled: Vec<(crate::AlarmMessage, Duration)> = Vec::new();

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 0, 1);
        screen.drain();

        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            |msg, delay| scheduled.push((msg, delay)),
            0,
            1,
        );

        assert_eq!(state.phase(), RoundPhase::Playing);

        let messages = screen.drain();
        assert!(matches!(
            &messages[0],
            crate::UpdateMessage::Clip(UpdateMessage::Countdown { remaining: SNIPPET })
        ));

        assert_eq!(scheduled.len(), 2);
        assert!(matches!(
            &scheduled[0],
            (
                crate::AlarmMessage::Clip(AlarmMessage::Tick { index: 0 }),
                delay,
            ) if *delay == Duration::from_secs(1)
        ));
        assert!(matches!(
            &scheduled[1],
            (
                crate::AlarmMessage::Clip(AlarmMessage::ForceStop { index: 0 }),
                delay,
            ) if *delay == Duration::from_secs(SNIPPET)
        ));
    }

    #[test]
    fn test_countdown_decreases_and_clears() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 0, 1);
        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        screen.drain();

        let mut displayed = Vec::new();
        for _ in 0..SNIPPET {
            state.receive_alarm(
                &AlarmMessage::Tick { index: 0 },
                &mut handle,
                &screen,
                no_schedule,
                0,
                1,
            );
            for message in screen.drain() {
                match message {
                    crate::UpdateMessage::Clip(UpdateMessage::Countdown { remaining }) => {
                        displayed.push(Some(remaining));
                    }
                    crate::UpdateMessage::Clip(UpdateMessage::CountdownCleared) => {
                        displayed.push(None);
                    }
                    other => panic!("unexpected message during countdown: {other:?}"),
                }
            }
        }

        let expected: Vec<Option<u64>> =
            (1..SNIPPET).rev().map(Some).chain([None]).collect();
        assert_eq!(displayed, expected);

        // further ticks after the display cleared change nothing
        state.receive_alarm(
            &AlarmMessage::Tick { index: 0 },
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        assert!(screen.drain().is_empty());
    }

    #[test]
    fn test_force_stop_truncates_playback() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 0, 3);
        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            no_schedule,
            0,
            3,
        );
        screen.drain();

        state.receive_alarm(
            &AlarmMessage::ForceStop { index: 0 },
            &mut handle,
            &screen,
            no_schedule,
            0,
            3,
        );

        assert!(handle.stopped);
        assert_eq!(state.phase(), RoundPhase::Stopped);

        let messages = screen.drain();
        assert!(matches!(
            &messages[0],
            crate::UpdateMessage::Clip(UpdateMessage::CountdownCleared)
        ));
        assert!(matches!(
            &messages[1],
            crate::UpdateMessage::Clip(UpdateMessage::Stopped)
        ));
        assert!(matches!(
            &messages[2],
            crate::UpdateMessage::Clip(UpdateMessage::Proceed { terminal: false })
        ));
    }

    #[test]
    fn test_first_completion_signal_wins() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 0, 1);
        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        screen.drain();

        state.on_state_change(
            PlaybackState::Ended,
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        let first = screen.drain();
        assert_eq!(first.len(), 3);

        // the forced stop scheduled at the snippet end arrives second
        state.receive_alarm(
            &AlarmMessage::ForceStop { index: 0 },
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        assert!(screen.drain().is_empty());
    }

    #[test]
    fn test_proceed_only_after_stop() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);

        state.play(&screen);
        assert!(!state.receive_proceed());

        state.on_ready(&mut handle, &screen, 0, 1);
        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        assert!(!state.receive_proceed());

        state.on_state_change(
            PlaybackState::Ended,
            &mut handle,
            &screen,
            no_schedule,
            0,
            1,
        );
        assert!(state.receive_proceed());
    }

    #[test]
    fn test_state_message_per_phase() {
        let config = create_test_config();
        let mut state = config.to_state();
        let screen = MockScreen::new();
        let mut handle = FakeHandle::with_duration(120.0);

        assert!(matches!(
            state.state_message(1, 3),
            SyncMessage::Loading { index: 1, count: 3 }
        ));

        state.play(&screen);
        state.on_ready(&mut handle, &screen, 1, 3);
        state.on_state_change(
            PlaybackState::Playing,
            &mut handle,
            &screen,
            no_schedule,
            1,
            3,
        );

        assert!(matches!(
            state.state_message(1, 3),
            SyncMessage::Playing {
                remaining: SNIPPET,
                ..
            }
        ));

        state.on_state_change(
            PlaybackState::Ended,
            &mut handle,
            &screen,
            no_schedule,
            1,
            3,
        );
        assert!(matches!(
            state.state_message(1, 3),
            SyncMessage::Stopped { index: 1, count: 3 }
        ));
    }
}
