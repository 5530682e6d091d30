//! # Clipquiz Engine Library
//!
//! This library provides the core round logic for a browser-hosted trivia
//! and audio-clip quiz. It alternates between multiple-choice question
//! rounds and short randomized clip rounds played through an embedded media
//! player, tracks the accumulated score, and assembles the final results for
//! submission to a remote endpoint.
//!
//! The engine itself performs no I/O: rendering goes through the
//! [`screen::Screen`] boundary as serializable messages, media playback goes
//! through the [`player`] adapter traits, timers are scheduled through
//! closures and delivered back as [`AlarmMessage`]s, and the one-shot result
//! submission goes through [`report::ResultSink`].

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

pub mod constants;

pub mod contest;
pub mod game;
pub mod player;
pub mod report;
pub mod score;
pub mod screen;
mod tips;

/// Messages that change part of the page's current view
///
/// This enum represents all notifications the engine emits while a contest
/// is running, such as a new prompt appearing, a countdown ticking down, or
/// the final summary becoming available.
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum UpdateMessage {
    /// General contest-level updates
    Game(game::UpdateMessage),
    /// Multiple choice question round updates
    Question(contest::question::UpdateMessage),
    /// Clip round updates
    Clip(contest::clip::UpdateMessage),
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Messages that describe the complete current view
///
/// Sync messages carry enough context to rebuild the page from scratch,
/// for example when the results modal is reopened and has to re-render the
/// summary it already showed.
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum SyncMessage {
    /// General contest-level state
    Game(game::SyncMessage),
    /// Multiple choice question round state
    Question(contest::question::SyncMessage),
    /// Clip round state
    Clip(contest::clip::SyncMessage),
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Alarm messages for timed events
///
/// The engine never owns a timer. It hands one of these to the scheduling
/// closure together with a delay, and the host environment delivers it back
/// through [`game::Game::receive_alarm`] when the delay elapses.
#[derive(Debug, Clone, derive_more::From, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// Clip round alarms (countdown ticks and the forced snippet stop)
    Clip(contest::clip::AlarmMessage),
}
