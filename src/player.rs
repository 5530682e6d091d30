//! Embedded media player boundary
//!
//! This module defines the adapter traits for the external embed player the
//! clip rounds play through. The engine only relies on a small capability
//! set: create a player for a clip, query its duration, seek, start, stop,
//! and destroy it. Playback notifications flow back into the engine as
//! [`PlayerEvent`]s through [`crate::game::Game::receive_player_event`];
//! wiring the embed API's callbacks to those events is the host's job.

use serde::{Deserialize, Serialize};

use crate::contest::media::Media;

/// A live handle onto one embedded player instance
///
/// The round controller owns at most one handle at a time and destroys it
/// before creating a replacement.
pub trait PlayerHandle {
    /// Reports the total duration of the loaded clip in seconds
    ///
    /// # Returns
    ///
    /// The duration, or `None` when the embed API has not reported a usable
    /// number for this clip.
    fn duration(&self) -> Option<f64>;

    /// Seeks playback to the given offset in seconds
    fn seek_to(&mut self, seconds: f64);

    /// Starts playback from the current position
    fn play(&mut self);

    /// Stops playback
    fn stop(&mut self);

    /// Destroys the player instance
    ///
    /// This method should be called when the handle is no longer needed;
    /// events from a destroyed player must not reach the engine.
    fn destroy(self);
}

/// Factory for embedded player instances
///
/// Implementations wrap the actual embed API. Tests substitute a fake
/// provider that hands out scripted handles.
pub trait PlayerProvider {
    /// The handle type this provider creates
    type Handle: PlayerHandle;

    /// Creates a player for the given clip reference
    ///
    /// # Arguments
    ///
    /// * `media` - The hosted clip to load
    ///
    /// # Returns
    ///
    /// A new handle; the engine expects a `Ready` event once the player
    /// has loaded the clip.
    fn create(&mut self, media: &Media) -> Self::Handle;
}

/// Playback states the embed player can report
///
/// This covers the embed API's full state set; the engine reacts to
/// `Playing` and `Ended` and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// The player has not started playback yet
    Unstarted,
    /// Natural playback reached the end of the clip
    Ended,
    /// The player is actively playing
    Playing,
    /// Playback is paused
    Paused,
    /// The player is buffering
    Buffering,
    /// A clip is cued but not playing
    Cued,
}

/// Events the host forwards from the embed player's callbacks
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The player finished loading its clip and can be queried and driven
    Ready,
    /// The player's playback state changed
    StateChange(PlaybackState),
}
