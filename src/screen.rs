//! Render boundary between the engine and the page
//!
//! This module defines the trait for pushing view messages from the engine
//! to whatever renders them (a DOM binding, a test recorder). The screen
//! abstraction keeps the engine free of any document manipulation while
//! maintaining a consistent interface.

use super::{SyncMessage, UpdateMessage};

/// Trait for sending view messages to the page
///
/// This trait abstracts the rendering mechanism used to present the quiz.
/// Implementations might drive a DOM, a terminal, or simply record messages
/// for inspection in tests.
pub trait Screen {
    /// Sends an update message to the page
    ///
    /// Update messages notify the page about changes that affect the
    /// current view, such as a prompt appearing or a countdown ticking.
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to send
    fn send_message(&self, message: &UpdateMessage);

    /// Sends a state synchronization message to the page
    ///
    /// Sync messages are used to rebuild the page's view from the current
    /// engine state, typically after the view was torn down and reopened.
    ///
    /// # Arguments
    ///
    /// * `state` - The synchronization message to send
    fn send_state(&self, state: &SyncMessage);
}
