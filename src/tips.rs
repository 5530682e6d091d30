//! Loading screen tips
//!
//! Short quips shown while a clip round waits for the embed player to load.
//! One is picked at random per loading screen.

/// The tip pool shown on clip loading screens
pub(crate) const TIPS: &[&str] = &[
    "Rewinding the tape to a random spot...",
    "Counting beats per minute...",
    "Negotiating with the buffering wheel...",
    "Tuning the antenna, hold on...",
    "Dusting off the record sleeve...",
    "Asking the drummer to count us in...",
    "Dropping the needle somewhere in the middle...",
    "Warming up the speakers...",
    "Shuffling the setlist one more time...",
    "Cueing the mystery track...",
    "Checking the volume knob goes to eleven...",
    "Splicing ten seconds out of the reel...",
];

/// Picks one tip at random
pub(crate) fn pick() -> &'static str {
    TIPS[fastrand::usize(..TIPS.len())]
}
