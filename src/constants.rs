//! Configuration constants for the clipquiz engine
//!
//! This module contains all the configuration limits and constraints
//! used throughout the engine to ensure data integrity and provide
//! consistent boundaries for the different round types.

/// Contest-level configuration constants
pub mod contest {
    /// Maximum number of items allowed in a single contest
    pub const MAX_ITEMS_COUNT: usize = 100;
    /// Maximum length of a contest title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
}

/// Multiple choice question round configuration constants
pub mod question {
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 200;
    /// Minimum number of choices for a question round
    pub const MIN_CHOICE_COUNT: usize = 2;
    /// Maximum number of choices for a question round
    pub const MAX_CHOICE_COUNT: usize = 8;
    /// Maximum length of a single choice in characters
    pub const MAX_CHOICE_LENGTH: usize = 200;
}

/// Clip round snippet configuration constants
pub mod snippet {
    /// Minimum snippet length in seconds
    pub const MIN_SECONDS: u64 = 3;
    /// Maximum snippet length in seconds
    pub const MAX_SECONDS: u64 = 60;
    /// Snippet length in seconds used when the payload does not specify one
    pub const DEFAULT_SECONDS: u64 = 10;
    /// Interval in seconds between two countdown display updates
    pub const TICK_SECONDS: u64 = 1;
}

/// Hosted media reference configuration constants
pub mod media {
    /// Maximum length of a hosted clip identifier
    pub const MAX_ID_LENGTH: usize = 64;
}
