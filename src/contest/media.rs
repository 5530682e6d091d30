//! Media references for clip rounds
//!
//! This module defines the opaque reference a clip round uses to address
//! its media on the external hosting service. The engine never interprets
//! the identifier; it only forwards it to the player adapter.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Represents any kind of media a clip round can play
///
/// Currently only externally hosted video clips are supported, but this
/// structure allows for future expansion to other media sources.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub enum Media {
    /// A video clip on the external hosting service
    Video(#[garde(dive)] Video),
}

/// Represents different sources of video content
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub enum Video {
    /// A clip addressed by its identifier on the hosting service
    Hosted {
        /// Opaque identifier of the clip on the hosting service
        #[garde(length(min = 1, max = crate::constants::media::MAX_ID_LENGTH))]
        id: String,
    },
}

impl Media {
    /// Returns the hosting-service identifier of this clip
    pub fn id(&self) -> &str {
        match self {
            Self::Video(Video::Hosted { id }) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_clip_validates() {
        let media = Media::Video(Video::Hosted {
            id: "dQw4w9WgXcQ".to_string(),
        });
        assert!(media.validate().is_ok());
        assert_eq!(media.id(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let media = Media::Video(Video::Hosted { id: String::new() });
        assert!(media.validate().is_err());
    }

    #[test]
    fn test_oversized_id_is_rejected() {
        let media = Media::Video(Video::Hosted {
            id: "a".repeat(crate::constants::media::MAX_ID_LENGTH + 1),
        });
        assert!(media.validate().is_err());
    }
}
