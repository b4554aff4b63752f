//! Progress event schema for generation runs.
//!
//! Events are typed so transports (WebSocket, logging) can attach their own
//! envelopes; `Display` renders the human-readable status line shown to the
//! user.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::request::BASE_CLIP_SECONDS;

/// Progress event emitted during a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Analyzing the user-supplied audio track.
    AnalyzingAudio,

    /// Submitting the primary generation job.
    SubmittingPrimary,

    /// Waiting on the primary job (one event per poll tick).
    RenderingPrimary,

    /// Submitting the extension job.
    Extending { remaining_seconds: u32 },

    /// Waiting on the extension job (one event per poll tick).
    RenderingExtension { total_seconds: u32 },

    /// Terminal operation done; fetching and storing the video.
    Finalizing,

    /// Run finished successfully.
    Complete,

    /// Run failed.
    Failed { error: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::AnalyzingAudio => {
                write!(f, "Analyzing the supplied audio track...")
            }
            ProgressEvent::SubmittingPrimary => {
                write!(f, "Submitting primary generation job (step 1/2)...")
            }
            ProgressEvent::RenderingPrimary => {
                write!(f, "Rendering the first {} seconds...", BASE_CLIP_SECONDS)
            }
            ProgressEvent::Extending { remaining_seconds } => {
                write!(
                    f,
                    "Extending the video by {}s (step 2/2)...",
                    remaining_seconds
                )
            }
            ProgressEvent::RenderingExtension { total_seconds } => {
                write!(
                    f,
                    "Rendering the extension to reach {}s total...",
                    total_seconds
                )
            }
            ProgressEvent::Finalizing => {
                write!(f, "Finalizing and preparing the video file...")
            }
            ProgressEvent::Complete => write!(f, "Generation complete."),
            ProgressEvent::Failed { error } => write!(f, "Generation failed: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_seconds() {
        let msg = ProgressEvent::Extending {
            remaining_seconds: 7,
        }
        .to_string();
        assert!(msg.contains("7s"));

        let msg = ProgressEvent::RenderingExtension { total_seconds: 12 }.to_string();
        assert!(msg.contains("12s"));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&ProgressEvent::Finalizing).unwrap();
        assert!(json.contains("\"finalizing\""));

        let back: ProgressEvent =
            serde_json::from_str("{\"type\":\"extending\",\"remaining_seconds\":3}").unwrap();
        assert_eq!(
            back,
            ProgressEvent::Extending {
                remaining_seconds: 3
            }
        );
    }
}
