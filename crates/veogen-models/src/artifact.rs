//! Finished video artifacts.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::RunId;

/// A locally addressable, playable video produced by a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoArtifact {
    /// The run that produced this video.
    pub run_id: RunId,
    /// Path to the stored file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// MIME type of the stored video.
    pub mime_type: String,
    /// When the artifact was stored.
    pub created_at: DateTime<Utc>,
}

impl VideoArtifact {
    /// Create an artifact record stamped with the current time.
    pub fn new(
        run_id: RunId,
        path: impl Into<PathBuf>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            run_id,
            path: path.into(),
            size_bytes,
            mime_type: mime_type.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_serde_roundtrip() {
        let artifact = VideoArtifact::new(RunId::from_string("r1"), "/tmp/r1.mp4", 1024, "video/mp4");
        let json = serde_json::to_string(&artifact).unwrap();
        let back: VideoArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact, back);
    }
}
