//! Media assets supplied with a generation request.
//!
//! Payloads are kept as raw bytes; base64 encoding for the provider wire
//! format happens at the provider boundary, not here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reference image attached to a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageAsset {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// MIME type, e.g. "image/png".
    pub mime_type: String,
}

impl ImageAsset {
    /// Create a new image asset.
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// A user-supplied audio track used to derive the audio style description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AudioAsset {
    /// Raw audio bytes.
    pub data: Vec<u8>,
    /// MIME type, e.g. "audio/mpeg".
    pub mime_type: String,
    /// Original file name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl AudioAsset {
    /// Create a new audio asset.
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    /// Attach the original file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_asset_roundtrip() {
        let asset = ImageAsset::new(vec![1u8, 2, 3], "image/png");
        let json = serde_json::to_string(&asset).unwrap();
        let back: ImageAsset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, back);
    }

    #[test]
    fn test_audio_asset_file_name_optional() {
        let asset = AudioAsset::new(vec![0u8; 4], "audio/mpeg");
        let json = serde_json::to_string(&asset).unwrap();
        assert!(!json.contains("file_name"));

        let named = asset.with_file_name("track.mp3");
        assert_eq!(named.file_name.as_deref(), Some("track.mp3"));
    }
}
