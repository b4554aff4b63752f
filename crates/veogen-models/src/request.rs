//! Generation request definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AspectRatio, AudioAsset, ImageAsset, Resolution};

/// Maximum reference images accepted on a request.
pub const MAX_REFERENCE_IMAGES: usize = 5;

/// Maximum reference images the provider accepts per job.
///
/// Requests may carry up to [`MAX_REFERENCE_IMAGES`]; only the first
/// `MAX_PROVIDER_IMAGES` are forwarded with a submission.
pub const MAX_PROVIDER_IMAGES: usize = 3;

/// Length of a single provider clip in seconds. Requested durations above
/// this require an extension job.
pub const BASE_CLIP_SECONDS: u32 = 5;

/// A video generation request, immutable once submitted.
///
/// Constructed fresh per user-initiated run; never mutated mid-flight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct GenerationRequest {
    /// Ordered reference images (0 to 5).
    #[validate(length(max = 5, message = "at most 5 reference images"))]
    pub reference_images: Vec<ImageAsset>,

    /// Free-form scene/motion description.
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,

    /// Fallback audio description when no audio asset is supplied.
    #[serde(default)]
    pub music_style: String,

    /// Optional audio track; supersedes `music_style` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioAsset>,

    /// Transition style, used only with more than one reference image.
    #[serde(default)]
    pub transition_style: String,

    /// Optional voiceover script, appended to the composed prompt verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover_script: Option<String>,

    /// Optional subtitle text, appended to the composed prompt verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_text: Option<String>,

    /// Requested aspect ratio (mapped to the provider subset on submission).
    #[serde(default)]
    pub aspect_ratio: AspectRatio,

    /// Requested output resolution.
    #[serde(default)]
    pub resolution: Resolution,

    /// Total requested duration in seconds (5 to 15).
    #[validate(range(min = 5, max = 15, message = "duration must be 5-15 seconds"))]
    pub duration_seconds: u32,
}

impl GenerationRequest {
    /// Create a minimal request with defaults for the optional fields.
    pub fn new(prompt: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            reference_images: Vec::new(),
            prompt: prompt.into(),
            music_style: String::new(),
            audio: None,
            transition_style: String::new(),
            voiceover_script: None,
            subtitle_text: None,
            aspect_ratio: AspectRatio::default(),
            resolution: Resolution::default(),
            duration_seconds,
        }
    }

    /// Whether the requested duration needs an extension job on top of the
    /// base clip.
    pub fn needs_extension(&self) -> bool {
        self.duration_seconds > BASE_CLIP_SECONDS
    }

    /// Seconds the extension job must add (0 when none is needed).
    pub fn extension_seconds(&self) -> u32 {
        self.duration_seconds.saturating_sub(BASE_CLIP_SECONDS)
    }

    /// The reference images actually forwarded to the provider (first 3).
    pub fn provider_images(&self) -> &[ImageAsset] {
        let cap = self.reference_images.len().min(MAX_PROVIDER_IMAGES);
        &self.reference_images[..cap]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn image(n: u8) -> ImageAsset {
        ImageAsset::new(vec![n], "image/png")
    }

    #[test]
    fn test_duration_validation() {
        let mut req = GenerationRequest::new("a city at dusk", 5);
        assert!(req.validate().is_ok());

        req.duration_seconds = 4;
        assert!(req.validate().is_err());

        req.duration_seconds = 16;
        assert!(req.validate().is_err());

        req.duration_seconds = 15;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let req = GenerationRequest::new("", 5);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_too_many_images_rejected() {
        let mut req = GenerationRequest::new("ok", 5);
        req.reference_images = (0..6).map(image).collect();
        assert!(req.validate().is_err());

        req.reference_images.pop();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_extension_arithmetic() {
        let mut req = GenerationRequest::new("ok", 5);
        assert!(!req.needs_extension());
        assert_eq!(req.extension_seconds(), 0);

        req.duration_seconds = 12;
        assert!(req.needs_extension());
        assert_eq!(req.extension_seconds(), 7);
    }

    #[test]
    fn test_provider_images_capped_at_three() {
        let mut req = GenerationRequest::new("ok", 5);
        for n in 0..5 {
            req.reference_images.push(image(n));
        }
        let forwarded = req.provider_images();
        assert_eq!(forwarded.len(), 3);
        assert_eq!(forwarded[0].data, vec![0]);
        assert_eq!(forwarded[2].data, vec![2]);
    }

    #[test]
    fn test_provider_images_passthrough_when_few() {
        let mut req = GenerationRequest::new("ok", 5);
        req.reference_images.push(image(9));
        assert_eq!(req.provider_images().len(), 1);

        req.reference_images.clear();
        assert!(req.provider_images().is_empty());
    }
}
