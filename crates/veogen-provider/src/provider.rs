//! The provider capability seam driven by the orchestration engine.

use async_trait::async_trait;

use veogen_models::{AudioAsset, ImageAsset, ProviderAspectRatio, Resolution};

use crate::error::ProviderResult;
use crate::wire::{Operation, VideoRef};

/// A video job submission, already reduced to what the provider accepts.
#[derive(Debug, Clone)]
pub struct VideoJobSpec {
    /// Fully composed prompt text.
    pub prompt: String,
    /// Reference images, capped by the caller at the provider limit.
    pub reference_images: Vec<ImageAsset>,
    /// Continuity input for extension jobs; references a prior job's output
    /// instead of static images.
    pub continuity_video: Option<VideoRef>,
    pub resolution: Resolution,
    pub aspect_ratio: ProviderAspectRatio,
}

/// Abstract capability set of the remote generative API.
///
/// `poll_operation` is an idempotent status refresh: it returns a new
/// [`Operation`] value rather than mutating the old one.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Describe a media payload with the text model.
    async fn analyze_media(&self, audio: &AudioAsset, instruction: &str)
        -> ProviderResult<String>;

    /// Run a free-form text generation, optionally grounded on images.
    async fn generate_text(
        &self,
        instruction: &str,
        images: &[ImageAsset],
    ) -> ProviderResult<String>;

    /// Submit a video generation job; returns the operation handle.
    async fn submit_video_job(&self, spec: &VideoJobSpec) -> ProviderResult<Operation>;

    /// Refresh the status of an in-flight operation.
    async fn poll_operation(&self, operation: &Operation) -> ProviderResult<Operation>;

    /// Fetch the finished video bytes from its remote location.
    async fn fetch_video(&self, uri: &str) -> ProviderResult<Vec<u8>>;
}
