//! The multi-step generation workflow.
//!
//! One invocation runs one sequential flow: resolve the audio description,
//! compose the prompt, submit the primary job, wait it out, optionally
//! submit and wait an extension job chained on the primary result, then
//! fetch and store the finished video. Every step returns a typed error and
//! the chain short-circuits on the first failure; a run produces exactly one
//! terminal outcome.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use veogen_models::{
    GenerationRequest, ImageAsset, ProgressEvent, ProviderAspectRatio, RunId, VideoArtifact,
};
use veogen_provider::{CredentialProvider, MediaProvider, Operation, VideoJobSpec};

use crate::config::EngineConfig;
use crate::error::{EngineResult, ExtensionError, GenerationError, PollError};
use crate::logging::RunLogger;
use crate::prompt;

const DEFAULT_VIDEO_MIME: &str = "video/mp4";

/// Drives the generate/poll/extend workflow against a [`MediaProvider`].
///
/// Holds no per-run state; concurrent invocations each own their operation
/// chain.
pub struct GenerationOrchestrator<P: MediaProvider> {
    provider: Arc<P>,
    credentials: Arc<dyn CredentialProvider>,
    config: EngineConfig,
}

impl<P: MediaProvider> GenerationOrchestrator<P> {
    /// Create a new orchestrator.
    pub fn new(
        provider: Arc<P>,
        credentials: Arc<dyn CredentialProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            provider,
            credentials,
            config,
        }
    }

    /// Run the full generation workflow.
    ///
    /// Emits human-readable progress through `on_progress` and resolves to a
    /// locally stored [`VideoArtifact`], or the first step failure.
    pub async fn generate<F>(
        &self,
        request: &GenerationRequest,
        on_progress: F,
    ) -> EngineResult<VideoArtifact>
    where
        F: Fn(ProgressEvent) + Send + Sync,
    {
        let run_id = RunId::new();
        let logger = RunLogger::new(&run_id, "generate");
        logger.log_start(&format!(
            "{} images, {}s, {}",
            request.reference_images.len(),
            request.duration_seconds,
            request.aspect_ratio
        ));

        if !self.credentials.has_credential() {
            logger.log_error("no access credential");
            return Err(GenerationError::Credential);
        }

        // Step 1: audio description. An analysis failure aborts the run;
        // there is deliberately no fallback to music_style.
        let audio_description = self
            .resolve_audio_description(request, &on_progress)
            .await?;

        // Steps 2-3: aspect mapping and prompt composition.
        let aspect_ratio = request.aspect_ratio.provider_ratio();
        let composed = prompt::compose_prompt(request, &audio_description);
        debug!(prompt_len = composed.len(), "Composed generation prompt");

        // Step 4: primary submission.
        on_progress(ProgressEvent::SubmittingPrimary);
        logger.log_step("submitting primary job");
        let spec = VideoJobSpec {
            prompt: composed.clone(),
            reference_images: request.provider_images().to_vec(),
            continuity_video: None,
            resolution: request.resolution,
            aspect_ratio,
        };
        let operation = self
            .provider
            .submit_video_job(&spec)
            .await
            .map_err(GenerationError::Submission)?;

        // Step 5: primary poll loop.
        let operation = self
            .wait_for_completion(operation, ProgressEvent::RenderingPrimary, &on_progress)
            .await
            .map_err(GenerationError::Poll)?;

        // Step 6: conditional extension. Its result supersedes the primary's.
        let terminal = if request.needs_extension() {
            logger.log_step("extending clip");
            self.extend(request, &composed, aspect_ratio, &operation, &on_progress)
                .await?
        } else {
            operation
        };

        // Step 7: result resolution.
        let video_ref = terminal
            .video_ref()
            .cloned()
            .ok_or(GenerationError::MissingResult)?;

        on_progress(ProgressEvent::Finalizing);
        logger.log_step("fetching finished video");
        let bytes = self
            .provider
            .fetch_video(&video_ref.uri)
            .await
            .map_err(GenerationError::Fetch)?;

        let mime_type = video_ref
            .mime_type
            .unwrap_or_else(|| DEFAULT_VIDEO_MIME.to_string());
        let artifact = self.store_artifact(&run_id, &bytes, mime_type).await?;

        on_progress(ProgressEvent::Complete);
        logger.log_completion(&format!(
            "{} bytes at {}",
            artifact.size_bytes,
            artifact.path.display()
        ));
        Ok(artifact)
    }

    /// Enhance a raw prompt with the text model, optionally grounded on the
    /// reference images. Falls back to the original prompt when the model
    /// returns nothing.
    pub async fn enhance_prompt(
        &self,
        raw_prompt: &str,
        images: &[ImageAsset],
    ) -> EngineResult<String> {
        if !self.credentials.has_credential() {
            return Err(GenerationError::Credential);
        }

        let instruction = prompt::enhance_instruction(raw_prompt, !images.is_empty());
        let enhanced = self
            .provider
            .generate_text(&instruction, images)
            .await
            .map_err(GenerationError::Analysis)?;

        if enhanced.is_empty() {
            Ok(raw_prompt.to_string())
        } else {
            Ok(enhanced)
        }
    }

    /// Suggest a short voiceover script for a theme.
    pub async fn suggest_voiceover_script(&self, theme: &str) -> EngineResult<String> {
        if !self.credentials.has_credential() {
            return Err(GenerationError::Credential);
        }

        self.provider
            .generate_text(&prompt::voiceover_instruction(theme), &[])
            .await
            .map_err(GenerationError::Analysis)
    }

    /// Resolve the audio style description: the analysis result when an
    /// audio asset was supplied, the music style tag verbatim otherwise
    /// (even when empty).
    async fn resolve_audio_description<F>(
        &self,
        request: &GenerationRequest,
        on_progress: &F,
    ) -> EngineResult<String>
    where
        F: Fn(ProgressEvent) + Send + Sync,
    {
        match &request.audio {
            Some(audio) => {
                on_progress(ProgressEvent::AnalyzingAudio);
                self.provider
                    .analyze_media(audio, prompt::AUDIO_ANALYSIS_INSTRUCTION)
                    .await
                    .map_err(GenerationError::Analysis)
            }
            None => Ok(request.music_style.clone()),
        }
    }

    /// Submit and wait out the extension job chained on the primary result.
    async fn extend<F>(
        &self,
        request: &GenerationRequest,
        composed: &str,
        aspect_ratio: ProviderAspectRatio,
        primary: &Operation,
        on_progress: &F,
    ) -> EngineResult<Operation>
    where
        F: Fn(ProgressEvent) + Send + Sync,
    {
        let remaining = request.extension_seconds();
        on_progress(ProgressEvent::Extending {
            remaining_seconds: remaining,
        });

        // The extension continues the primary output; without a primary
        // result there is nothing to continue.
        let continuity = primary
            .video_ref()
            .cloned()
            .ok_or(GenerationError::MissingResult)?;

        let spec = VideoJobSpec {
            prompt: prompt::extension_prompt(composed, remaining),
            reference_images: Vec::new(),
            continuity_video: Some(continuity),
            resolution: request.resolution,
            aspect_ratio,
        };

        let operation = self
            .provider
            .submit_video_job(&spec)
            .await
            .map_err(|e| GenerationError::Extension(ExtensionError::Submission(e)))?;

        self.wait_for_completion(
            operation,
            ProgressEvent::RenderingExtension {
                total_seconds: request.duration_seconds,
            },
            on_progress,
        )
        .await
        .map_err(|e| GenerationError::Extension(ExtensionError::Poll(e)))
    }

    /// Poll an operation until the provider reports done.
    ///
    /// Each tick emits `tick_event`, waits per the poll policy, then
    /// refreshes the handle. Polling replaces the operation value; nothing
    /// is mutated in place.
    async fn wait_for_completion<F>(
        &self,
        mut operation: Operation,
        tick_event: ProgressEvent,
        on_progress: &F,
    ) -> Result<Operation, PollError>
    where
        F: Fn(ProgressEvent) + Send + Sync,
    {
        let policy = &self.config.poll;
        let mut attempt = 0u32;

        while !operation.done {
            if policy.is_exhausted(attempt) {
                return Err(PollError::AttemptsExhausted { attempts: attempt });
            }

            on_progress(tick_event.clone());
            tokio::time::sleep(policy.delay_for_attempt(attempt)).await;

            operation = self
                .provider
                .poll_operation(&operation)
                .await
                .map_err(PollError::Provider)?;
            attempt += 1;
        }

        Ok(operation)
    }

    /// Write the fetched bytes under the work directory.
    async fn store_artifact(
        &self,
        run_id: &RunId,
        bytes: &[u8],
        mime_type: String,
    ) -> EngineResult<VideoArtifact> {
        let dir = Path::new(&self.config.work_dir);
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(format!("{}.mp4", run_id));
        tokio::fs::write(&path, bytes).await?;

        Ok(VideoArtifact::new(
            run_id.clone(),
            path,
            bytes.len() as u64,
            mime_type,
        ))
    }
}
