//! Shared data models for the Veogen backend.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests and their media assets
//! - Aspect ratio and resolution handling
//! - Run identifiers and finished video artifacts
//! - Progress event schemas

pub mod artifact;
pub mod aspect;
pub mod asset;
pub mod progress;
pub mod request;
pub mod run;

// Re-export common types
pub use artifact::VideoArtifact;
pub use aspect::{AspectRatio, AspectRatioParseError, ProviderAspectRatio, Resolution};
pub use asset::{AudioAsset, ImageAsset};
pub use progress::ProgressEvent;
pub use request::{GenerationRequest, BASE_CLIP_SECONDS, MAX_PROVIDER_IMAGES, MAX_REFERENCE_IMAGES};
pub use run::RunId;
