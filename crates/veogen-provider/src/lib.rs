//! Provider client for the generative video API.
//!
//! This crate provides:
//! - The [`MediaProvider`] trait, the seam the orchestration engine drives
//! - [`VeoClient`], the reqwest-based implementation against the Veo/Gemini
//!   REST endpoints
//! - Credential handling and structured provider errors

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod provider;
pub mod wire;

pub use client::VeoClient;
pub use config::ProviderConfig;
pub use credential::{CredentialProvider, EnvCredential, StaticCredential};
pub use error::{ProviderError, ProviderResult};
pub use provider::{MediaProvider, VideoJobSpec};
pub use wire::{Operation, VideoRef};
