//! Generation orchestration engine.
//!
//! This crate provides:
//! - The multi-step generate/poll/extend workflow
//! - Poll policy with configurable interval, backoff, and attempt cap
//! - Progress emission
//! - Prompt composition

pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod progress;
pub mod prompt;

pub use config::{EngineConfig, PollPolicy};
pub use error::{EngineResult, ExtensionError, GenerationError, PollError};
pub use logging::RunLogger;
pub use orchestrator::GenerationOrchestrator;
pub use progress::{channel, forward, noop, ProgressReceiver, ProgressSender};
