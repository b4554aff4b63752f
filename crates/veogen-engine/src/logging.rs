//! Structured run logging utilities.

use tracing::{error, info, Span};
use veogen_models::RunId;

/// Logger for generation run lifecycle events with consistent fields.
#[derive(Debug, Clone)]
pub struct RunLogger {
    run_id: String,
    operation: String,
}

impl RunLogger {
    /// Create a new logger for a run and operation (e.g. "generate").
    pub fn new(run_id: &RunId, operation: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Log the start of the run.
    pub fn log_start(&self, message: &str) {
        info!(
            run_id = %self.run_id,
            operation = %self.operation,
            "Run started: {}", message
        );
    }

    /// Log a step transition.
    pub fn log_step(&self, message: &str) {
        info!(
            run_id = %self.run_id,
            operation = %self.operation,
            "Run progress: {}", message
        );
    }

    /// Log a failure.
    pub fn log_error(&self, message: &str) {
        error!(
            run_id = %self.run_id,
            operation = %self.operation,
            "Run error: {}", message
        );
    }

    /// Log successful completion.
    pub fn log_completion(&self, message: &str) {
        info!(
            run_id = %self.run_id,
            operation = %self.operation,
            "Run completed: {}", message
        );
    }

    /// Create a tracing span carrying the run fields.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "generation_run",
            run_id = %self.run_id,
            operation = %self.operation
        )
    }
}
