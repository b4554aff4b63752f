//! Engine configuration and poll policy.

use std::time::Duration;

/// Policy for waiting on an in-flight provider operation.
///
/// The baseline behavior is a fixed ~10 second wait between status
/// refreshes with no attempt cap. Both the cap and a backoff growth factor
/// are available as hardening options; they change failure behavior only,
/// never the success path.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Wait between polls.
    pub interval: Duration,
    /// Maximum polls before the run fails. `None` polls until the provider
    /// reports done.
    pub max_attempts: Option<u32>,
    /// Growth factor applied per attempt (1.0 = fixed interval).
    pub backoff: f64,
    /// Ceiling for the grown interval.
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_attempts: None,
            backoff: 1.0,
            max_interval: Duration::from_secs(60),
        }
    }
}

impl PollPolicy {
    /// Set the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Cap the number of polls.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Set the backoff growth factor.
    pub fn with_backoff(mut self, backoff: f64) -> Self {
        self.backoff = backoff;
        self
    }

    /// Calculate the wait before a given poll attempt (0-based).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if self.backoff <= 1.0 {
            return self.interval.min(self.max_interval);
        }
        let grown = self.interval.as_secs_f64() * self.backoff.powi(attempt as i32);
        Duration::from_secs_f64(grown).min(self.max_interval)
    }

    /// Whether the given 0-based attempt exceeds the cap.
    pub fn is_exhausted(&self, attempt: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempt >= max)
    }
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Poll policy for operation waits.
    pub poll: PollPolicy,
    /// Directory where finished videos are stored.
    pub work_dir: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll: PollPolicy::default(),
            work_dir: "/tmp/veogen".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let poll = PollPolicy {
            interval: Duration::from_secs(
                std::env::var("VEOGEN_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            max_attempts: std::env::var("VEOGEN_POLL_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok()),
            backoff: std::env::var("VEOGEN_POLL_BACKOFF")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
            max_interval: Duration::from_secs(
                std::env::var("VEOGEN_POLL_MAX_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        };

        Self {
            poll,
            work_dir: std::env::var("VEOGEN_WORK_DIR")
                .unwrap_or_else(|_| "/tmp/veogen".to_string()),
        }
    }
}
