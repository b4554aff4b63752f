//! Provider client configuration.

use std::time::Duration;

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the generative API.
    pub base_url: String,
    /// Model used for text/audio analysis calls.
    pub text_model: String,
    /// Model used for video generation jobs.
    pub video_model: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            video_model: "veo-3.1-generate-preview".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl ProviderConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("VEOGEN_API_BASE_URL").unwrap_or(defaults.base_url),
            text_model: std::env::var("VEOGEN_TEXT_MODEL").unwrap_or(defaults.text_model),
            video_model: std::env::var("VEOGEN_VIDEO_MODEL").unwrap_or(defaults.video_model),
            timeout: Duration::from_secs(
                std::env::var("VEOGEN_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }

    /// URL for a generateContent call on the text model.
    pub fn generate_content_url(&self, key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.text_model, key
        )
    }

    /// URL for submitting a long-running video generation job.
    pub fn submit_video_url(&self, key: &str) -> String {
        format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.base_url, self.video_model, key
        )
    }

    /// URL for polling an operation by its resource name.
    pub fn poll_url(&self, operation_name: &str, key: &str) -> String {
        format!("{}/{}?key={}", self.base_url, operation_name, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ProviderConfig::default();
        assert!(config.base_url.contains("generativelanguage"));
        assert_eq!(config.video_model, "veo-3.1-generate-preview");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_url_construction() {
        let config = ProviderConfig::default();
        let url = config.submit_video_url("k123");
        assert!(url.ends_with(":predictLongRunning?key=k123"));

        let url = config.poll_url("operations/abc", "k123");
        assert!(url.contains("/operations/abc?key=k123"));
    }
}
