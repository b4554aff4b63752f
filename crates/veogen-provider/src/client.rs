//! Reqwest client for the Veo/Gemini REST API.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use veogen_models::{AudioAsset, ImageAsset};

use crate::config::ProviderConfig;
use crate::credential::CredentialProvider;
use crate::error::{ProviderError, ProviderResult};
use crate::provider::{MediaProvider, VideoJobSpec};
use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, InlineData, InlineImage, Operation,
    Part, PredictVideoRequest, ReferenceImage, ReferenceType, VideoJobConfig,
};

/// Provider API client.
pub struct VeoClient {
    config: ProviderConfig,
    credentials: Arc<dyn CredentialProvider>,
    http: Client,
}

impl VeoClient {
    /// Create a new client.
    pub fn new(
        config: ProviderConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> ProviderResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            config,
            credentials,
            http,
        })
    }

    /// Create from environment variables, reading the key from
    /// `GEMINI_API_KEY`.
    pub fn from_env() -> ProviderResult<Self> {
        Self::new(
            ProviderConfig::from_env(),
            Arc::new(crate::credential::EnvCredential),
        )
    }

    /// Build the download URL with the credential appended as a query
    /// parameter, as the provider requires for result fetches.
    pub(crate) fn download_url(uri: &str, key: &str) -> ProviderResult<Url> {
        let mut url =
            Url::parse(uri).map_err(|e| ProviderError::InvalidLocation(format!("{uri}: {e}")))?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }

    /// POST a generateContent request and pull out the first candidate text.
    async fn generate_content(&self, parts: Vec<Part>) -> ProviderResult<String> {
        let key = self.credentials.credential()?;
        let url = self.config.generate_content_url(&key);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let body = Self::read_success_body(response).await?;

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(ProviderError::EmptyResponse)?;
        Ok(text.trim().to_string())
    }

    /// Consume a response, mapping non-success statuses to structured errors.
    async fn read_success_body(response: reqwest::Response) -> ProviderResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            let err = ProviderError::from_api_response(status.as_u16(), &body);
            warn!("Provider call failed: {}", err);
            Err(err)
        }
    }
}

#[async_trait]
impl MediaProvider for VeoClient {
    async fn analyze_media(
        &self,
        audio: &AudioAsset,
        instruction: &str,
    ) -> ProviderResult<String> {
        debug!(
            mime_type = %audio.mime_type,
            bytes = audio.data.len(),
            "Analyzing audio payload"
        );

        self.generate_content(vec![
            Part::InlineData(InlineData {
                mime_type: audio.mime_type.clone(),
                data: BASE64.encode(&audio.data),
            }),
            Part::Text(instruction.to_string()),
        ])
        .await
    }

    async fn generate_text(
        &self,
        instruction: &str,
        images: &[ImageAsset],
    ) -> ProviderResult<String> {
        let mut parts = vec![Part::Text(instruction.to_string())];
        for image in images {
            parts.push(Part::InlineData(InlineData {
                mime_type: image.mime_type.clone(),
                data: BASE64.encode(&image.data),
            }));
        }

        self.generate_content(parts).await
    }

    async fn submit_video_job(&self, spec: &VideoJobSpec) -> ProviderResult<Operation> {
        let key = self.credentials.credential()?;
        let url = self.config.submit_video_url(&key);

        let request = PredictVideoRequest {
            prompt: spec.prompt.clone(),
            reference_images: spec
                .reference_images
                .iter()
                .map(|img| ReferenceImage {
                    image: InlineImage {
                        image_bytes: BASE64.encode(&img.data),
                        mime_type: img.mime_type.clone(),
                    },
                    reference_type: ReferenceType::Asset,
                })
                .collect(),
            video: spec.continuity_video.clone(),
            config: VideoJobConfig {
                number_of_videos: 1,
                resolution: spec.resolution.as_str().to_string(),
                aspect_ratio: spec.aspect_ratio.as_str().to_string(),
            },
        };

        info!(
            model = %self.config.video_model,
            images = request.reference_images.len(),
            continuity = request.video.is_some(),
            resolution = %spec.resolution,
            aspect_ratio = %spec.aspect_ratio,
            "Submitting video generation job"
        );

        let response = self.http.post(&url).json(&request).send().await?;
        let body = Self::read_success_body(response).await?;
        let operation: Operation = serde_json::from_str(&body)?;

        info!(operation = %operation.name, "Video job accepted");
        Ok(operation)
    }

    async fn poll_operation(&self, operation: &Operation) -> ProviderResult<Operation> {
        let key = self.credentials.credential()?;
        let url = self.config.poll_url(&operation.name, &key);

        debug!(operation = %operation.name, "Polling operation status");

        let response = self.http.get(&url).send().await?;
        let body = Self::read_success_body(response).await?;
        let refreshed: Operation = serde_json::from_str(&body)?;
        Ok(refreshed)
    }

    async fn fetch_video(&self, uri: &str) -> ProviderResult<Vec<u8>> {
        let key = self.credentials.credential()?;
        let url = Self::download_url(uri, &key)?;

        info!("Fetching generated video");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_api_response(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Video download complete");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::StaticCredential;

    #[test]
    fn test_download_url_appends_key() {
        let url = VeoClient::download_url("https://dl.example/v.mp4?alt=media", "k1").unwrap();
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("alt".to_string(), "media".to_string())));
        assert!(query.contains(&("key".to_string(), "k1".to_string())));
    }

    #[test]
    fn test_download_url_rejects_garbage() {
        assert!(matches!(
            VeoClient::download_url("not a url", "k1"),
            Err(ProviderError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_client_construction() {
        let client = VeoClient::new(
            ProviderConfig::default(),
            Arc::new(StaticCredential::new("k1")),
        );
        assert!(client.is_ok());
    }
}
