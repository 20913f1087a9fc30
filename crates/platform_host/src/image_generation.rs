//! Wallpaper image-generation contracts and the `generateContent` wire models they share.
//!
//! The browser adapter in `platform_host_web` performs the HTTP exchange; everything that can be
//! decided without a network (prompt text, request body, response decoding) lives here so it can
//! be exercised natively.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default image model used for wallpaper generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// Default REST endpoint root for the generative language API.
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Aspect ratio requested for desktop wallpapers.
pub const WALLPAPER_ASPECT_RATIO: &str = "16:9";

/// Object-safe boxed future used by [`ImageGenerationService`].
pub type ImageGenerationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by an image-generation backend.
pub enum ImageGenerationError {
    /// No API credential was configured for this build.
    #[error("image generation api key is not configured")]
    MissingApiKey,
    /// The request could not be built or sent.
    #[error("image generation request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success HTTP status.
    #[error("image generation returned http status {0}")]
    Status(u16),
    /// The response body was not a valid `generateContent` payload.
    #[error("image generation response could not be decoded: {0}")]
    Decode(String),
    /// The response decoded but carried no inline image part.
    #[error("no image data found in response")]
    NoImageData,
    /// The active host has no image-generation backend.
    #[error("image generation is unavailable on this host")]
    Unavailable,
}

/// Host service that turns a free-form theme into a displayable wallpaper URL.
pub trait ImageGenerationService {
    /// Generates a wallpaper for `theme` and resolves to a URL usable as a CSS background.
    fn generate_wallpaper<'a>(
        &'a self,
        theme: &'a str,
    ) -> ImageGenerationFuture<'a, Result<String, ImageGenerationError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Image-generation service for hosts without a backend.
pub struct NoopImageGenerationService;

impl ImageGenerationService for NoopImageGenerationService {
    fn generate_wallpaper<'a>(
        &'a self,
        _theme: &'a str,
    ) -> ImageGenerationFuture<'a, Result<String, ImageGenerationError>> {
        Box::pin(async { Err(ImageGenerationError::Unavailable) })
    }
}

/// Expands a user theme into the full wallpaper prompt sent to the model.
pub fn build_wallpaper_prompt(theme: &str) -> String {
    format!(
        "A high-resolution, modern glassy wallpaper with the following theme: {theme}. \
Style: Glassmorphism, 4k, vibrant gradients, depth, blurred translucent surfaces, futuristic UI \
aesthetics, abstract."
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// `generateContent` request body.
pub struct GenerateContentRequest {
    /// Conversation contents; wallpaper requests send a single text turn.
    pub contents: Vec<Content>,
    /// Output configuration.
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Builds the wallpaper request for `theme`.
    pub fn wallpaper(theme: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_wallpaper_prompt(theme)),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: WALLPAPER_ASPECT_RATIO.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Output configuration for a `generateContent` call.
pub struct GenerationConfig {
    /// Image output options.
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Image output options.
pub struct ImageConfig {
    /// Requested aspect ratio, for example `16:9`.
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// A single content turn made of parts.
pub struct Content {
    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
/// Text or inline binary payload.
pub struct Part {
    /// Text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64 binary payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Base64 encoded binary payload with its MIME type.
pub struct InlineData {
    /// Payload MIME type, for example `image/png`.
    pub mime_type: String,
    /// Base64 payload.
    pub data: String,
}

impl InlineData {
    /// Formats the payload as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// `generateContent` response body (only the fields the desktop reads).
pub struct GenerateContentResponse {
    /// Candidate completions.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// A candidate completion.
pub struct Candidate {
    /// Candidate content, absent when the candidate was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Returns the first inline image of the first candidate as a `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ImageGenerationError::NoImageData`] when no part carries inline data.
    pub fn first_image_data_url(&self) -> Result<String, ImageGenerationError> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|part| part.inline_data.as_ref())
            })
            .map(InlineData::to_data_url)
            .ok_or(ImageGenerationError::NoImageData)
    }
}

/// Decodes a raw `generateContent` JSON body into a wallpaper URL.
///
/// # Errors
///
/// Returns [`ImageGenerationError::Decode`] for malformed JSON and
/// [`ImageGenerationError::NoImageData`] when no image part is present.
pub fn decode_wallpaper_response(raw: &str) -> Result<String, ImageGenerationError> {
    let response: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|err| ImageGenerationError::Decode(err.to_string()))?;
    response.first_image_data_url()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static configuration for an image-generation backend.
pub struct ImageGenerationConfig {
    /// API credential; `None` makes every request fail with
    /// [`ImageGenerationError::MissingApiKey`].
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// REST endpoint root without a trailing slash.
    pub endpoint: String,
}

impl Default for ImageGenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
        }
    }
}

impl ImageGenerationConfig {
    /// Returns the configured key, treating blank values as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ImageGenerationError::MissingApiKey`] when no usable key is set.
    pub fn require_api_key(&self) -> Result<&str, ImageGenerationError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ImageGenerationError::MissingApiKey)
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn wallpaper_request_serializes_to_generate_content_shape() {
        let request = GenerateContentRequest::wallpaper("Neon purple ocean clouds");
        let value = serde_json::to_value(&request).expect("serialize request");

        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [{ "text": build_wallpaper_prompt("Neon purple ocean clouds") }]
                }],
                "generationConfig": { "imageConfig": { "aspectRatio": "16:9" } }
            })
        );
    }

    #[test]
    fn prompt_embeds_theme_and_style_suffix() {
        let prompt = build_wallpaper_prompt("aurora over glaciers");
        assert!(prompt.starts_with(
            "A high-resolution, modern glassy wallpaper with the following theme: aurora over glaciers."
        ));
        assert!(prompt.ends_with("futuristic UI aesthetics, abstract."));
    }

    #[test]
    fn response_uses_first_inline_image_part() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your wallpaper" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "BBBB" } }
                    ]
                }
            }]
        })
        .to_string();

        assert_eq!(
            decode_wallpaper_response(&raw),
            Ok("data:image/png;base64,AAAA".to_string())
        );
    }

    #[test]
    fn response_without_image_reports_no_image_data() {
        let text_only = json!({
            "candidates": [{ "content": { "parts": [{ "text": "sorry" }] } }]
        })
        .to_string();
        assert_eq!(
            decode_wallpaper_response(&text_only),
            Err(ImageGenerationError::NoImageData)
        );
        assert_eq!(
            decode_wallpaper_response("{}"),
            Err(ImageGenerationError::NoImageData)
        );
    }

    #[test]
    fn malformed_response_reports_decode_error() {
        assert!(matches!(
            decode_wallpaper_response("not json"),
            Err(ImageGenerationError::Decode(_))
        ));
    }

    #[test]
    fn config_rejects_blank_api_key_and_builds_model_url() {
        let mut config = ImageGenerationConfig::default();
        assert_eq!(
            config.require_api_key(),
            Err(ImageGenerationError::MissingApiKey)
        );
        config.api_key = Some("   ".to_string());
        assert_eq!(
            config.require_api_key(),
            Err(ImageGenerationError::MissingApiKey)
        );
        config.api_key = Some("secret".to_string());
        assert_eq!(config.require_api_key(), Ok("secret"));

        config.endpoint = "https://example.test/v1beta/".to_string();
        assert_eq!(
            config.generate_content_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }

    #[test]
    fn noop_service_is_unavailable() {
        let service = NoopImageGenerationService;
        let service_obj: &dyn ImageGenerationService = &service;
        assert_eq!(
            block_on(service_obj.generate_wallpaper("anything")),
            Err(ImageGenerationError::Unavailable)
        );
    }
}
