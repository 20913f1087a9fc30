//! Browser image-generation adapter backed by the `generateContent` REST endpoint.

use gloo_net::http::Request;
use platform_host::{
    decode_wallpaper_response, GenerateContentRequest, ImageGenerationConfig,
    ImageGenerationError, ImageGenerationFuture, ImageGenerationService,
};

/// Reads the image-generation configuration baked in at compile time.
///
/// `AURA_GEMINI_API_KEY` supplies the credential and `AURA_GEMINI_MODEL` optionally overrides the
/// default model. Both are read with `option_env!`, so the browser bundle never touches a
/// process environment at runtime.
pub fn build_time_image_generation_config() -> ImageGenerationConfig {
    let mut config = ImageGenerationConfig {
        api_key: option_env!("AURA_GEMINI_API_KEY").map(str::to_string),
        ..ImageGenerationConfig::default()
    };
    if let Some(model) = option_env!("AURA_GEMINI_MODEL").filter(|model| !model.trim().is_empty())
    {
        config.model = model.trim().to_string();
    }
    config
}

#[derive(Debug, Clone, Default)]
/// Browser wallpaper generator that posts to the configured model over `fetch`.
pub struct WebImageGenerationService {
    config: ImageGenerationConfig,
}

impl WebImageGenerationService {
    /// Creates an adapter for `config`.
    pub fn new(config: ImageGenerationConfig) -> Self {
        Self { config }
    }

    async fn request_wallpaper(&self, theme: &str) -> Result<String, ImageGenerationError> {
        let api_key = self.config.require_api_key()?;
        let body = GenerateContentRequest::wallpaper(theme);

        let response = Request::post(&self.config.generate_content_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .map_err(|err| ImageGenerationError::Request(err.to_string()))?
            .send()
            .await
            .map_err(|err| ImageGenerationError::Request(err.to_string()))?;

        if !response.ok() {
            return Err(ImageGenerationError::Status(response.status()));
        }

        let raw = response
            .text()
            .await
            .map_err(|err| ImageGenerationError::Decode(err.to_string()))?;
        decode_wallpaper_response(&raw)
    }
}

impl ImageGenerationService for WebImageGenerationService {
    fn generate_wallpaper<'a>(
        &'a self,
        theme: &'a str,
    ) -> ImageGenerationFuture<'a, Result<String, ImageGenerationError>> {
        Box::pin(self.request_wallpaper(theme))
    }
}
