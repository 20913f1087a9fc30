//! Request lifecycle and history for the generator view, kept free of UI types.

use platform_host::ImageGenerationError;

/// Most recent generations kept on screen.
pub const HISTORY_LIMIT: usize = 5;
/// User-facing message for any failed generation. The cause is logged, not shown.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate image. Please check your API configuration.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// View state of one generator window.
pub struct GeneratorState {
    /// Whether the host has a usable image-generation backend.
    pub available: bool,
    /// Current prompt text, exactly as typed.
    pub prompt: String,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Generated image URLs, newest first.
    pub history: Vec<String>,
    /// Message from the last failed request, cleared when the next one starts.
    pub error: Option<String>,
}

impl GeneratorState {
    /// Fresh state for a host whose backend is (or is not) configured.
    pub fn new(available: bool) -> Self {
        Self {
            available,
            ..Self::default()
        }
    }

    /// Starts a request for the current prompt.
    ///
    /// Returns the prompt to send, or `None` when the backend is unavailable, the prompt is blank,
    /// or a request is already in flight; in that case nothing changes.
    pub fn begin_request(&mut self) -> Option<String> {
        if !self.available || self.loading || self.prompt.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.prompt.clone())
    }

    /// Records the outcome of the in-flight request.
    pub fn finish_request(&mut self, result: Result<String, ImageGenerationError>) {
        self.loading = false;
        match result {
            Ok(url) => {
                self.history.insert(0, url);
                self.history.truncate(HISTORY_LIMIT);
            }
            Err(_) => self.error = Some(GENERATION_FAILED_MESSAGE.to_string()),
        }
    }

    /// Whether the Generate button accepts presses.
    pub fn can_submit(&self) -> bool {
        self.available && !self.loading
    }

    /// Whether the "creations will appear here" placeholder is shown.
    pub fn show_empty_placeholder(&self) -> bool {
        self.history.is_empty() && !self.loading
    }
}
