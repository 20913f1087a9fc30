//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the wallpaper
//! image-generation contract with its wire models, the host service bundle, and clock helpers,
//! while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod image_generation;
pub mod time;

pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use image_generation::{
    build_wallpaper_prompt, decode_wallpaper_response, GenerateContentRequest,
    GenerateContentResponse, ImageGenerationConfig, ImageGenerationError, ImageGenerationFuture,
    ImageGenerationService, InlineData, NoopImageGenerationService, DEFAULT_IMAGE_ENDPOINT,
    DEFAULT_IMAGE_MODEL, WALLPAPER_ASPECT_RATIO,
};
pub use time::{unix_time_ms_now, ClockTime};
