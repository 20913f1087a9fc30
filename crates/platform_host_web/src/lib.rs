//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer. It currently provides the
//! wallpaper image-generation adapter and the [`build_host_services`] factory used by the entry
//! crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod image_generation;

pub use adapters::{
    build_host_services, host_capabilities, image_generation_service, selected_host_strategy,
};
pub use image_generation::{build_time_image_generation_config, WebImageGenerationService};
