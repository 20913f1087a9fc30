//! Host-side runtime helpers for executing reducer effects.
//!
//! Reducer semantics stay pure; anything that touches the browser runs behind
//! [`DesktopHostContext`], which wraps the [`HostServices`] bundle injected by the entry layer.

use std::rc::Rc;

use leptos::logging;
use platform_host::{HostCapabilities, HostServices, ImageGenerationService};

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

#[derive(Clone, Debug)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl DesktopHostContext {
    /// Wraps an explicit host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured wallpaper image-generation service.
    pub fn image_generation_service(&self) -> Rc<dyn ImageGenerationService> {
        self.services.image_generation.clone()
    }

    /// Returns the capability snapshot advertised by the host.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, _runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ShowNotice(message) => self.show_notice(&message),
        }
    }

    /// Shows a blocking notice. Hosts without a document only log it.
    pub fn show_notice(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                logging::warn!("notice dropped, no browser window: {message}");
                return;
            };
            if let Err(err) = window.alert_with_message(message) {
                logging::warn!("notice alert failed: {err:?}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        logging::log!("[{}] notice: {message}", self.host_strategy_name());
    }
}
