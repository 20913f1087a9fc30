use std::rc::Rc;

use platform_host::{HostCapabilities, HostServices, HostStrategy, ImageGenerationService};

use crate::image_generation::{build_time_image_generation_config, WebImageGenerationService};

/// Returns the host strategy for the active build target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Builds the browser image-generation adapter from build-time configuration.
pub fn image_generation_service() -> WebImageGenerationService {
    WebImageGenerationService::new(build_time_image_generation_config())
}

/// Returns the capability snapshot for the active build.
pub fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(
            build_time_image_generation_config()
                .require_api_key()
                .is_ok(),
        ),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Assembles the [`HostServices`] bundle handed to `desktop_runtime::DesktopProvider`.
pub fn build_host_services() -> HostServices {
    let image_generation: Rc<dyn ImageGenerationService> = Rc::new(image_generation_service());
    HostServices {
        image_generation,
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_headless_strategy() {
        assert_eq!(selected_host_strategy(), HostStrategy::Headless);
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert!(!services.capabilities.image_generation.is_available());
    }
}
