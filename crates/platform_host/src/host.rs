//! Host-bundle and capability models injected into the desktop runtime by the entry layer.

use std::rc::Rc;

use crate::{ImageGenerationService, NoopImageGenerationService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native/test composition with no-op adapters.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host or not configured for this build.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Host capability snapshot exposed to runtime wiring and mounted apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Remote wallpaper generation availability.
    pub image_generation: CapabilityStatus,
}

impl HostCapabilities {
    /// Capability posture for a browser build, keyed on whether a credential was configured.
    pub const fn browser(image_generation_configured: bool) -> Self {
        Self {
            image_generation: if image_generation_configured {
                CapabilityStatus::Available
            } else {
                CapabilityStatus::Unavailable
            },
        }
    }

    /// Capability posture with every optional domain disabled.
    pub const fn headless() -> Self {
        Self {
            image_generation: CapabilityStatus::Unavailable,
        }
    }
}

/// Host service bundle injected into the shared desktop runtime.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, so the runtime and app crates never name browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Wallpaper image-generation backend.
    pub image_generation: Rc<dyn ImageGenerationService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle with no-op adapters, used natively and in tests.
    pub fn headless() -> Self {
        Self {
            image_generation: Rc::new(NoopImageGenerationService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::ImageGenerationError;

    #[test]
    fn headless_bundle_disables_image_generation() {
        let host = HostServices::headless();
        assert_eq!(host.host_strategy.as_str(), "headless");
        assert!(!host.capabilities.image_generation.is_available());
        assert_eq!(
            block_on(host.image_generation.generate_wallpaper("dunes")),
            Err(ImageGenerationError::Unavailable)
        );
    }

    #[test]
    fn browser_capabilities_follow_credential_configuration() {
        assert!(HostCapabilities::browser(true)
            .image_generation
            .is_available());
        assert!(!HostCapabilities::browser(false)
            .image_generation
            .is_available());
    }
}
