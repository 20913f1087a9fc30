//! Application catalog and per-window content mounting.

mod placeholders;

use desktop_app_aura_gen::AuraGenApp;
use leptos::*;

use crate::{
    model::AppId,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

use self::placeholders::{FilesPlaceholder, SettingsPanel, TerminalPlaceholder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub label: &'static str,
    /// Font Awesome class list.
    pub icon: &'static str,
    /// CSS accent color for the icon.
    pub color: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    &APP_CATALOG[catalog_index(app_id)]
}

/// Builds the content slot for `app_id`'s window.
///
/// Called once per window mount, so app-local state survives focus and z-order changes.
pub fn render_window_contents(runtime: DesktopRuntimeContext, app_id: AppId) -> View {
    match app_id {
        AppId::ImageGen => {
            let host = runtime.host.get_value();
            let generator = host.image_generation_service();
            let available = host.capabilities().image_generation.is_available();
            let set_wallpaper = Callback::new(move |url: String| {
                runtime.dispatch_action(DesktopAction::SetWallpaper { url });
            });
            view! { <AuraGenApp generator=generator available=available set_wallpaper=set_wallpaper /> }.into_view()
        }
        AppId::Terminal => view! { <TerminalPlaceholder /> }.into_view(),
        AppId::Files => view! { <FilesPlaceholder /> }.into_view(),
        AppId::Settings => view! { <SettingsPanel /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_keeps_launcher_order() {
        let ids: Vec<AppId> = app_catalog().iter().map(|app| app.app_id).collect();
        assert_eq!(
            ids,
            vec![AppId::ImageGen, AppId::Terminal, AppId::Files, AppId::Settings]
        );
    }

    #[test]
    fn every_app_id_resolves_to_its_own_descriptor() {
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
    }

    #[test]
    fn descriptor_metadata_matches_catalog_file() {
        let image_gen = app_descriptor(AppId::ImageGen);
        assert_eq!(image_gen.label, "Aura Gen");
        assert_eq!(image_gen.icon, "fa-solid fa-palette");
        assert_eq!(image_gen.color, "#60a5fa");
        assert_eq!(AppId::Terminal.title(), "Terminal");
    }
}
