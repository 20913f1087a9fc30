use leptos::*;

use crate::{model::css_background_image, runtime_context::use_desktop_runtime};

const TERMINAL_BANNER: [(&str, &str); 3] = [
    ("terminal-line", "AuraOS Kernel v1.0.4-aura"),
    ("terminal-line dim", "Initializing glassy subsystems..."),
    (
        "terminal-line accent",
        "GPU Acceleration: Enabled (Quartz Glass Core)",
    ),
];

const PLACEHOLDER_FOLDERS: [&str; 6] = [
    "Documents", "Photos", "Work", "System", "Projects", "Assets",
];

#[component]
pub(super) fn TerminalPlaceholder() -> impl IntoView {
    view! {
        <div class="app-terminal">
            {TERMINAL_BANNER
                .iter()
                .map(|(class, text)| view! { <p class=*class>{*text}</p> })
                .collect_view()}
            <p class="terminal-line">
                "system@aura:~$ "
                <span class="terminal-cursor">"_"</span>
            </p>
        </div>
    }
}

#[component]
pub(super) fn FilesPlaceholder() -> impl IntoView {
    view! {
        <div class="app-files">
            {PLACEHOLDER_FOLDERS
                .iter()
                .map(|folder| {
                    view! {
                        <div class="files-folder">
                            <i class="fa-solid fa-folder" aria-hidden="true"></i>
                            <span>{*folder}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let wallpaper_preview = move || {
        runtime
            .state
            .with(|state| css_background_image(&state.wallpaper_url))
    };

    view! {
        <div class="app-settings">
            <h3>"Display & Aura"</h3>
            <div class="settings-row">
                <span>"Acrylic Transparency"</span>
                <div class="settings-toggle on" aria-hidden="true">
                    <div class="settings-toggle-knob"></div>
                </div>
            </div>
            <div class="settings-row">
                <span>"Dynamic Blur Intensity"</span>
                <input type="range" class="settings-range" />
            </div>
            <div class="settings-card">
                <span class="settings-caption">"CURRENT WALLPAPER"</span>
                <div class="settings-wallpaper-preview" style=wallpaper_preview></div>
            </div>
        </div>
    }
}
