//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{menus::TopBar, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps,
    model::{css_background_image, Point, SHUTDOWN_DELAY_MS},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell, or the shutdown screen while the desktop is going down.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shutting_down = Signal::derive(move || state.with(|desktop| desktop.shutting_down));
    let wallpaper_style = move || {
        state.with(|desktop| css_background_image(&desktop.wallpaper_url))
    };

    view! {
        <Show when=move || !shutting_down.get() fallback=|| view! { <ShutdownScreen /> }>
            <div class="desktop-shell" style=wallpaper_style>
                <TopBar />
                <div class="desktop-scrim" aria-hidden="true"></div>
                <DesktopIcons />
                <div class="desktop-window-layer">
                    <For
                        each=move || state.with(|desktop| desktop.visible_windows())
                        key=|window| window.id
                        let:window
                    >
                        <DesktopWindow app_id=window.id />
                    </For>
                </div>
                <Taskbar />
            </div>
        </Show>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <nav class="desktop-icons" aria-label="Desktop">
            {apps::app_catalog()
                .iter()
                .map(|app| {
                    let app_id = app.app_id;
                    view! {
                        <button
                            class="desktop-icon"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::OpenApp { app_id })
                        >
                            <span class="desktop-icon-tile">
                                <i class=app.icon style=format!("color:{};", app.color) aria-hidden="true"></i>
                            </span>
                            <span class="desktop-icon-label">{app.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn ShutdownScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    match set_timeout_with_handle(
        move || runtime.dispatch_action(DesktopAction::ResetDesktop),
        Duration::from_millis(SHUTDOWN_DELAY_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("shutdown reset timer failed: {err:?}"),
    }

    view! {
        <div class="shutdown-screen" role="status">
            <i class="fa-solid fa-gem shutdown-mark" aria-hidden="true"></i>
            <div class="shutdown-caption">"Shutting Down AuraOS..."</div>
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}
