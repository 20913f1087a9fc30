use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let active_app = Signal::derive(move || state.with(|desktop| desktop.active_window()));

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            {apps::app_catalog()
                .iter()
                .map(|app| {
                    let app_id = app.app_id;
                    let is_active = move || active_app.get() == Some(app_id);
                    view! {
                        <button
                            class="taskbar-app"
                            class:active=is_active
                            aria-label=app.label
                            aria-pressed=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| runtime.dispatch_action(DesktopAction::OpenApp { app_id })
                        >
                            <i class=app.icon style=format!("color:{};", app.color) aria-hidden="true"></i>
                            <span class="taskbar-tooltip">{app.label}</span>
                            <Show when=is_active fallback=|| ()>
                                <span class="taskbar-active-indicator" aria-hidden="true"></span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </footer>
    }
}
