use platform_host::ClockTime;

use super::*;
use crate::menu::{menu_items, MenuItem};
use crate::model::MenuId;

#[component]
pub(super) fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(ClockTime::now());

    match set_interval_with_handle(move || clock.set(ClockTime::now()), Duration::from_secs(1)) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("menu bar clock interval failed: {err:?}"),
    }

    // Mouse-downs inside the bar stop before reaching the window, so this only sees outside presses.
    let outside_press_listener = window_event_listener(ev::mousedown, move |_| {
        if state.with_untracked(|desktop| desktop.active_menu.is_some()) {
            runtime.dispatch_action(DesktopAction::CloseMenu);
        }
    });
    on_cleanup(move || outside_press_listener.remove());

    view! {
        <header
            class="top-bar"
            role="menubar"
            on:mousedown:undelegated=move |ev| ev.stop_propagation()
        >
            <div class="top-bar-menus">
                {MenuId::ALL
                    .into_iter()
                    .map(|menu| view! { <TopBarMenu menu=menu /> })
                    .collect_view()}
            </div>
            <div class="top-bar-clock" aria-live="off">
                {move || clock.get().format_24h()}
            </div>
            <div class="top-bar-status" aria-hidden="true">
                <i class="fa-solid fa-magnifying-glass"></i>
                <i class="fa-solid fa-wifi"></i>
                <i class="fa-solid fa-battery-three-quarters"></i>
                <i class="fa-solid fa-sliders"></i>
            </div>
        </header>
    }
}

#[component]
fn TopBarMenu(menu: MenuId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = Signal::derive(move || runtime.state.with(|desktop| desktop.active_menu == Some(menu)));

    let title = if menu == MenuId::System {
        view! {
            <i class="fa-solid fa-gem top-bar-brand-icon" aria-hidden="true"></i>
            <span class="top-bar-brand">{menu.label()}</span>
        }
        .into_view()
    } else {
        view! { <span>{menu.label()}</span> }.into_view()
    };

    view! {
        <div class="top-bar-menu">
            <button
                class="top-bar-menu-title"
                class:open=is_open
                role="menuitem"
                aria-haspopup="true"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleMenu { menu })
            >
                {title}
            </button>
            <Show when=move || is_open.get() fallback=|| ()>
                <div class="top-bar-dropdown" role="menu" aria-label=menu.label()>
                    {menu_items(menu)
                        .iter()
                        .map(|item| view! { <TopBarMenuItem item=*item /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TopBarMenuItem(item: MenuItem) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let choose = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(match item.command {
            Some(command) => DesktopAction::RunMenuCommand { command },
            None => DesktopAction::CloseMenu,
        });
    };

    view! {
        <button class="top-bar-menu-item" class:danger=item.danger role="menuitem" on:click=choose>
            <span>{item.label}</span>
            {item
                .shortcut
                .map(|shortcut| view! { <span class="top-bar-shortcut">{shortcut}</span> })}
        </button>
    }
}
