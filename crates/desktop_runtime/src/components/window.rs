use super::*;
use crate::{
    drag::WindowDrag,
    model::{AppId, WINDOW_HEIGHT, WINDOW_WIDTH},
    window_input::{window_press_outcome, WindowControl, WindowPress},
};

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Position is owned by this mount; a restored or reopened window starts from the default.
    let drag = create_rw_signal(WindowDrag::default());

    let window = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.windows.get(app_id).cloned())
    });

    let press = move |press: WindowPress, ev: &web_sys::MouseEvent| {
        let outcome = window_press_outcome(press, app_id);
        if outcome.stops_propagation {
            stop_mouse_event(ev);
        }
        if outcome.begins_drag {
            let pointer = pointer_from_mouse_event(ev);
            drag.update(|state| state.begin(pointer));
        }
        for action in outcome.actions {
            runtime.dispatch_action(action);
        }
    };
    let track_move = move |ev: web_sys::MouseEvent| {
        if !drag.with_untracked(WindowDrag::is_dragging) {
            return;
        }
        let pointer = pointer_from_mouse_event(&ev);
        drag.update(|state| {
            state.track(pointer);
        });
    };
    let end_move = move |_: web_sys::MouseEvent| {
        if drag.with_untracked(WindowDrag::is_dragging) {
            drag.update(|state| {
                state.end();
            });
        }
    };

    let style = move || {
        let (position, dragging) = drag.with(|state| (state.position(), state.is_dragging()));
        let z_index = window.with(|w| w.as_ref().map(|w| w.z_index).unwrap_or_default());
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};transform:scale({});",
            position.x,
            position.y,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            z_index,
            if dragging { "1.02" } else { "1" }
        )
    };
    let title = move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    };

    // Mounted once; focus and z-order changes only restyle the surface.
    let contents = apps::render_window_contents(runtime, app_id);

    view! {
        <section
            class="desktop-window"
            class:dragging=move || drag.with(WindowDrag::is_dragging)
            style=style
            role="dialog"
            aria-label=title
            on:mousemove=track_move
            on:mouseup=end_move
            on:mouseleave=end_move
            on:click=move |ev| press(WindowPress::SurfaceClick, &ev)
        >
            <header
                class="titlebar"
                on:mousedown=move |ev| press(WindowPress::TitleBarDown, &ev)
            >
                <span class="titlebar-title">
                    <span class="titlebar-dot" aria-hidden="true"></span>
                    {title}
                </span>
                <div class="titlebar-controls">
                    <button
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:mousedown=move |ev| {
                            press(WindowPress::ControlDown(WindowControl::Minimize), &ev)
                        }
                        on:click=move |ev| {
                            press(WindowPress::ControlClick(WindowControl::Minimize), &ev)
                        }
                    ></button>
                    <button
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:mousedown=move |ev| {
                            press(WindowPress::ControlDown(WindowControl::Close), &ev)
                        }
                        on:click=move |ev| {
                            press(WindowPress::ControlClick(WindowControl::Close), &ev)
                        }
                    ></button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
        </section>
    }
}
