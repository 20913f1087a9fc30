//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    menu::MenuCommand,
    model::{AppId, DesktopState, MenuId},
};

const ABOUT_NOTICE: &str = "AuraOS v1.0.4\nModern Glassy Environment";
const APP_STORE_NOTICE: &str = "Coming soon in v1.1";
const SLEEP_NOTICE: &str = "Zzz...";
const CLOSE_WINDOW_NOTICE: &str = "Please use window controls";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an application, or restore and raise its existing window.
    OpenApp {
        /// Application to open.
        app_id: AppId,
    },
    /// Close an application's window.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Minimize an application's window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Raise an application's window to the top of the stack.
    FocusWindow {
        /// Window to raise.
        app_id: AppId,
    },
    /// Replace the desktop wallpaper.
    SetWallpaper {
        /// Any URL usable as a CSS background image, including `data:` URLs.
        url: String,
    },
    /// Open a top-bar menu, or close it when it is already open.
    ToggleMenu {
        /// Menu whose title was clicked.
        menu: MenuId,
    },
    /// Close the open top-bar menu, if any.
    CloseMenu,
    /// Run a top-bar menu command and close the menu.
    RunMenuCommand {
        /// Selected command.
        command: MenuCommand,
    },
    /// Replace the desktop with the shutdown screen.
    BeginShutdown,
    /// Return to boot defaults: no windows, default wallpaper, fresh z-index pool.
    ResetDesktop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Show a blocking informational notice to the user.
    ShowNotice(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer rejections. Window operations on absent windows are no-ops, not errors.
pub enum ReducerError {
    /// The desktop is shutting down; only a reset is accepted.
    #[error("desktop is shutting down")]
    ShuttingDown,
    /// A wallpaper update carried no URL.
    #[error("wallpaper url is empty")]
    EmptyWallpaperUrl,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::ShuttingDown`] for any action other than
/// [`DesktopAction::ResetDesktop`] while the shutdown screen is up, and
/// [`ReducerError::EmptyWallpaperUrl`] for a blank wallpaper URL.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    if state.shutting_down && action != DesktopAction::ResetDesktop {
        return Err(ReducerError::ShuttingDown);
    }

    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            state.windows.open(app_id);
            state.active_menu = None;
        }
        DesktopAction::CloseWindow { app_id } => {
            state.windows.close(app_id);
        }
        DesktopAction::MinimizeWindow { app_id } => {
            state.windows.minimize(app_id);
        }
        DesktopAction::FocusWindow { app_id } => {
            state.windows.focus(app_id);
        }
        DesktopAction::SetWallpaper { url } => {
            if url.trim().is_empty() {
                return Err(ReducerError::EmptyWallpaperUrl);
            }
            state.wallpaper_url = url;
        }
        DesktopAction::ToggleMenu { menu } => {
            state.active_menu = if state.active_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
        }
        DesktopAction::CloseMenu => {
            state.active_menu = None;
        }
        DesktopAction::RunMenuCommand { command } => {
            state.active_menu = None;
            match command {
                MenuCommand::About => effects.push(notice(ABOUT_NOTICE)),
                MenuCommand::OpenApp(app_id) => {
                    state.windows.open(app_id);
                }
                MenuCommand::AppStore => effects.push(notice(APP_STORE_NOTICE)),
                MenuCommand::Sleep => effects.push(notice(SLEEP_NOTICE)),
                MenuCommand::CloseWindowHint => effects.push(notice(CLOSE_WINDOW_NOTICE)),
                MenuCommand::Restart | MenuCommand::RefreshDesktop => {
                    *state = DesktopState::default();
                }
                MenuCommand::ShutDown => begin_shutdown(state),
            }
        }
        DesktopAction::BeginShutdown => begin_shutdown(state),
        DesktopAction::ResetDesktop => {
            *state = DesktopState::default();
        }
    }

    Ok(effects)
}

fn begin_shutdown(state: &mut DesktopState) {
    state.shutting_down = true;
    state.active_menu = None;
}

fn notice(text: &str) -> RuntimeEffect {
    RuntimeEffect::ShowNotice(text.to_string())
}
