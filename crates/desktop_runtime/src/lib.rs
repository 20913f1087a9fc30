//! Shared desktop runtime: window management, shell reducer, and the Leptos desktop shell.

pub mod apps;
pub mod components;
pub mod drag;
pub mod effect_executor;
pub mod host;
pub mod menu;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_input;
pub mod window_manager;

pub use apps::{app_catalog, app_descriptor, AppDescriptor};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use drag::{DragPhase, WindowDrag};
pub use host::DesktopHostContext;
pub use menu::{menu_items, MenuCommand, MenuItem};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_input::{window_press_outcome, PressOutcome, WindowControl, WindowPress};
pub use window_manager::WindowRegistry;
