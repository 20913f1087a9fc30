//! Maps pointer presses on a window surface to drag and reducer intents.

use crate::{model::AppId, reducer::DesktopAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Minimize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPress {
    /// Mouse-down on the title bar outside the controls.
    TitleBarDown,
    /// Click anywhere on the surface that was not stopped by a control.
    SurfaceClick,
    ControlDown(WindowControl),
    ControlClick(WindowControl),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PressOutcome {
    pub actions: Vec<DesktopAction>,
    pub begins_drag: bool,
    /// Keeps the event from reaching the surface handlers.
    pub stops_propagation: bool,
}

pub fn window_press_outcome(press: WindowPress, app_id: AppId) -> PressOutcome {
    match press {
        WindowPress::TitleBarDown => PressOutcome {
            actions: vec![DesktopAction::FocusWindow { app_id }],
            begins_drag: true,
            stops_propagation: false,
        },
        WindowPress::SurfaceClick => PressOutcome {
            actions: vec![DesktopAction::FocusWindow { app_id }],
            ..PressOutcome::default()
        },
        WindowPress::ControlDown(_) => PressOutcome {
            stops_propagation: true,
            ..PressOutcome::default()
        },
        WindowPress::ControlClick(control) => PressOutcome {
            actions: vec![match control {
                WindowControl::Minimize => DesktopAction::MinimizeWindow { app_id },
                WindowControl::Close => DesktopAction::CloseWindow { app_id },
            }],
            begins_drag: false,
            stops_propagation: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn title_bar_press_focuses_and_starts_drag() {
        let outcome = window_press_outcome(WindowPress::TitleBarDown, AppId::Files);
        assert_eq!(
            outcome.actions,
            vec![DesktopAction::FocusWindow {
                app_id: AppId::Files
            }]
        );
        assert!(outcome.begins_drag);
    }

    #[test]
    fn surface_click_focuses_without_drag() {
        let outcome = window_press_outcome(WindowPress::SurfaceClick, AppId::Terminal);
        assert_eq!(
            outcome.actions,
            vec![DesktopAction::FocusWindow {
                app_id: AppId::Terminal
            }]
        );
        assert!(!outcome.begins_drag);
    }

    #[test]
    fn control_presses_never_focus_or_drag() {
        for control in [WindowControl::Minimize, WindowControl::Close] {
            let down = window_press_outcome(WindowPress::ControlDown(control), AppId::Settings);
            assert!(down.actions.is_empty());
            assert!(down.stops_propagation);
            assert!(!down.begins_drag);

            let click = window_press_outcome(WindowPress::ControlClick(control), AppId::Settings);
            assert!(click.stops_propagation);
            assert!(!click.begins_drag);
            assert!(!click
                .actions
                .iter()
                .any(|action| matches!(action, DesktopAction::FocusWindow { .. })));
        }
    }

    #[test]
    fn control_clicks_dispatch_only_their_own_action() {
        assert_eq!(
            window_press_outcome(
                WindowPress::ControlClick(WindowControl::Minimize),
                AppId::ImageGen
            )
            .actions,
            vec![DesktopAction::MinimizeWindow {
                app_id: AppId::ImageGen
            }]
        );
        assert_eq!(
            window_press_outcome(WindowPress::ControlClick(WindowControl::Close), AppId::ImageGen)
                .actions,
            vec![DesktopAction::CloseWindow {
                app_id: AppId::ImageGen
            }]
        );
    }
}
