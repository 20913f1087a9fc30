use serde::{Deserialize, Serialize};

use crate::{apps, window_manager::WindowRegistry};

/// First value of the shared z-index pool; the first opened window receives `Z_INDEX_BASE + 1`.
pub const Z_INDEX_BASE: u32 = 10;
/// Wallpaper shown at boot and after a desktop reset.
pub const DEFAULT_WALLPAPER_URL: &str = "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop";
/// Delay between entering the shutdown screen and resetting the desktop.
pub const SHUTDOWN_DELAY_MS: u64 = 2_000;
pub const WINDOW_WIDTH: i32 = 700;
pub const WINDOW_HEIGHT: i32 = 500;
/// Top-left corner of a freshly mounted window surface.
pub const DEFAULT_WINDOW_POSITION: Point = Point { x: 100, y: 100 };

/// Launchable application kinds. A kind is also the key of its (single) window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppId {
    Terminal,
    ImageGen,
    Settings,
    Files,
}

impl AppId {
    pub const ALL: [AppId; 4] = [Self::Terminal, Self::ImageGen, Self::Settings, Self::Files];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::ImageGen => "imageGen",
            Self::Settings => "settings",
            Self::Files => "files",
        }
    }

    /// Display label from the application catalog.
    pub fn title(self) -> &'static str {
        apps::app_descriptor(self).label
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub z_index: u32,
}

impl WindowRecord {
    /// Whether the shell should mount a view for this window.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// Screen-space point in CSS pixels, used for pointers, offsets and window origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Top menu-bar menus, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    System,
    File,
    Edit,
    View,
}

impl MenuId {
    pub const ALL: [MenuId; 4] = [Self::System, Self::File, Self::Edit, Self::View];

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "AuraOS",
            Self::File => "File",
            Self::Edit => "Edit",
            Self::View => "View",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: WindowRegistry,
    pub wallpaper_url: String,
    /// Once set the desktop is replaced by the shutdown screen until the reset fires.
    pub shutting_down: bool,
    pub active_menu: Option<MenuId>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowRegistry::default(),
            wallpaper_url: DEFAULT_WALLPAPER_URL.to_string(),
            shutting_down: false,
            active_menu: None,
        }
    }
}

impl DesktopState {
    pub fn active_window(&self) -> Option<AppId> {
        self.windows.active_window()
    }

    /// Windows the shell renders, in registry order. Paint order comes from `z_index`.
    pub fn visible_windows(&self) -> Vec<WindowRecord> {
        self.windows.visible().cloned().collect()
    }
}

/// Inline `background-image` declaration for `url`, quoted for a single-quoted CSS string.
pub fn css_background_image(url: &str) -> String {
    let mut quoted = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\\' | '\'' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            '\n' | '\r' => {}
            _ => quoted.push(ch),
        }
    }
    format!("background-image:url('{quoted}');")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_ids_use_catalog_tokens() {
        assert_eq!(AppId::ImageGen.to_string(), "imageGen");
        assert_eq!(
            serde_json::to_string(&AppId::ImageGen).expect("serialize"),
            "\"imageGen\""
        );
        let parsed: AppId = serde_json::from_str("\"files\"").expect("deserialize");
        assert_eq!(parsed, AppId::Files);
    }

    #[test]
    fn point_offset_is_component_wise() {
        assert_eq!(
            Point::new(130, 145).offset_from(Point::new(100, 100)),
            Point::new(30, 45)
        );
    }

    #[test]
    fn default_state_boots_with_default_wallpaper_and_no_windows() {
        let state = DesktopState::default();
        assert_eq!(state.wallpaper_url, DEFAULT_WALLPAPER_URL);
        assert!(state.windows.is_empty());
        assert_eq!(state.active_window(), None);
        assert!(!state.shutting_down);
    }

    #[test]
    fn background_image_escapes_quotes_and_backslashes() {
        assert_eq!(
            css_background_image("https://example.test/a.png"),
            "background-image:url('https://example.test/a.png');"
        );
        assert_eq!(
            css_background_image("https://example.test/it's\\x.png"),
            "background-image:url('https://example.test/it\\'s\\\\x.png');"
        );
        assert_eq!(
            css_background_image("data:image/png;base64,AA\nAA"),
            "background-image:url('data:image/png;base64,AAAA');"
        );
    }
}
