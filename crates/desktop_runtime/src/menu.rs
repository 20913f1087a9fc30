//! Static top menu-bar content.

use crate::model::{AppId, MenuId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Commands reachable from the top menu bar.
pub enum MenuCommand {
    About,
    OpenApp(AppId),
    AppStore,
    Sleep,
    Restart,
    ShutDown,
    CloseWindowHint,
    RefreshDesktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub shortcut: Option<&'static str>,
    /// Items without a command only dismiss the menu.
    pub command: Option<MenuCommand>,
    pub danger: bool,
}

impl MenuItem {
    const fn command(label: &'static str, command: MenuCommand) -> Self {
        Self {
            label,
            shortcut: None,
            command: Some(command),
            danger: false,
        }
    }

    const fn inert(label: &'static str, shortcut: Option<&'static str>) -> Self {
        Self {
            label,
            shortcut,
            command: None,
            danger: false,
        }
    }
}

const SYSTEM_MENU: [MenuItem; 6] = [
    MenuItem::command("About AuraOS", MenuCommand::About),
    MenuItem::command(
        "System Settings...",
        MenuCommand::OpenApp(AppId::Settings),
    ),
    MenuItem::command("App Store", MenuCommand::AppStore),
    MenuItem::command("Sleep", MenuCommand::Sleep),
    MenuItem::command("Restart", MenuCommand::Restart),
    MenuItem {
        label: "Shut Down...",
        shortcut: None,
        command: Some(MenuCommand::ShutDown),
        danger: true,
    },
];

const FILE_MENU: [MenuItem; 3] = [
    MenuItem::inert("New Window", Some("⌘N")),
    MenuItem::inert("Open...", Some("⌘O")),
    MenuItem {
        label: "Close Window",
        shortcut: Some("⌘W"),
        command: Some(MenuCommand::CloseWindowHint),
        danger: false,
    },
];

const EDIT_MENU: [MenuItem; 5] = [
    MenuItem::inert("Undo", Some("⌘Z")),
    MenuItem::inert("Redo", Some("⇧⌘Z")),
    MenuItem::inert("Cut", Some("⌘X")),
    MenuItem::inert("Copy", Some("⌘C")),
    MenuItem::inert("Paste", Some("⌘V")),
];

const VIEW_MENU: [MenuItem; 3] = [
    MenuItem::command("Refresh Desktop", MenuCommand::RefreshDesktop),
    MenuItem::inert("Enter Full Screen", Some("⌃⌘F")),
    MenuItem::inert("Show Desktop", None),
];

pub fn menu_items(menu: MenuId) -> &'static [MenuItem] {
    match menu {
        MenuId::System => &SYSTEM_MENU,
        MenuId::File => &FILE_MENU,
        MenuId::Edit => &EDIT_MENU,
        MenuId::View => &VIEW_MENU,
    }
}
