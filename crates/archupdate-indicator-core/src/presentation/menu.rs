use crate::UpdateState;

/// Text of the informational entry shown when nothing is pending.
pub(crate) const NO_UPDATES_LABEL: &str = "No updates";

/// User actions the context menu can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Run an update check immediately.
    CheckNow,
    /// Open a terminal running the install command.
    Install,
    /// Show information about the application.
    About,
    /// Remove the tray icon and exit.
    Quit,
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 4] = [Self::CheckNow, Self::Install, Self::About, Self::Quit];

    /// Stable identifier used for the rendered menu item.
    pub fn id(self) -> &'static str {
        match self {
            Self::CheckNow => "check-now",
            Self::Install => "install",
            Self::About => "about",
            Self::Quit => "quit",
        }
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckNow => "Check now",
            Self::Install => "Install",
            Self::About => "About",
            Self::Quit => "Quit",
        }
    }

    /// Map a menu item id back to its action.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// One row of the context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable item emitting an action.
    Action(MenuAction),
    /// Horizontal separator.
    Separator,
    /// Disabled, informational text.
    Info(String),
}

/// Describe the context menu for `state`.
///
/// Actions first (Install only when something is pending), then one
/// informational row per pending update.
pub fn build_menu_descriptor(state: &UpdateState) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(7 + state.pending_updates.len());

    entries.push(MenuEntry::Action(MenuAction::CheckNow));
    if state.has_updates() {
        entries.push(MenuEntry::Action(MenuAction::Install));
    }
    entries.push(MenuEntry::Action(MenuAction::About));
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Action(MenuAction::Quit));
    entries.push(MenuEntry::Separator);

    if state.has_updates() {
        entries.extend(state.pending_updates.iter().cloned().map(MenuEntry::Info));
    } else {
        entries.push(MenuEntry::Info(NO_UPDATES_LABEL.to_string()));
    }

    entries
}
