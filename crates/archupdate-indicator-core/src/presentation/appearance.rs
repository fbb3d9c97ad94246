use crate::{UpdateState, UpdateStatus};

/// Which of the three tray images to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    /// Nothing pending.
    NoUpdates,
    /// Updates are pending.
    UpdatesAvailable,
    /// The last check failed.
    CheckFailed,
}

impl StatusIcon {
    /// File name of the image inside the icons folder.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::NoUpdates => "no_updates.png",
            Self::UpdatesAvailable => "updates_available.png",
            Self::CheckFailed => "updates_failed.png",
        }
    }
}

impl From<UpdateStatus> for StatusIcon {
    fn from(status: UpdateStatus) -> Self {
        match status {
            UpdateStatus::NoUpdates => Self::NoUpdates,
            UpdateStatus::UpdatesAvailable => Self::UpdatesAvailable,
            UpdateStatus::CheckFailed => Self::CheckFailed,
        }
    }
}

/// Icon and tooltip the tray should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayAppearance {
    /// Image to show.
    pub icon: StatusIcon,
    /// Hover text.
    pub tooltip: String,
}

/// Icon and tooltip for `state`.
pub fn icon_for(state: &UpdateState) -> TrayAppearance {
    let tooltip = match state.status {
        UpdateStatus::NoUpdates => "No updates available".to_string(),
        UpdateStatus::UpdatesAvailable => {
            format!("{} updates available", state.pending_updates.len())
        }
        UpdateStatus::CheckFailed => "Update check failed".to_string(),
    };

    TrayAppearance {
        icon: state.status.into(),
        tooltip,
    }
}
