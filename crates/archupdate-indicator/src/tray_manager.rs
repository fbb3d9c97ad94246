//! System tray icon with state-based updates.
//!
//! Shows one of three status icons (no updates, updates available, check
//! failed) and rebuilds the context menu from a [`TrayView`] on every render.

use crate::{AppError, AppResult, TrayView};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use archupdate_indicator_core::{MenuEntry, StatusIcon};
use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Edge length of the generated stand-in icon.
const FALLBACK_ICON_SIZE: u32 = 22;

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    icons_folder: PathBuf,
}

impl TrayManager {
    /// Create the tray icon showing `view`.
    ///
    /// Must run on the GUI thread after the event loop has started.
    #[track_caller]
    #[instrument(skip(view))]
    pub fn new(icons_folder: PathBuf, view: &TrayView) -> AppResult<Self> {
        let menu = Self::build_menu(&view.menu)?;
        let icon = Self::load_icon(&icons_folder, view.appearance.icon)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(&view.appearance.tooltip)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            icons_folder,
        })
    }

    /// Show a new icon, tooltip and context menu.
    #[track_caller]
    #[instrument(skip(self, view), fields(tooltip = %view.appearance.tooltip))]
    pub fn render(&mut self, view: &TrayView) -> AppResult<()> {
        let icon = Self::load_icon(&self.icons_folder, view.appearance.icon)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(&view.appearance.tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let menu = Self::build_menu(&view.menu)?;
        self.tray_icon.set_menu(Some(Box::new(menu)));

        debug!(entries = view.menu.len(), "Tray rendered");

        Ok(())
    }

    #[track_caller]
    fn build_menu(entries: &[MenuEntry]) -> AppResult<Menu> {
        let menu = Menu::new();

        for entry in entries {
            match entry {
                MenuEntry::Action(action) => {
                    menu.append(&MenuItem::with_id(action.id(), action.label(), true, None))
                }
                MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator()),
                MenuEntry::Info(text) => menu.append(&MenuItem::new(text, false, None)),
            }
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu entry {:?}: {}", entry, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        Ok(menu)
    }

    /// Load the status icon from the icons folder, or a generated square if
    /// the file is missing or unreadable.
    #[track_caller]
    fn load_icon(icons_folder: &Path, icon: StatusIcon) -> AppResult<Icon> {
        let path = icons_folder.join(icon.file_name());

        match Self::decode_icon(&path) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                warn!(path = ?path, error = %e, "Falling back to generated icon");
                Self::fallback_icon(icon)
            }
        }
    }

    #[track_caller]
    fn decode_icon(path: &Path) -> AppResult<Icon> {
        let img = image::open(path).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode icon {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Solid square in the status colour.
    #[track_caller]
    pub(crate) fn fallback_icon(icon: StatusIcon) -> AppResult<Icon> {
        Icon::from_rgba(
            Self::fallback_rgba(icon),
            FALLBACK_ICON_SIZE,
            FALLBACK_ICON_SIZE,
        )
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to create fallback icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub(crate) fn fallback_rgba(icon: StatusIcon) -> Vec<u8> {
        let pixel: [u8; 4] = match icon {
            StatusIcon::NoUpdates => [0x2e, 0xa0, 0x43, 0xff],
            StatusIcon::UpdatesAvailable => [0xe0, 0x9b, 0x1a, 0xff],
            StatusIcon::CheckFailed => [0xd0, 0x2c, 0x2c, 0xff],
        };

        pixel.repeat((FALLBACK_ICON_SIZE * FALLBACK_ICON_SIZE) as usize)
    }
}
