use crate::{AppError, AppResult};

use std::{panic::Location, sync::mpsc};

use archupdate_indicator_core::{MenuEntry, TrayAppearance, UpdateState, build_menu_descriptor, icon_for};
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Redraw icon, tooltip and context menu.
    Render(TrayView),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Everything the tray displays, detached from toolkit types so it can cross threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayView {
    /// Icon and tooltip.
    pub appearance: TrayAppearance,
    /// Context menu rows, top to bottom.
    pub menu: Vec<MenuEntry>,
}

impl TrayView {
    /// View of an arbitrary state.
    pub fn from_state(state: &UpdateState) -> Self {
        Self {
            appearance: icon_for(state),
            menu: build_menu_descriptor(state),
        }
    }
}

/// Destination for [`TrayCommand`]s, i.e. whatever owns the tray icon.
pub trait TraySink {
    /// Deliver `command`; fails once the receiving side is gone.
    fn send(&self, command: TrayCommand) -> AppResult<()>;
}

impl TraySink for EventLoopProxy<TrayCommand> {
    #[track_caller]
    fn send(&self, command: TrayCommand) -> AppResult<()> {
        self.send_event(command).map_err(|_| AppError::EventLoopClosed {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TraySink for mpsc::Sender<TrayCommand> {
    #[track_caller]
    fn send(&self, command: TrayCommand) -> AppResult<()> {
        mpsc::Sender::send(self, command).map_err(|_| AppError::EventLoopClosed {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
