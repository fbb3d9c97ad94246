//! Arch Update Indicator Core Library
//!
//! Toolkit-independent logic behind the update tray icon: runs the
//! update-listing tool, keeps the list of pending updates, and describes what
//! the tray should show. Rendering is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use archupdate_indicator_core::{CommandUpdateSource, TerminalLauncher, UpdateMonitor};
//!
//! # async fn run() {
//! let source = CommandUpdateSource::new("checkupdates");
//! let launcher = TerminalLauncher::new("xterm", "sudo pacman -Syu");
//! let mut monitor = UpdateMonitor::new(source, launcher);
//!
//! let state = monitor.check_updates().await;
//! println!("{:?}: {} pending", state.status, state.pending_updates.len());
//! println!("{}", monitor.appearance().tooltip);
//! # }
//! ```

mod error;
mod presentation;
mod update;

pub use {
    error::{MonitorError, Result as CoreResult},
    presentation::{
        ABOUT, AboutInfo, MenuAction, MenuEntry, StatusIcon, TrayAppearance,
        build_menu_descriptor, icon_for,
    },
    update::{
        ActionOutcome, CheckTimer, CommandUpdateSource, InstallLauncher, ListingOutcome,
        TerminalLauncher, UpdateMonitor, UpdateSource, UpdateState, UpdateStatus,
        install_shell_line,
    },
};
