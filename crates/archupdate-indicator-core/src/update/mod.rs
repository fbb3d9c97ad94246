mod launcher;
mod monitor;
mod source;
mod state;
mod timer;

pub use {
    launcher::{InstallLauncher, TerminalLauncher, install_shell_line},
    monitor::{ActionOutcome, UpdateMonitor},
    source::{CommandUpdateSource, UpdateSource},
    state::{ListingOutcome, UpdateState, UpdateStatus},
    timer::CheckTimer,
};
