use crate::{CoreResult, MonitorError};

use std::{future::Future, panic::Location, process::Stdio};

use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::debug;

/// Something that can run the install command where the user can see it.
pub trait InstallLauncher {
    /// Start the install and resolve once it has finished.
    fn launch_install(&self) -> impl Future<Output = CoreResult<()>> + Send;
}

/// Opens a terminal emulator running the install command.
///
/// The terminal must understand `-e <command>`. The command is followed by a
/// prompt so the terminal stays open until the user presses enter.
#[derive(Debug, Clone)]
pub struct TerminalLauncher {
    terminal: String,
    update_cmd: String,
}

impl TerminalLauncher {
    /// Launcher using `terminal` to run `update_cmd`.
    pub fn new(terminal: impl Into<String>, update_cmd: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            update_cmd: update_cmd.into(),
        }
    }

    /// The shell line handed to `sh -c`.
    pub fn shell_line(&self) -> String {
        install_shell_line(&self.terminal, &self.update_cmd)
    }
}

/// Build `<terminal> -e 'bash -c "<update_cmd>; read -p \"...\""'`.
pub fn install_shell_line(terminal: &str, update_cmd: &str) -> String {
    format!(
        r#"{terminal} -e 'bash -c "{update_cmd}; read -p \"Press enter to close terminal\""'"#
    )
}

impl InstallLauncher for TerminalLauncher {
    async fn launch_install(&self) -> CoreResult<()> {
        let shell_line = self.shell_line();
        debug!(command = %shell_line, "Launching install terminal");

        // The exit status is not inspected: a terminal that failed to start
        // its command is indistinguishable from one the user closed.
        let status = Command::new("sh")
            .arg("-c")
            .arg(&shell_line)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|source| MonitorError::InstallLaunchFailed {
                terminal: self.terminal.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(exit_code = ?status.code(), "Install terminal closed");

        Ok(())
    }
}
