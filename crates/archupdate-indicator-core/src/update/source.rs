use crate::{CoreResult, MonitorError, update::ListingOutcome};

use std::{future::Future, panic::Location, process::Stdio, time::Duration};

use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::debug;

/// Something that can report the pending package updates.
pub trait UpdateSource {
    /// Run the listing once and return what it reported.
    ///
    /// Returns `Err` only when no exit code could be obtained (launch failure,
    /// timeout). A non-zero exit is still `Ok` and interpreted by the caller.
    fn list_updates(&self) -> impl Future<Output = CoreResult<ListingOutcome>> + Send;
}

/// Runs an external listing program such as `checkupdates`.
#[derive(Debug, Clone)]
pub struct CommandUpdateSource {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandUpdateSource {
    /// Source running `program` with no arguments and no timeout.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Pass extra arguments to the program.
    pub(crate) fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Kill the program if it has not finished after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The program this source runs.
    pub(crate) fn program(&self) -> &str {
        &self.program
    }
}

impl UpdateSource for CommandUpdateSource {
    async fn list_updates(&self) -> CoreResult<ListingOutcome> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child.
        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, command.output())
                .await
                .map_err(|_| MonitorError::CheckTimedOut {
                    program: self.program().to_string(),
                    timeout,
                    location: ErrorLocation::from(Location::caller()),
                })?,
            None => command.output().await,
        }
        .map_err(|source| MonitorError::CheckLaunchFailed {
            program: self.program().to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(program = %self.program(), stderr = %stderr.trim(), "Update check wrote to stderr");
        }

        Ok(ListingOutcome {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
