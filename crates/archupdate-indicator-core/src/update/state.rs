/// Exit code `checkupdates` uses to report that nothing is pending.
const NO_UPDATES_EXIT_CODE: i32 = 2;

/// Overall result of the most recent update check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Checked with nothing pending, or not checked yet.
    #[default]
    NoUpdates,
    /// The last check succeeded and reported at least one update.
    UpdatesAvailable,
    /// The last check could not be run or exited with an unexpected code.
    CheckFailed,
}

/// Pending updates plus the status they were derived from.
///
/// `status` is `UpdatesAvailable` exactly when `pending_updates` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateState {
    /// One human-readable line per pending update, in tool order.
    pub pending_updates: Vec<String>,
    /// Status of the last check.
    pub status: UpdateStatus,
}

/// What the update-listing tool reported when it ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOutcome {
    /// Process exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
}

impl ListingOutcome {
    /// Outcome of a process that exited normally with `code`.
    pub fn exited(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: stdout.into(),
        }
    }
}

impl UpdateState {
    /// State after a check whose tool could not be run at all.
    pub fn failed() -> Self {
        Self {
            pending_updates: Vec::new(),
            status: UpdateStatus::CheckFailed,
        }
    }

    /// Derive the next state from a completed listing run.
    ///
    /// Exit 0 lists one update per non-blank line, exit 2 means no updates,
    /// anything else (including death by signal) is a failed check.
    pub fn from_listing(outcome: &ListingOutcome) -> Self {
        match outcome.exit_code {
            Some(0) => {
                let pending_updates: Vec<String> = outcome
                    .stdout
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_owned)
                    .collect();

                let status = if pending_updates.is_empty() {
                    UpdateStatus::NoUpdates
                } else {
                    UpdateStatus::UpdatesAvailable
                };

                Self {
                    pending_updates,
                    status,
                }
            }
            Some(NO_UPDATES_EXIT_CODE) => Self::default(),
            _ => Self::failed(),
        }
    }

    /// Whether there is anything to install.
    pub fn has_updates(&self) -> bool {
        !self.pending_updates.is_empty()
    }
}
