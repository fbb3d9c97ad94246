//! Update monitor: the single owner of [`UpdateState`].
//!
//! Every mutation goes through `&mut self`, so checks triggered by the timer,
//! the menu, or an install can never overlap.

use crate::{
    MenuAction, MenuEntry, TrayAppearance, build_menu_descriptor, icon_for,
    update::{InstallLauncher, UpdateSource, UpdateState, UpdateStatus},
};

use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// What the caller has to do after [`UpdateMonitor::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State may have changed; refresh icon, tooltip and menu.
    Render,
    /// Show the about information.
    ShowAbout,
    /// Tear down the tray and exit.
    Quit,
}

/// Polls an [`UpdateSource`] and launches installs through an [`InstallLauncher`].
pub struct UpdateMonitor<S, L> {
    source: S,
    launcher: L,
    state: UpdateState,
}

impl<S: UpdateSource, L: InstallLauncher> UpdateMonitor<S, L> {
    /// Create a monitor in the initial `NoUpdates` state. Does not check.
    pub fn new(source: S, launcher: L) -> Self {
        Self {
            source,
            launcher,
            state: UpdateState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &UpdateState {
        &self.state
    }

    /// Run the listing tool and replace the state with its result.
    ///
    /// Never fails: launch errors, timeouts and unexpected exit codes all end
    /// in [`UpdateStatus::CheckFailed`].
    #[instrument(skip(self), fields(check_id = %Uuid::new_v4()))]
    pub async fn check_updates(&mut self) -> &UpdateState {
        info!("Checking for updates");

        self.state = match self.source.list_updates().await {
            Ok(outcome) => {
                let next = UpdateState::from_listing(&outcome);
                match next.status {
                    UpdateStatus::UpdatesAvailable => {
                        let count = next.pending_updates.len();
                        info!(count, "Found {} update(s)", count);
                    }
                    UpdateStatus::NoUpdates => info!("No updates found"),
                    UpdateStatus::CheckFailed => {
                        error!(
                            exit_code = ?outcome.exit_code,
                            "Update check returned error code {:?}",
                            outcome.exit_code
                        );
                    }
                }
                next
            }
            Err(e) => {
                error!(error = ?e, "Update check could not be run");
                UpdateState::failed()
            }
        };

        &self.state
    }

    /// Open the install terminal, wait for it to close, then check again.
    ///
    /// A terminal that fails to launch is only logged; the follow-up check
    /// shows whatever the real state is.
    #[instrument(skip(self))]
    pub async fn request_install(&mut self) -> &UpdateState {
        info!(pending = self.state.pending_updates.len(), "Install requested");

        if let Err(e) = self.launcher.launch_install().await {
            warn!(error = ?e, "Install terminal could not be launched");
        }

        self.check_updates().await
    }

    /// Scheduled check. Re-arming the timer is up to the caller.
    pub async fn on_timer_tick(&mut self) -> &UpdateState {
        debug!("Update timer fired");
        self.check_updates().await
    }

    /// Dispatch a menu action.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, action: MenuAction) -> ActionOutcome {
        match action {
            MenuAction::CheckNow => {
                self.check_updates().await;
                ActionOutcome::Render
            }
            MenuAction::Install => {
                self.request_install().await;
                ActionOutcome::Render
            }
            MenuAction::About => ActionOutcome::ShowAbout,
            MenuAction::Quit => ActionOutcome::Quit,
        }
    }

    /// Context menu for the current state.
    pub fn menu_descriptor(&self) -> Vec<MenuEntry> {
        build_menu_descriptor(&self.state)
    }

    /// Icon and tooltip for the current state.
    pub fn appearance(&self) -> TrayAppearance {
        icon_for(&self.state)
    }
}
