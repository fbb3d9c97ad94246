use crate::{AppError, AppResult, TrayCommand, TraySink, TrayView};

use std::{panic::Location, time::Duration};

use archupdate_indicator_core::{
    ABOUT, ActionOutcome, CheckTimer, InstallLauncher, MenuAction, UpdateMonitor, UpdateSource,
};
use error_location::ErrorLocation;
use notify_rust::Notification;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Runs on the async runtime thread and is the only owner of the
/// [`UpdateMonitor`]. Timer ticks and menu actions are handled one at a time,
/// so update checks never overlap. Tray updates go back to the main thread
/// through `tray` because `TrayIcon` is `!Send`.
pub struct App<S, L, T> {
    pub(crate) monitor: UpdateMonitor<S, L>,
    pub(crate) tray: T,
    pub(crate) update_period: Duration,
}

impl<S: UpdateSource, L: InstallLauncher, T: TraySink> App<S, L, T> {
    /// Run the main application event loop until Quit is chosen.
    ///
    /// `menu_rx` yields the ids of clicked menu items.
    #[instrument(skip(self, menu_rx))]
    pub(crate) async fn run(mut self, mut menu_rx: mpsc::Receiver<String>) -> AppResult<()> {
        info!("Arch Update Indicator starting");

        // Startup check happens immediately, outside the timer.
        self.monitor.check_updates().await;
        self.render()?;

        let mut timer = CheckTimer::start(self.update_period);

        loop {
            tokio::select! {
                _ = timer.wait() => {
                    self.monitor.on_timer_tick().await;
                    timer.rearm();
                    if let Err(e) = self.render() {
                        error!(error = ?e, "Failed to render tray, shutting down");
                        break;
                    }
                }

                Some(id) = menu_rx.recv() => {
                    let Some(action) = MenuAction::from_id(&id) else {
                        debug!(id = %id, "Ignoring click on informational entry");
                        continue;
                    };

                    match self.monitor.handle(action).await {
                        ActionOutcome::Render => {
                            if let Err(e) = self.render() {
                                error!(error = ?e, "Failed to render tray, shutting down");
                                break;
                            }
                        }
                        ActionOutcome::ShowAbout => {
                            if let Err(e) = Self::show_about() {
                                error!(error = ?e, "Failed to show about information");
                            }
                        }
                        ActionOutcome::Quit => {
                            info!("Quit requested from tray menu");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        // The menu forwarder stays blocked in recv() until the next click;
        // it is not joined and ends with the process.
        drop(menu_rx);

        let _ = self.tray.send(TrayCommand::Shutdown);
        info!("Arch Update Indicator shut down");

        Ok(())
    }

    /// Push the monitor's current state to the tray.
    fn render(&self) -> AppResult<()> {
        self.tray.send(TrayCommand::Render(TrayView {
            appearance: self.monitor.appearance(),
            menu: self.monitor.menu_descriptor(),
        }))
    }

    #[track_caller]
    fn show_about() -> AppResult<()> {
        Notification::new()
            .appname(ABOUT.name)
            .summary(&ABOUT.title())
            .body(&ABOUT.summary())
            .show()
            .map_err(|e| AppError::NotificationFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("About notification shown");

        Ok(())
    }
}

/// Forward tray menu clicks as item ids via a single persistent blocking task.
///
/// MenuEvent::receiver() returns a crossbeam_channel::Receiver which has a
/// blocking recv(). Once the receiving side of `menu_tx` is dropped, the next
/// blocking_send() fails and the task ends.
pub(crate) fn spawn_menu_forwarder(
    runtime: &tokio::runtime::Runtime,
    menu_tx: mpsc::Sender<String>,
) {
    runtime.spawn_blocking(move || {
        let receiver = MenuEvent::receiver();
        while let Ok(event) = receiver.recv() {
            if menu_tx.blocking_send(event.id.0).is_err() {
                break;
            }
        }
    });
}
