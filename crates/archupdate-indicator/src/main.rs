//! Arch Update Indicator: tray icon showing pending pacman updates.

mod app;
mod config;
mod error;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::{App, spawn_menu_forwarder},
    error::{AppError, Result as AppResult},
    tray_command::{TrayCommand, TraySink, TrayView},
    tray_manager::TrayManager,
};

use crate::config::Config;

use archupdate_indicator_core::{CommandUpdateSource, TerminalLauncher, UpdateMonitor, UpdateState};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "archupdate_indicator=debug,archupdate_indicator_core=debug";

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Creating tray icon with update period of {} min",
        config.update_period_minutes()
    );

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    // Created on Init because GTK must be up before the tray exists on Linux.
    let mut tray_manager: Option<TrayManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(TrayCommand::Render(view)) => {
                if let Some(tray_manager) = tray_manager.as_mut() {
                    if let Err(e) = tray_manager.render(&view) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
            }
            Event::UserEvent(TrayCommand::Shutdown) => {
                // Dropping the manager removes the icon.
                tray_manager = None;
                *control_flow = ControlFlow::ExitWithCode(0);
            }
            Event::NewEvents(StartCause::Init) => {
                let initial = TrayView::from_state(&UpdateState::default());
                match TrayManager::new(config.icons_folder.clone(), &initial) {
                    Ok(tm) => tray_manager = Some(tm),
                    Err(e) => {
                        error!("Failed to create TrayManager: {:?}", e);
                        std::process::exit(1);
                    }
                }

                let config = config.clone();
                let tray_proxy = tray_proxy.clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    if let Err(e) = run_app(config, tray_proxy) {
                        error!(error = ?e, "App error");
                        std::process::exit(1);
                    }
                });
            }
            _ => {}
        }
    });
}

/// Build the monitor from `config` and drive it on a fresh tokio runtime.
fn run_app(config: Config, tray_proxy: EventLoopProxy<TrayCommand>) -> AppResult<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let source = CommandUpdateSource::new(config.check_cmd).with_timeout(config.check_timeout);
    let launcher = TerminalLauncher::new(config.terminal, config.update_cmd);

    let (menu_tx, menu_rx) = mpsc::channel(32);
    spawn_menu_forwarder(&rt, menu_tx);

    let app = App {
        monitor: UpdateMonitor::new(source, launcher),
        tray: tray_proxy,
        update_period: config.update_period,
    };

    rt.block_on(app.run(menu_rx))
}
