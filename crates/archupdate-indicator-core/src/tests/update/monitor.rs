use crate::{
    ActionOutcome, MenuAction, MenuEntry, UpdateMonitor, UpdateState, UpdateStatus,
    tests::fakes::{RecordingLauncher, ScriptedSource, call_log},
};

/// WHAT: A new monitor starts in NoUpdates without running a check
/// WHY: The startup check is triggered explicitly by the app
#[test]
#[allow(clippy::unwrap_used)]
fn given_new_monitor_when_created_then_initial_state_is_no_updates() {
    // Given/When: A fresh monitor
    let calls = call_log();
    let monitor = UpdateMonitor::new(
        ScriptedSource::new(calls.clone()),
        RecordingLauncher::new(calls.clone()),
    );

    // Then: Default state, nothing invoked
    assert_eq!(monitor.state(), &UpdateState::default());
    assert_eq!(monitor.appearance().tooltip, "No updates available");
    let recorded = calls.lock().unwrap().clone();
    assert!(recorded.is_empty());
}

/// WHAT: Listing two updates shows both and a matching tooltip
/// WHY: Scenario with pending updates must surface count and lines
#[tokio::test]
async fn given_two_listed_updates_when_checking_then_updates_available() {
    // Given: checkupdates prints two lines and exits 0
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone())
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2\npkgB 2.0-1 -> 2.1-1");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: Checking
    let state = monitor.check_updates().await.clone();

    // Then: Both updates pending and tooltip counts them
    assert_eq!(state.status, UpdateStatus::UpdatesAvailable);
    assert_eq!(
        state.pending_updates,
        vec!["pkgA 1.0-1 -> 1.0-2", "pkgB 2.0-1 -> 2.1-1"]
    );
    assert_eq!(monitor.appearance().tooltip, "2 updates available");
}

/// WHAT: Exit code 2 means no updates
/// WHY: Must not be confused with a failure
#[tokio::test]
async fn given_exit_two_when_checking_then_no_updates() {
    // Given: checkupdates exits 2
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_exit(2, "");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: Checking
    monitor.check_updates().await;

    // Then: NoUpdates
    assert_eq!(monitor.state(), &UpdateState::default());
    assert_eq!(monitor.appearance().tooltip, "No updates available");
}

/// WHAT: Exit code 1 means the check failed
/// WHY: Failures are only visible through icon and tooltip
#[tokio::test]
async fn given_exit_one_when_checking_then_check_failed() {
    // Given: checkupdates exits 1
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_exit(1, "");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: Checking
    monitor.check_updates().await;

    // Then: CheckFailed
    assert_eq!(monitor.state(), &UpdateState::failed());
    assert_eq!(monitor.appearance().tooltip, "Update check failed");
}

/// WHAT: A listing tool that cannot be launched collapses into CheckFailed
/// WHY: Launch errors must not escape the monitor
#[tokio::test]
async fn given_launch_failure_when_checking_then_check_failed() {
    // Given: The tool cannot be started
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_launch_failure();
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: Checking
    let state = monitor.check_updates().await.clone();

    // Then: Same state as a non-zero exit
    assert_eq!(state, UpdateState::failed());
}

/// WHAT: A failed check clears previously pending updates
/// WHY: Stale updates must not be offered for install after a failure
#[tokio::test]
async fn given_pending_updates_when_next_check_fails_then_list_cleared() {
    // Given: A successful check followed by a failing one
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone())
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2")
        .then_exit(1, "");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));
    monitor.check_updates().await;

    // When: Checking again
    monitor.check_updates().await;

    // Then: Failed and empty
    assert_eq!(monitor.state(), &UpdateState::failed());
}

/// WHAT: Checking twice with identical tool behaviour gives identical states
/// WHY: Checks replace state instead of accumulating it
#[tokio::test]
async fn given_same_output_twice_when_checking_twice_then_state_identical() {
    // Given: The tool reports the same update every time
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_exit(0, "pkgA 1.0-1 -> 1.0-2");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: Checking twice
    let first = monitor.check_updates().await.clone();
    let second = monitor.check_updates().await.clone();

    // Then: Same result, not duplicated
    assert_eq!(first, second);
    assert_eq!(second.pending_updates.len(), 1);
}

/// WHAT: Install launches the terminal and then re-checks
/// WHY: Installed updates must disappear from the tray afterwards
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_pending_updates_when_installing_then_recheck_shows_no_updates() {
    // Given: Two pending updates, and the tool reports none after install
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone())
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2\npkgB 2.0-1 -> 2.1-1")
        .then_exit(2, "");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls.clone()));
    monitor.check_updates().await;
    assert_eq!(monitor.state().status, UpdateStatus::UpdatesAvailable);

    // When: Requesting install
    let state = monitor.request_install().await.clone();

    // Then: Install ran before the re-check and nothing is pending
    assert_eq!(state, UpdateState::default());
    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded, vec!["check", "install", "check"]);
}

/// WHAT: A terminal launch failure still re-checks
/// WHY: The follow-up check shows the real state either way
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_failing_terminal_when_installing_then_still_rechecks() {
    // Given: A launcher that cannot start the terminal
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone())
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2")
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::failing(calls.clone()));
    monitor.check_updates().await;

    // When: Requesting install
    let state = monitor.request_install().await.clone();

    // Then: Updates still pending, re-check happened
    assert_eq!(state.status, UpdateStatus::UpdatesAvailable);
    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded, vec!["check", "install", "check"]);
}

/// WHAT: Timer ticks run a check
/// WHY: Automatic checks go through the same path as manual ones
#[tokio::test]
async fn given_timer_tick_when_handled_then_state_refreshed() {
    // Given: The tool reports one update
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_exit(0, "pkgA 1.0-1 -> 1.0-2");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When: The timer fires
    monitor.on_timer_tick().await;

    // Then: The update is pending
    assert_eq!(monitor.state().status, UpdateStatus::UpdatesAvailable);
}

/// WHAT: Menu actions map to the expected outcomes
/// WHY: The app only performs UI side effects the monitor asks for
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_each_action_when_handled_then_expected_outcome() {
    // Given: A monitor whose tool always reports one update
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone()).then_exit(0, "pkgA 1.0-1 -> 1.0-2");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls.clone()));

    // When/Then: Each action
    assert_eq!(monitor.handle(MenuAction::CheckNow).await, ActionOutcome::Render);
    assert_eq!(monitor.handle(MenuAction::Install).await, ActionOutcome::Render);
    assert_eq!(monitor.handle(MenuAction::About).await, ActionOutcome::ShowAbout);
    assert_eq!(monitor.handle(MenuAction::Quit).await, ActionOutcome::Quit);

    // And: Only CheckNow and Install touched the collaborators
    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded, vec!["check", "install", "check"]);
}

/// WHAT: Menu descriptor follows the monitor state
/// WHY: Install must disappear once nothing is pending
#[tokio::test]
async fn given_state_change_when_describing_menu_then_install_tracks_pending() {
    // Given: Updates first, none afterwards
    let calls = call_log();
    let source = ScriptedSource::new(calls.clone())
        .then_exit(0, "pkgA 1.0-1 -> 1.0-2")
        .then_exit(2, "");
    let mut monitor = UpdateMonitor::new(source, RecordingLauncher::new(calls));

    // When/Then: Install present with updates, absent without
    monitor.check_updates().await;
    assert!(monitor.menu_descriptor().contains(&MenuEntry::Action(MenuAction::Install)));

    monitor.check_updates().await;
    assert!(!monitor.menu_descriptor().contains(&MenuEntry::Action(MenuAction::Install)));
}
