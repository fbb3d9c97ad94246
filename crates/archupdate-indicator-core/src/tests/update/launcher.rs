use crate::{InstallLauncher, TerminalLauncher, install_shell_line};

/// WHAT: The shell line wraps the install command and waits for enter
/// WHY: The terminal must stay open so the user can read pacman output
#[test]
fn given_defaults_when_building_shell_line_then_matches_terminal_contract() {
    // Given/When: Default terminal and install command
    let line = install_shell_line("xterm", "sudo pacman -Syu");

    // Then: Exact command line
    assert_eq!(
        line,
        r#"xterm -e 'bash -c "sudo pacman -Syu; read -p \"Press enter to close terminal\""'"#
    );
}

/// WHAT: The launcher uses its configured terminal and command
/// WHY: TERMINAL and UPDATE_CMD are user-configurable
#[test]
fn given_custom_terminal_when_building_shell_line_then_custom_values_used() {
    // Given: A custom terminal and helper
    let launcher = TerminalLauncher::new("alacritty", "yay -Syu");

    // When: Building the line
    let line = launcher.shell_line();

    // Then: Both appear in place
    assert!(line.starts_with("alacritty -e 'bash -c \"yay -Syu;"));
}

/// WHAT: Launch resolves once the terminal process exits
/// WHY: The re-check must run after the install finished
#[tokio::test]
async fn given_terminal_that_exits_when_launching_then_ok() {
    // Given: `true` standing in for the terminal
    let launcher = TerminalLauncher::new("true", "sudo pacman -Syu");

    // When: Launching
    let result = launcher.launch_install().await;

    // Then: Completed
    assert!(result.is_ok());
}

/// WHAT: A missing terminal is not reported as an error
/// WHY: sh starts fine and only its exit code reflects the failure
#[tokio::test]
async fn given_missing_terminal_when_launching_then_still_ok() {
    // Given: A terminal program that does not exist
    let launcher = TerminalLauncher::new("/nonexistent/terminal", "sudo pacman -Syu");

    // When: Launching
    let result = launcher.launch_install().await;

    // Then: No error surfaces
    assert!(result.is_ok());
}
