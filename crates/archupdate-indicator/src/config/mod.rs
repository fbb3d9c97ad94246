#[allow(clippy::module_inception)]
mod config;
mod file_config;

pub(crate) use {config::Config, file_config::FileConfig};

pub(crate) const ENV_UPDATE_PERIOD: &str = "UPDATE_PERIOD";
pub(crate) const ENV_TERMINAL: &str = "TERMINAL";
pub(crate) const ENV_UPDATE_CMD: &str = "UPDATE_CMD";
pub(crate) const ENV_ICONS_FOLDER: &str = "ICONS_FOLDER";
pub(crate) const ENV_CHECK_CMD: &str = "CHECK_CMD";
pub(crate) const ENV_CHECK_TIMEOUT: &str = "CHECK_TIMEOUT";

pub(crate) const DEFAULT_UPDATE_PERIOD_MS: u64 = 60 * 60 * 1000;
pub(crate) const DEFAULT_TERMINAL: &str = "xterm";
pub(crate) const DEFAULT_UPDATE_CMD: &str = "sudo pacman -Syu";
pub(crate) const DEFAULT_ICONS_FOLDER: &str = "/usr/share/pixmaps/archupdate-indicator";
pub(crate) const DEFAULT_CHECK_CMD: &str = "checkupdates";

pub(crate) fn default_update_period_ms() -> u64 {
    DEFAULT_UPDATE_PERIOD_MS
}

pub(crate) fn default_terminal() -> String {
    DEFAULT_TERMINAL.to_string()
}

pub(crate) fn default_update_cmd() -> String {
    DEFAULT_UPDATE_CMD.to_string()
}

pub(crate) fn default_icons_folder() -> std::path::PathBuf {
    DEFAULT_ICONS_FOLDER.into()
}

pub(crate) fn default_check_cmd() -> String {
    DEFAULT_CHECK_CMD.to_string()
}
