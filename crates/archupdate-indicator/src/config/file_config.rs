use crate::config::{
    default_check_cmd, default_icons_folder, default_terminal, default_update_cmd,
    default_update_period_ms,
};

use std::path::PathBuf;

use serde::Deserialize;

/// Optional `config.toml` contents. Every key may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Interval between automatic checks, in milliseconds.
    #[serde(default = "default_update_period_ms")]
    pub update_period_ms: u64,

    /// Terminal emulator supporting `-e`.
    #[serde(default = "default_terminal")]
    pub terminal: String,

    /// Shell command run inside the terminal to install updates.
    #[serde(default = "default_update_cmd")]
    pub update_cmd: String,

    /// Folder holding the three status icons.
    #[serde(default = "default_icons_folder")]
    pub icons_folder: PathBuf,

    /// Program listing pending updates.
    #[serde(default = "default_check_cmd")]
    pub check_cmd: String,

    /// Kill the listing program after this many milliseconds.
    #[serde(default)]
    pub check_timeout_ms: Option<u64>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            update_period_ms: default_update_period_ms(),
            terminal: default_terminal(),
            update_cmd: default_update_cmd(),
            icons_folder: default_icons_folder(),
            check_cmd: default_check_cmd(),
            check_timeout_ms: None,
        }
    }
}
