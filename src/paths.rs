//! Centralized path definitions for missionctl
//!
//! ```text
//! ~/.config/missionctl/
//! └── config.toml               # User preferences
//!
//! ./missions.toml               # Default scenario written by `init`
//! ```

use std::path::PathBuf;

/// Global config directory name (under `~/.config`)
const GLOBAL_DIR: &str = ".config/missionctl";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default scenario filename used by `init`
pub const DEFAULT_SCENARIO: &str = "missions.toml";

/// Get the global config directory (`~/.config/missionctl/`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
