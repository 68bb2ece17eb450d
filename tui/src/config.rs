//! Per-user configuration.
//!
//! Default board dimensions and step interval are read from
//! `golife/config.toml` under the platform config directory, e.g.
//! `~/.config/golife/config.toml` on Linux:
//!
//! ```toml
//! columns = 40
//! rows = 30
//! interval = 100
//! ```
//!
//! Every field is optional. A missing or malformed file means the built-in
//! defaults; command-line arguments override the file.

use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    /// Milliseconds between generations while running.
    pub(crate) interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
            interval: 150,
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("golife").join("config.toml"))
    }

    /// Loads the config file, falling back to the defaults.
    pub(crate) fn load() -> Self {
        Self::path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("rows = 35").unwrap();
        assert_eq!(config.columns, 20);
        assert_eq!(config.rows, 35);
        assert_eq!(config.interval, 150);
    }

    #[test]
    fn full_file() {
        let config: Config = toml::from_str("columns = 40\nrows = 30\ninterval = 100").unwrap();
        assert_eq!(config.columns, 40);
        assert_eq!(config.rows, 30);
        assert_eq!(config.interval, 100);
    }
}
