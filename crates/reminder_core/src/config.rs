//! Process configuration for the reminder tool.
//!
//! # Responsibility
//! - Resolve the data file and log directory from a base directory.
//!
//! # Invariants
//! - Configuration is derived only from the working directory; there are no
//!   flags or environment overrides.
//! - `log_dir` is absolute whenever `base` is absolute.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

/// File name of the reminder store inside the base directory.
pub const DATA_FILE_NAME: &str = "reminders.txt";
const STATE_DIR_NAME: &str = ".reminders";
const LOG_DIR_NAME: &str = "logs";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Flat text file holding persisted reminders.
    pub data_file: PathBuf,
    /// Directory for rolling log files.
    pub log_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
}

impl AppConfig {
    /// Builds the configuration rooted at `base`.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            data_file: base.join(DATA_FILE_NAME),
            log_dir: base.join(STATE_DIR_NAME).join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }

    /// Builds the configuration rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::in_dir(std::env::current_dir()?))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DATA_FILE_NAME};
    use std::path::Path;

    #[test]
    fn in_dir_places_files_under_base() {
        let config = AppConfig::in_dir("/tmp/reminders-home");

        assert_eq!(
            config.data_file,
            Path::new("/tmp/reminders-home").join(DATA_FILE_NAME)
        );
        assert!(config.log_dir.starts_with("/tmp/reminders-home"));
        assert!(config.log_dir.ends_with("logs"));
    }

    #[test]
    fn from_current_dir_is_absolute() {
        let config = AppConfig::from_current_dir().expect("cwd should resolve");
        assert!(config.log_dir.is_absolute());
    }
}
