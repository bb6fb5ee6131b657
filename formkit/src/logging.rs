//! File logging setup.
//!
//! Widgets log through the `log` facade. Terminal hosts can't write logs to
//! stdout without corrupting the screen, so this installs a `simplelog`
//! writer pointed at a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::LoggingError;

/// Install a global logger that writes to `path` at `level`.
///
/// The file is truncated on open. Fails if a logger is already installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let path = path.as_ref();
    let log_file = File::create(path).map_err(|source| LoggingError::OpenFile {
        path: path.display().to_string(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("logging to {} at {}", path.display(), level);
    Ok(())
}
