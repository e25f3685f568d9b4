//! Default catalog location.

use crate::constants::{APP_NAME, CATALOG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/dnn-preproc/`
/// - macOS: `~/Library/Application Support/dnn-preproc/`
/// - Windows: `%APPDATA%\dnn-preproc\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Catalog used when none is given on the command line.
///
/// Prefers `models.yml` in the working directory, then the one in the
/// platform config directory.
pub fn default_catalog_path() -> Result<PathBuf> {
    let local = Path::new(CATALOG_FILE_NAME);
    if local.is_file() {
        return Ok(local.to_path_buf());
    }
    Ok(config_dir()?.join(CATALOG_FILE_NAME))
}
