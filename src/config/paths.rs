//! Platform-specific configuration and model paths.

use crate::constants::{APP_NAME, model_files};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME).ok_or(Error::ConfigDirNotFound)
}

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/breedscope/`
/// - macOS: `~/Library/Application Support/breedscope/`
/// - Windows: `%APPDATA%\breedscope\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get the full path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory searched for model files when none are configured.
pub fn models_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join(model_files::DIR))
}

/// Resolve the default location of a model file.
///
/// A `models/` directory next to the working directory wins over the
/// platform data directory, so a checkout with bundled weights works as-is.
pub fn default_model_path(file_name: &str) -> PathBuf {
    let local = Path::new(model_files::DIR).join(file_name);
    if local.exists() {
        return local;
    }
    models_dir().map_or(local, |dir| dir.join(file_name))
}
