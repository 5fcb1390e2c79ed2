// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          path::PathBuf};

use dirs::config_dir;

use crate::{CmdrError, CmdrResult};

pub enum ConfigPaths {
    HexconvTopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [`get_config_file_path`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::HexconvTopLevelFolderName => "hexconv",
            ConfigPaths::ConfigFile => "config.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config file is stored, inside the config folder `path`.
#[must_use]
pub fn get_config_file_path(path: PathBuf) -> PathBuf {
    path.join(ConfigPaths::ConfigFile.to_string())
}

/// This is where the config folder is, eg: `~/.config/hexconv` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::HexconvTopLevelFolderName.to_string()))
}

/// # Errors
///
/// Returns [`CmdrError::ConfigFolderPathCouldNotBeAccessed`] if the OS has no config
/// folder for the current user.
pub fn try_get_default_config_file_path() -> CmdrResult<PathBuf> {
    match try_get_config_folder_path() {
        Some(config_folder_path) => Ok(get_config_file_path(config_folder_path)),
        None => {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not access config folder.", error = "None");
            Err(CmdrError::ConfigFolderPathCouldNotBeAccessed)
        }
    }
}
