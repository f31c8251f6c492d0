// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use byteviz_core::{CommonError, CommonErrorType, CommonResult};
use dirs::config_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "byteviz",
            ConfigPaths::ConfigFile => "config.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is, eg: `~/.config/byteviz` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string()))
}

/// This is where the config file is stored, inside `config_folder_path`.
#[must_use]
pub fn get_config_file_path(config_folder_path: &Path) -> PathBuf {
    config_folder_path.join(ConfigPaths::ConfigFile.to_string())
}

/// Make sure the parent folder of `config_file_path` exists.
///
/// # Errors
///
/// Returns [`CommonErrorType::ConfigFolderCouldNotBeCreated`] if the folder is missing
/// and can't be made.
pub fn create_parent_folder(config_file_path: &Path) -> CommonResult<()> {
    let Some(config_folder_path) = config_file_path.parent() else {
        return Ok(());
    };
    match fs::create_dir_all(config_folder_path) {
        Ok(()) => {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Config folder is ready.",
                config_folder = ?config_folder_path
            );
            Ok(())
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not create config folder.",
                error = ?error
            );
            CommonError::new_error_result(
                CommonErrorType::ConfigFolderCouldNotBeCreated,
                &format!("{}: {error}", config_folder_path.display()),
            )
        }
    }
}

/// The default location of the config file.
///
/// # Errors
///
/// Returns [`CommonErrorType::ConfigFolderPathCouldNotBeAccessed`] if the OS has no
/// config folder for this user.
pub fn try_get_default_config_file_path() -> CommonResult<PathBuf> {
    match try_get_config_folder_path() {
        Some(config_folder_path) => Ok(get_config_file_path(&config_folder_path)),
        None => {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not access config folder.", error = "None");
            CommonError::new_error_result_with_only_type(
                CommonErrorType::ConfigFolderPathCouldNotBeAccessed,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;

    use super::*;

    #[test]
    fn test_config_file_name() {
        let it = get_config_file_path(Path::new("/tmp/byteviz"));
        assert_eq2!(it, PathBuf::from("/tmp/byteviz/config.json"));
    }

    #[test]
    fn test_create_parent_folder() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_file_path = temp_dir.path().join("a").join("b").join("config.json");
        create_parent_folder(&config_file_path).unwrap();
        assert!(temp_dir.path().join("a").join("b").is_dir());
        // Idempotent.
        create_parent_folder(&config_file_path).unwrap();
    }

    #[test]
    fn test_create_parent_folder_fails_under_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_folder");
        fs::write(&file_path, "x").unwrap();
        let report = create_parent_folder(&file_path.join("config.json")).unwrap_err();
        assert_eq2!(
            CommonError::error_type_of(&report),
            Some(CommonErrorType::ConfigFolderCouldNotBeCreated)
        );
    }
}
