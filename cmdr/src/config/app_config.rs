// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs,
          path::{Path, PathBuf},
          time::Duration};

use byteviz_core::{AsciiCode, CommonResult, DEFAULT_INTERPRETER_ARGS,
                   DEFAULT_INTERPRETER_PROGRAM, DEFAULT_SCRIPT_TIMEOUT,
                   ProcessScriptExecutor, ScriptWrapping};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};

use super::{create_parent_folder, try_get_default_config_file_path};
use crate::{AsciiTableState, BitwiseCalcState, ByteTogglerState, DEFAULT_BYTE_VALUE,
            DEFAULT_CHAR, DEFAULT_OPERAND_A, DEFAULT_OPERAND_B, Utf8VizState,
            parse_ascii_filter};

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    #[error("Could not read config file {path:?}")]
    #[diagnostic(code(byteviz_cmdr::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path:?} is not valid")]
    #[diagnostic(
        code(byteviz_cmdr::config::parse),
        help("Fix the JSON, or delete the file to go back to the defaults")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write config file {path:?}")]
    #[diagnostic(code(byteviz_cmdr::config::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path:?} already exists")]
    #[diagnostic(
        code(byteviz_cmdr::config::already_exists),
        help("Pass --force to replace it with the defaults")
    )]
    AlreadyExists { path: PathBuf },

    #[error("Could not serialize the config")]
    #[diagnostic(code(byteviz_cmdr::config::serialize))]
    Serialize(#[from] serde_json::Error),
}

/// The settings read from `config.json`. Every field is optional in the file, missing
/// ones take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub color: bool,
    pub byte_value: u8,
    pub operand_a: u8,
    pub operand_b: u8,
    pub ascii_selected: u8,
    /// One of `all`, `control`, `printable`.
    pub ascii_filter: String,
    pub utf8_char: char,
    pub interpreter: InterpreterConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: true,
            byte_value: DEFAULT_BYTE_VALUE,
            operand_a: DEFAULT_OPERAND_A,
            operand_b: DEFAULT_OPERAND_B,
            ascii_selected: AsciiCode::CAPITAL_A.value(),
            ascii_filter: "all".into(),
            utf8_char: DEFAULT_CHAR,
            interpreter: InterpreterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
    /// Wrap the code so Ruby exceptions are printed instead of failing the run.
    pub wrap_ruby: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_INTERPRETER_PROGRAM.into(),
            args: DEFAULT_INTERPRETER_ARGS.map(String::from).to_vec(),
            timeout_secs: DEFAULT_SCRIPT_TIMEOUT.as_secs(),
            wrap_ruby: true,
        }
    }
}

impl InterpreterConfig {
    #[must_use]
    pub fn to_executor(&self) -> ProcessScriptExecutor {
        ProcessScriptExecutor {
            program: self.program.clone(),
            args: self.args.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            wrapping: if self.wrap_ruby {
                ScriptWrapping::Ruby
            } else {
                ScriptWrapping::Verbatim
            },
        }
    }
}

impl AppConfig {
    /// A missing file is not an error, it just means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] if the file exists but
    /// can't be used.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            // % is Display, ? is Debug.
            tracing::debug!(message = "No config file, using defaults.", path = ?path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "Loaded config file.", path = ?path, config = ?config);
        Ok(config)
    }

    /// Load from `maybe_path`, or from the default location if there is none. If the OS
    /// has no config folder the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`AppConfig::load_from`].
    pub fn try_load(maybe_path: Option<&Path>) -> CommonResult<Self> {
        let path = match maybe_path {
            Some(path) => path.to_path_buf(),
            None => match try_get_default_config_file_path() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default()),
            },
        };
        Ok(Self::load_from(&path)?)
    }

    /// Write pretty printed JSON to `path`, creating its folder if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder can't be created or the file can't be written.
    pub fn save_to(&self, path: &Path) -> CommonResult<()> {
        create_parent_folder(path)?;
        let text = serde_json::to_string_pretty(self).map_err(ConfigError::from)?;
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Where settings are read from: `maybe_path`, or the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `maybe_path` and the OS has no config folder.
    pub fn try_resolve_path(maybe_path: Option<&Path>) -> CommonResult<PathBuf> {
        match maybe_path {
            Some(path) => Ok(path.to_path_buf()),
            None => try_get_default_config_file_path(),
        }
    }

    /// Write the default settings to `maybe_path` (or the default location) so they can
    /// be edited. An existing file is only replaced when `force` is set. Returns the
    /// path written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyExists`] if the file is there and `force` is not
    /// set, or the error from [`AppConfig::save_to`].
    pub fn try_init_file(maybe_path: Option<&Path>, force: bool) -> CommonResult<PathBuf> {
        let path = Self::try_resolve_path(maybe_path)?;
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists { path }.into());
        }
        Self::default().save_to(&path)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Wrote default config file.", path = ?path);
        Ok(path)
    }

    #[must_use]
    pub fn byte_toggler_state(&self) -> ByteTogglerState {
        ByteTogglerState {
            value: self.byte_value,
        }
    }

    #[must_use]
    pub fn bitwise_calc_state(&self) -> BitwiseCalcState {
        BitwiseCalcState {
            operand_a: self.operand_a,
            operand_b: self.operand_b,
            ..Default::default()
        }
    }

    /// # Errors
    ///
    /// Returns an error if `ascii_selected` is above 127 or `ascii_filter` is unknown.
    pub fn ascii_table_state(&self) -> CommonResult<AsciiTableState> {
        Ok(AsciiTableState {
            filter: parse_ascii_filter(&self.ascii_filter)?,
            selected: AsciiCode::try_new(self.ascii_selected)?,
        })
    }

    #[must_use]
    pub fn utf8_viz_state(&self) -> Utf8VizState {
        Utf8VizState {
            code_point: u32::from(self.utf8_char),
        }
    }
}
