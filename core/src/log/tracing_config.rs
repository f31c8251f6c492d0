// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also sets the log level. Any number of types convert into it via
/// [`Into<TracingConfig>`], so callers can pass just the part they care about:
///
/// ```
/// use byteviz_core::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config_1: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// let config_2: TracingConfig = DisplayPreference::Stderr.into();
/// let config_3: TracingConfig = WriterConfig::File("log.txt".to_string()).into();
/// assert_eq!(config_1.writer_config, config_3.writer_config);
/// assert_eq!(config_2.level_filter, tracing_core::LevelFilter::DEBUG);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where the log lines go. The [String] is the path of the log file, eg: `log.txt` or
/// `/tmp/byteviz.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

mod convert {
    use super::{DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter, TracingConfig,
                WriterConfig};

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }
}
