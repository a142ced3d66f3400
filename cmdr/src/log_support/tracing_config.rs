// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging. You can send the logs to a:
/// 1. file,
/// 2. stderr (stdout carries the conversions),
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Use [`crate::try_initialize_logging_global`] to install it.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// Where the log lines go. The [String] is the path to the log file, eg: `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// `DEBUG` level, so every `debug!` event from detection shows up.
impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self` if
/// it has a "some" value. That is, the value in `rhs` has higher specificity.
///
/// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
/// - `{a: None } + {a: "bar"} = {a: "bar"}`.
/// - `{a: "foo"} + {a: None } = {a: "foo"}`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{File, None, Stderr, StderrAndFile};

        match (self, rhs) {
            // No collision merge.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Stderr, File(file)) | (File(file), Stderr) => StderrAndFile(file),

            // Collision (rhs has higher specificity).
            (Stderr, Stderr) => Stderr,
            (File(_), File(file)) => File(file),
            (StderrAndFile(file), Stderr)
            | (StderrAndFile(_) | File(_) | Stderr, StderrAndFile(file))
            | (StderrAndFile(_), File(file)) => StderrAndFile(file),
        }
    }
}
