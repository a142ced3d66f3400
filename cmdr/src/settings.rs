// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use dirs::config_dir;
use miette::IntoDiagnostic;
use serde::{Deserialize, Serialize};

use crate::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    SettingsFile,
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [`try_get_settings_file_path`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "colorconv",
            ConfigPaths::SettingsFile => "settings.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the settings file is, eg: `~/.config/colorconv/settings.json` on Linux.
/// [None] if the platform has no config folder.
#[must_use]
pub fn try_get_settings_file_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(
        home_config_folder_path
            .join(ConfigPaths::TopLevelFolderName.to_string())
            .join(ConfigPaths::SettingsFile.to_string()),
    )
}

/// Contents of the settings file. Every field has a default, so `{}` is a valid file.
///
/// ```json
/// { "language": "ro" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
}

impl Settings {
    /// Read and parse the settings file at `path`.
    ///
    /// # Errors
    ///
    /// If the file can't be read, or its contents aren't valid settings JSON (including
    /// an unknown language code).
    pub fn try_read(path: &Path) -> miette::Result<Self> {
        let content = fs::read_to_string(path).into_diagnostic()?;
        serde_json::from_str(&content).into_diagnostic()
    }

    /// Read the settings file at `path`, or the default location when `path` is [None].
    /// Any problem results in a warning event and the default settings (English), it is
    /// never an error.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let maybe_path = path.map(Path::to_path_buf).or_else(try_get_settings_file_path);

        let Some(path) = maybe_path else {
            tracing::warn!(message = "No config folder on this platform, defaulting to English");
            return Self::default();
        };

        match Self::try_read(&path) {
            Ok(settings) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Loaded settings",
                    path = %path.display(),
                    language = %settings.language
                );
                settings
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Config file missing or misconfigured! Defaulting to English.",
                    path = %path.display(),
                    error = %error
                );
                Self::default()
            }
        }
    }

    /// The `--language` flag wins over the settings file.
    #[must_use]
    pub fn resolve_language(&self, flag: Option<Language>) -> Language {
        flag.unwrap_or(self.language)
    }
}
