// Recase Settings Module
// User preferences shared by the CLI and the TUI

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};

use crate::Selector;

/// Default name of the exported result file
pub const DEFAULT_FILE_NAME: &str = "converted-text.txt";

/// Settings for recase front ends
///
/// These settings are loaded from a TOML file (default: ~/.config/recase/settings.toml).
/// None of them change what a conversion produces; they only choose which
/// conversion runs by default and how results are exported.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Conversion used when the caller does not name one
    default_selector: Option<Selector>,

    /// Re-apply the active conversion whenever the input changes (TUI)
    live: bool,

    /// File name used when exporting the output
    file_name: String,

    /// Terminate printed output with a newline (CLI)
    trailing_newline: bool,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    conversion: Option<ConversionSettings>,

    #[serde(default)]
    output: Option<OutputSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConversionSettings {
    #[serde(default)]
    default: Option<String>,

    #[serde(default)]
    live: Option<bool>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSettings {
    #[serde(default)]
    file_name: Option<String>,

    #[serde(default)]
    trailing_newline: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with every value at its default
    pub fn new() -> Self {
        Self {
            default_selector: None,
            live: false,
            file_name: DEFAULT_FILE_NAME.to_string(),
            trailing_newline: true,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(conversion) = toml_settings.conversion {
            if let Some(name) = conversion.default {
                let selector = Selector::from_name(&name).ok_or_else(|| {
                    SettingsError::InvalidValue(format!("unknown conversion '{}'", name))
                })?;
                settings.default_selector = Some(selector);
            }
            if let Some(live) = conversion.live {
                settings.live = live;
            }
        }

        if let Some(output) = toml_settings.output {
            if let Some(file_name) = output.file_name {
                if file_name.trim().is_empty() {
                    return Err(SettingsError::InvalidValue(
                        "output.file_name cannot be empty".to_string(),
                    ));
                }
                settings.file_name = file_name;
            }
            if let Some(trailing_newline) = output.trailing_newline {
                settings.trailing_newline = trailing_newline;
            }
        }

        Ok(settings)
    }

    /// Directory holding recase's configuration (~/.config/recase)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recase"))
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load from default location (~/.config/recase/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn default_selector(&self) -> Option<Selector> {
        self.default_selector
    }

    pub fn set_default_selector(&mut self, selector: Option<Selector>) {
        self.default_selector = selector;
    }

    pub fn live(&self) -> bool {
        self.live
    }

    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Recase Settings
# Place this file at: ~/.config/recase/settings.toml

[conversion]
# Conversion applied when none is given, e.g. "title" or "morse"
# default = "title"

# TUI: re-apply the active conversion while typing
live = false

[output]
# Name of the file the output is saved to
file_name = "converted-text.txt"

# CLI: end printed output with a newline
trailing_newline = true
"#
}
