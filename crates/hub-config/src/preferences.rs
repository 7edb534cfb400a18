//! Persisted user preferences: color theme and font size.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Color theme for rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background (the default).
    #[default]
    Dark,
    /// Light background.
    Light,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the lowercase name used in files and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Font size step relative to normal, always within `-1..=1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i8", into = "i8")]
pub struct FontSize(i8);

impl FontSize {
    /// Smallest step.
    pub const MIN: i8 = -1;
    /// Largest step.
    pub const MAX: i8 = 1;

    /// Creates a font size, clamping out-of-range steps.
    pub fn new(step: i8) -> Self {
        Self(step.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the step value.
    pub fn step(self) -> i8 {
        self.0
    }

    /// Returns a new size moved by `delta`, clamped.
    pub fn change(self, delta: i8) -> Self {
        Self::new(self.0.saturating_add(delta))
    }

    /// Returns the CSS class applied to the page body.
    pub fn css_class(self) -> &'static str {
        match self.0 {
            -1 => "font-size-small",
            1 => "font-size-large",
            _ => "font-size-normal",
        }
    }
}

impl From<i8> for FontSize {
    fn from(step: i8) -> Self {
        Self::new(step)
    }
}

impl From<FontSize> for i8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// Preferences persisted between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Selected color theme.
    pub theme: Theme,
    /// Selected font size step.
    pub font_size: FontSize,
}

impl Preferences {
    /// Loads preferences from `path`, returning defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes preferences to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string(self)?;
        let write_err = |source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, contents).map_err(write_err)
    }
}
