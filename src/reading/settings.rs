//! Display preferences for the reader.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fastest pace the reader accepts, in words per minute.
pub const MAX_READING_SPEED: u32 = 2000;

/// User display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingSettings {
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
    pub font_color: String,
    pub background_color: String,
    /// Color of the emphasized word prefix
    pub highlight_color: String,
    /// Words per minute
    pub reading_speed: u32,
    pub theme: String,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            font_family: "JetBrains Mono".to_string(),
            font_size: 48,
            font_color: "#E2E8F0".to_string(),
            background_color: "#0F172A".to_string(),
            highlight_color: "#F97316".to_string(),
            reading_speed: 250,
            theme: "midnight".to_string(),
        }
    }
}

impl ReadingSettings {
    /// Validate `update` and merge its fields into these settings.
    ///
    /// Either every field is applied or, on error, none is. Returns whether
    /// anything changed.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<bool> {
        update.validate()?;

        let before = self.clone();
        if let Some(v) = update.font_family {
            self.font_family = v;
        }
        if let Some(v) = update.font_size {
            self.font_size = v;
        }
        if let Some(v) = update.font_color {
            self.font_color = v;
        }
        if let Some(v) = update.background_color {
            self.background_color = v;
        }
        if let Some(v) = update.highlight_color {
            self.highlight_color = v;
        }
        if let Some(v) = update.reading_speed {
            self.reading_speed = v;
        }
        if let Some(v) = update.theme {
            self.theme = v;
        }

        Ok(*self != before)
    }
}

/// A partial change to [`ReadingSettings`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub font_color: Option<String>,
    pub background_color: Option<String>,
    pub highlight_color: Option<String>,
    pub reading_speed: Option<u32>,
    pub theme: Option<String>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = Some(color.into());
        self
    }

    pub fn with_reading_speed(mut self, wpm: u32) -> Self {
        self.reading_speed = Some(wpm);
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn validate(&self) -> Result<()> {
        if let Some(family) = &self.font_family {
            if family.trim().is_empty() {
                return Err(Error::InvalidSetting("font_family must not be empty".into()));
            }
        }
        if self.font_size == Some(0) {
            return Err(Error::InvalidSetting("font_size must be positive".into()));
        }
        if let Some(wpm) = self.reading_speed {
            if !(1..=MAX_READING_SPEED).contains(&wpm) {
                return Err(Error::InvalidSetting(format!(
                    "reading_speed must be between 1 and {} wpm, got {}",
                    MAX_READING_SPEED, wpm
                )));
            }
        }

        let colors = [
            ("font_color", &self.font_color),
            ("background_color", &self.background_color),
            ("highlight_color", &self.highlight_color),
        ];
        for (name, value) in colors {
            if let Some(color) = value {
                if !is_hex_color(color) {
                    return Err(Error::InvalidSetting(format!(
                        "{} must be #RGB or #RRGGBB, got '{}'",
                        name, color
                    )));
                }
            }
        }

        Ok(())
    }
}

/// `#RGB` or `#RRGGBB`.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
