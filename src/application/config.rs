use crate::application::parse_log_spec;
use crate::domain::{CalendarSystem, Locale};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Names a config file to use instead of the per-user default.
pub const CONFIG_PATH_VAR: &str = "CALENDAR_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarSystem,
    pub first_day_of_week: u8,
    pub locale: Locale,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar: CalendarSystem::Gregorian,
            first_day_of_week: 0,
            locale: Locale::English,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file, if there is one, then applies `CALENDAR_*`
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from);

        let mut config = match (&explicit, Self::default_path()) {
            (Some(path), _) => Self::from_file(path)?,
            (None, Some(path)) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jcalendars").join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from `CALENDAR_TYPE`, `CALENDAR_FIRST_DAY`,
    /// `CALENDAR_LOCALE` and `CALENDAR_LOG` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CALENDAR_TYPE") {
            self.calendar = value.parse::<CalendarSystem>().context("CALENDAR_TYPE")?;
        }
        if let Some(value) = lookup("CALENDAR_FIRST_DAY") {
            self.first_day_of_week = value
                .trim()
                .parse::<u8>()
                .with_context(|| format!("CALENDAR_FIRST_DAY must be 0-6, got '{}'", value))?;
        }
        if let Some(value) = lookup("CALENDAR_LOCALE") {
            self.locale = value.parse::<Locale>().context("CALENDAR_LOCALE")?;
        }
        if let Some(value) = lookup("CALENDAR_LOG") {
            self.log_level = value;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_day_of_week > 6 {
            bail!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            );
        }
        parse_log_spec(&self.log_level)?;
        Ok(())
    }
}
