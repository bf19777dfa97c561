use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The calendrical systems the engine understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Jalaali,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 2] = [CalendarSystem::Gregorian, CalendarSystem::Jalaali];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Jalaali => "jalaali",
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(CalendarSystem::Gregorian),
            // "jalali" is the common alternative spelling
            "jalaali" | "jalali" | "persian" => Ok(CalendarSystem::Jalaali),
            other => bail!("Unknown calendar type '{}'", other),
        }
    }
}
