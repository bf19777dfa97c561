//! Weekday and month labels, passed explicitly to the operations that need them.

use crate::domain::system::CalendarSystem;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS_SHORT_FA: [&str; 7] = [
    "یک‌شنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_MONTHS_FA: [&str; 12] = [
    "ژانویه",
    "فوریه",
    "مارس",
    "آوریل",
    "مه",
    "ژوئن",
    "ژوئیه",
    "اوت",
    "سپتامبر",
    "اکتبر",
    "نوامبر",
    "دسامبر",
];

const JALAALI_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const JALAALI_MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Persian,
}

impl Locale {
    pub fn weekday_labels(&self) -> WeekdayLabels {
        let names = match self {
            Locale::English => WEEKDAYS_SHORT_EN,
            Locale::Persian => WEEKDAYS_SHORT_FA,
        };
        WeekdayLabels::new(names.map(String::from))
    }

    pub fn month_names(&self, system: CalendarSystem) -> &'static [&'static str; 12] {
        match (self, system) {
            (Locale::English, CalendarSystem::Gregorian) => &GREGORIAN_MONTHS_EN,
            (Locale::English, CalendarSystem::Jalaali) => &JALAALI_MONTHS_EN,
            (Locale::Persian, CalendarSystem::Gregorian) => &GREGORIAN_MONTHS_FA,
            (Locale::Persian, CalendarSystem::Jalaali) => &JALAALI_MONTHS_FA,
        }
    }

    /// Name of the 1-based `month`, or `None` when out of range.
    pub fn month_name(&self, system: CalendarSystem, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.month_names(system).get(index).copied()
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "fa" | "persian" => Ok(Locale::Persian),
            other => bail!("Unknown locale '{}'", other),
        }
    }
}

/// Seven short weekday labels, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayLabels {
    names: [String; 7],
}

impl WeekdayLabels {
    pub fn new(names: [String; 7]) -> Self {
        Self { names }
    }

    pub fn sunday_first(&self) -> &[String; 7] {
        &self.names
    }

    /// Label for a Gregorian weekday index (Sunday = 0), taken modulo 7.
    pub fn label(&self, sunday_index: u32) -> &str {
        &self.names[(sunday_index % 7) as usize]
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Locale::default().weekday_labels()
    }
}
