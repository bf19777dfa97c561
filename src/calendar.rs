//! System-dispatched date utilities consumed by calendar widgets.
//!
//! Every function takes the [`CalendarSystem`] first and hands the call to
//! that system's adapter unchanged. The one exception is [`same_date`], which
//! compares Gregorian fields whatever the system: both calendars start their
//! days at the same midnight, so Gregorian day identity is jalaali day
//! identity too.

use crate::domain::jalaali::{MAX_YEAR, MIN_YEAR};
use crate::domain::{CalendarDate, CalendarSystem, DaysBetween, Locale, WeekdayLabels};
use log::debug;

pub fn same_month(system: CalendarSystem, a: &CalendarDate, b: &CalendarDate) -> bool {
    system.adapter().same_month(a, b)
}

pub fn same_date(_system: CalendarSystem, a: &CalendarDate, b: &CalendarDate) -> bool {
    CalendarSystem::Gregorian.adapter().same_date(a, b)
}

pub fn is_gte(system: CalendarSystem, a: &CalendarDate, b: &CalendarDate) -> bool {
    system.adapter().is_gte(a, b)
}

pub fn is_lte(system: CalendarSystem, a: &CalendarDate, b: &CalendarDate) -> bool {
    system.adapter().is_lte(a, b)
}

pub fn days_between(system: CalendarSystem, a: &CalendarDate, b: &CalendarDate) -> DaysBetween {
    system.adapter().days_between(a, b)
}

pub fn month_days(system: CalendarSystem, any_day: &CalendarDate) -> DaysBetween {
    system.adapter().month_days(any_day)
}

pub fn days_in_month(system: CalendarSystem, any_day: &CalendarDate) -> u32 {
    system.adapter().days_in_month(any_day)
}

pub fn weekday_names(
    system: CalendarSystem,
    labels: &WeekdayLabels,
    first_day_of_week: u32,
) -> [String; 7] {
    system.adapter().weekday_names(labels, first_day_of_week)
}

pub fn month_page(
    system: CalendarSystem,
    any_day: &CalendarDate,
    first_day_of_week: u32,
) -> Vec<CalendarDate> {
    system.adapter().month_page(any_day, first_day_of_week)
}

/// Moves `count` months in the system's own months, clamping the day to the
/// length of the target month. The result sits at UTC midnight.
pub fn add_months(system: CalendarSystem, date: &CalendarDate, count: i32) -> Option<CalendarDate> {
    let adapter = system.adapter();
    let (year, month, day) = adapter.adopt(*date)?.fields();

    let total = year as i64 * 12 + (month as i64 - 1) + count as i64;
    let target_year = i32::try_from(total.div_euclid(12)).ok()?;
    let target_month = total.rem_euclid(12) as u32 + 1;
    let target_day = day.min(adapter.month_length(target_year, target_month));

    adapter.date(target_year, target_month, target_day)
}

/// Widest window on either side of the current month: every month of the
/// tabulated jalaali years.
pub const MAX_WINDOW_MONTHS: u32 = 12 * (MAX_YEAR - MIN_YEAR + 1) as u32;

/// The month anchors shown by a scrolling calendar list: `past` months before
/// `current`, `current` itself, then `future` months after it. Both sides are
/// capped at [`MAX_WINDOW_MONTHS`].
pub fn visible_months(
    system: CalendarSystem,
    current: &CalendarDate,
    past: u32,
    future: u32,
) -> Vec<CalendarDate> {
    let past = past.min(MAX_WINDOW_MONTHS) as i32;
    let future = future.min(MAX_WINDOW_MONTHS) as i32;
    (-past..=future)
        .filter_map(|offset| add_months(system, current, offset))
        .collect()
}

/// `"<month name> <year>"` in the system's own months, `None` when the
/// system has no reading of `date`.
pub fn month_title(system: CalendarSystem, locale: Locale, date: &CalendarDate) -> Option<String> {
    let (year, month, _) = system.adapter().adopt(*date)?.fields();
    let title = match locale.month_name(system, month) {
        Some(name) => format!("{} {}", name, year),
        None => format!("{:02} {}", month, year),
    };
    Some(title)
}

/// Optional inclusive limits on which days may be picked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, system: CalendarSystem, day: &CalendarDate) -> bool {
        let after_min = self.min.is_none_or(|min| is_gte(system, day, &min));
        let before_max = self.max.is_none_or(|max| is_lte(system, day, &max));
        after_min && before_max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Disabled,
    Today,
    Normal,
}

/// Classifies a day cell of the month page showing `current_month`.
pub fn day_state(
    system: CalendarSystem,
    day: &CalendarDate,
    current_month: &CalendarDate,
    bounds: &DateBounds,
    today: &CalendarDate,
    disabled_by_default: bool,
) -> DayState {
    let adapter = system.adapter();
    if disabled_by_default || !bounds.contains(system, day) {
        return DayState::Disabled;
    }
    let in_month = match (adapter.adopt(*day), adapter.adopt(*current_month)) {
        (Some(day), Some(current)) => adapter.same_month(&day, &current),
        _ => false,
    };
    if !in_month {
        debug!("{} is outside the month of {}", day, current_month);
        return DayState::Disabled;
    }
    if same_date(system, day, today) {
        DayState::Today
    } else {
        DayState::Normal
    }
}
