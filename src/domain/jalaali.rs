//! Jalaali (solar hijri) calendar arithmetic.
//!
//! Years are resolved against the table of leap-cycle breaks used by the
//! jalaali-js family of libraries, which is accurate for years `-61..=3177`.
//! Dates are exchanged with the Gregorian calendar through Julian day numbers.

use chrono::{Datelike, NaiveDate};

/// Years at which the 33-year leap cycle is re-anchored.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

pub const MIN_YEAR: i32 = BREAKS[0];
pub const MAX_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Offset between `NaiveDate::num_days_from_ce` and the Julian day number.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Leap-cycle facts for a single jalaali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaaliYear {
    /// Years since the last leap year, `0` for a leap year itself.
    pub leap: i32,
    /// Gregorian year in which this jalaali year begins.
    pub gy: i32,
    /// Day of March on which 1 Farvardin falls.
    pub march: i32,
}

pub fn jal_cal(jy: i32) -> Option<JalaaliYear> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + ((n % 33) + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - ((gy / 100 + 1) * 3) / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + ((jump + 4) / 33) * 33;
    }
    let mut leap = (((n + 1) % 33) - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalaaliYear { leap, gy, march })
}

pub fn is_leap_year(jy: i32) -> bool {
    jal_cal(jy).is_some_and(|year| year.leap == 0)
}

/// Number of days in month `jm` (1-based) of year `jy`.
pub fn month_length(jy: i32, jm: u32) -> u32 {
    match jm {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_year(jy) => 30,
        _ => 29,
    }
}

pub fn is_valid(jy: i32, jm: u32, jd: u32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&jy)
        && (1..=12).contains(&jm)
        && jd >= 1
        && jd <= month_length(jy, jm)
}

pub fn to_jdn(jy: i32, jm: u32, jd: u32) -> Option<i64> {
    if !is_valid(jy, jm, jd) {
        return None;
    }
    let year = jal_cal(jy)?;
    let nowruz = gregorian_to_jdn(NaiveDate::from_ymd_opt(year.gy, 3, year.march as u32)?);
    let (jm, jd) = (jm as i64, jd as i64);
    Some(nowruz + (jm - 1) * 31 - (jm / 7) * (jm - 7) + jd - 1)
}

pub fn from_jdn(jdn: i64) -> Option<(i32, u32, u32)> {
    let gy = jdn_to_gregorian(jdn)?.year();
    let mut jy = gy - 621;
    let Some(year) = jal_cal(jy) else {
        return last_year_tail(jdn, jy - 1);
    };
    let nowruz = gregorian_to_jdn(NaiveDate::from_ymd_opt(gy, 3, year.march as u32)?);

    let mut k = jdn - nowruz;
    if k >= 0 {
        if k <= 185 {
            return Some((jy, (1 + k / 31) as u32, (k % 31 + 1) as u32));
        }
        k -= 186;
    } else {
        // Still inside the previous jalaali year, in its second half.
        jy -= 1;
        if jy < MIN_YEAR {
            return None;
        }
        k += 179;
        if year.leap == 1 {
            k += 1;
        }
    }

    Some((jy, (7 + k / 30) as u32, (k % 30 + 1) as u32))
}

/// Days of `MAX_YEAR` that fall after the Gregorian new year, when the
/// following jalaali year is no longer tabulated.
fn last_year_tail(jdn: i64, jy: i32) -> Option<(i32, u32, u32)> {
    if jy != MAX_YEAR {
        return None;
    }
    let k = jdn - to_jdn(jy, 7, 1)?;
    if k < 0 {
        return None;
    }
    let (jm, jd) = (7 + k / 30, k % 30 + 1);
    let (jm, jd) = (u32::try_from(jm).ok()?, u32::try_from(jd).ok()?);
    is_valid(jy, jm, jd).then_some((jy, jm, jd))
}

pub fn to_gregorian(jy: i32, jm: u32, jd: u32) -> Option<NaiveDate> {
    jdn_to_gregorian(to_jdn(jy, jm, jd)?)
}

pub fn from_gregorian(date: NaiveDate) -> Option<(i32, u32, u32)> {
    from_jdn(gregorian_to_jdn(date))
}

fn gregorian_to_jdn(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_CE_OFFSET
}

fn jdn_to_gregorian(jdn: i64) -> Option<NaiveDate> {
    let days = i32::try_from(jdn - JDN_CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}
