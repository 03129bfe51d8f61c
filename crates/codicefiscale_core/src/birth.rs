//! Birth date and sex reconstruction.
//!
//! # Responsibility
//! - Turn the raw year/month/day block into a calendar date and a sex.
//! - Resolve two-digit years against the current year of an injected clock.
//!
//! # Invariants
//! - Day fields above 40 encode a female birth; 40 is subtracted.
//! - Reconstructed years are never later than the clock's current year.
//! - `day` stays in `1..=31`; days past the end of the month roll into the
//!   next month on `date` (`B30` in a common year is March 2).

use crate::error::{DecodeComponent, DecodeError, DecodeResult};
use crate::lexer::MONTH_LETTERS;
use crate::omocodia::decode_omocodia;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

const FEMALE_DAY_OFFSET: u32 = 40;

/// Source of the current calendar year for the century rule.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year. Used to pin the century rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Reconstructed birth data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInfo {
    pub sex: Sex,
    /// Four-digit year after the century rule.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// Day of month with the female offset removed.
    pub day: u32,
    /// Calendar date; may fall in the following month for impossible days.
    pub date: NaiveDate,
}

/// Rebuilds birth date and sex from raw, possibly omocode, fields.
///
/// # Errors
/// - `DecodeError::Format` (`year`) when the year is not numeric.
/// - `DecodeError::Format` (`day`) when the day is not numeric or, after
///   removing the female offset, falls outside `1..=31`.
/// - `DecodeError::Shape` when `month` is not a month letter.
pub fn reconstruct(
    year2: &str,
    month: &str,
    day2: &str,
    clock: &dyn Clock,
) -> DecodeResult<BirthInfo> {
    let yy = parse_field(year2, DecodeComponent::Year)?;
    let month_number = month_number(month).ok_or_else(|| DecodeError::Shape {
        input: month.to_string(),
    })?;
    let mut day = parse_field(day2, DecodeComponent::Day)?;

    let sex = if day > FEMALE_DAY_OFFSET {
        day -= FEMALE_DAY_OFFSET;
        Sex::Female
    } else {
        Sex::Male
    };
    if !(1..=31).contains(&day) {
        return Err(day_error(day2));
    }

    let year = resolve_century(yy, clock.current_year());
    let date = NaiveDate::from_ymd_opt(year, month_number, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day - 1))))
        .ok_or_else(|| day_error(day2))?;

    Ok(BirthInfo {
        sex,
        year,
        month: month_number,
        day,
        date,
    })
}

/// Places a two-digit year in the latest century not after `current_year`.
pub fn resolve_century(yy: u32, current_year: i32) -> i32 {
    let century = current_year.div_euclid(100);
    let year = yy as i32 + century * 100;
    if year > current_year {
        year - 100
    } else {
        year
    }
}

fn month_number(letter: &str) -> Option<u32> {
    let mut chars = letter.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    MONTH_LETTERS.find(c).map(|index| index as u32 + 1)
}

fn parse_field(raw: &str, component: DecodeComponent) -> DecodeResult<u32> {
    decode_omocodia(raw)
        .parse::<u32>()
        .map_err(|_| DecodeError::Format {
            component,
            value: raw.to_string(),
        })
}

fn day_error(raw: &str) -> DecodeError {
    DecodeError::Format {
        component: DecodeComponent::Day,
        value: raw.to_string(),
    }
}
