// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore hhmmss

//! The canonical time value exchanged with the outside world.
//!
//! A time is written `HH:mm` or `HH:mm:ss`, 24 hour and zero padded. Parsing
//! is a little more lenient than printing: single-digit components and a
//! fractional second (which is dropped) are accepted.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use winnow::{
    ascii::digit1,
    combinator::{opt, preceded},
    seq,
    stream::AsChar,
    token::take_while,
    ModalResult, Parser,
};

use crate::{Precision, TimeInputError};

/// A time of day, always in 24 hour form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeValue {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeInputError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeInputError::InvalidTime(format!(
                "{hour:02}:{minute:02}:{second:02}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Parses `H:m`, `HH:mm`, `HH:mm:ss` or `HH:mm:ss.fff`.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_input::TimeValue;
    ///
    /// let time = TimeValue::parse("22:17:03").unwrap();
    /// assert_eq!((time.hour, time.minute, time.second), (22, 17, 3));
    /// assert!(TimeValue::parse("24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeInputError> {
        time_value
            .parse(s.trim())
            .map_err(|_| TimeInputError::InvalidTime(s.to_owned()))
    }

    /// Renders the canonical string at `precision`.
    ///
    /// Hour and minute precision both produce `HH:mm`; at hour precision the
    /// minutes are always `00`.
    pub fn format(&self, precision: Precision) -> String {
        match precision {
            Precision::Hour => format!("{:02}:00", self.hour),
            Precision::Minute => format!("{:02}:{:02}", self.hour, self.minute),
            Precision::Second => {
                format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
            }
        }
    }

    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }
}

impl Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Precision::Second))
    }
}

impl FromStr for TimeValue {
    type Err = TimeInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// Anything a time can be read from: formatted strings or structured values.
pub trait TimeSource {
    /// `Ok(None)` means "no value", e.g. an empty string.
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError>;
}

impl TimeSource for str {
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError> {
        if self.is_empty() {
            Ok(None)
        } else {
            TimeValue::parse(self).map(Some)
        }
    }
}

impl TimeSource for String {
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError> {
        self.as_str().time_value()
    }
}

impl TimeSource for TimeValue {
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError> {
        Ok(Some(*self))
    }
}

impl TimeSource for NaiveTime {
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError> {
        Ok(Some((*self).into()))
    }
}

impl TimeSource for NaiveDateTime {
    fn time_value(&self) -> Result<Option<TimeValue>, TimeInputError> {
        Ok(Some(self.time().into()))
    }
}

/// Extracts a zero-padded `HH:mm` from `value`. A missing value stays missing.
pub fn get_hours_minutes<T>(value: Option<&T>) -> Result<Option<String>, TimeInputError>
where
    T: TimeSource + ?Sized,
{
    formatted(value, Precision::Minute)
}

/// Extracts a zero-padded `HH:mm:ss` from `value`. A missing value stays missing.
pub fn get_hours_minutes_seconds<T>(value: Option<&T>) -> Result<Option<String>, TimeInputError>
where
    T: TimeSource + ?Sized,
{
    formatted(value, Precision::Second)
}

fn formatted<T>(value: Option<&T>, precision: Precision) -> Result<Option<String>, TimeInputError>
where
    T: TimeSource + ?Sized,
{
    let Some(value) = value else {
        return Ok(None);
    };
    Ok(value.time_value()?.map(|time| time.format(precision)))
}

/// Parse one or two decimal digits.
fn number(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, AsChar::is_dec_digit)
        .verify_map(|s: &str| s.parse().ok())
        .parse_next(input)
}

fn time_value(input: &mut &str) -> ModalResult<TimeValue> {
    seq!(TimeValue {
        hour: number.verify(|h: &u32| *h < 24),
        _: ':',
        minute: number.verify(|m: &u32| *m < 60),
        second: opt(preceded(':', number.verify(|s: &u32| *s < 60)))
            .map(Option::unwrap_or_default),
        _: opt(preceded('.', digit1)),
    })
    .parse_next(input)
}
