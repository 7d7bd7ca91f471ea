// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::TimeInputError;

/// How fine-grained the picked time is.
///
/// The variants are ordered: `Hour < Minute < Second`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Hour,
    #[default]
    Minute,
    Second,
}

impl Precision {
    pub const ALL: [Precision; 3] = [Precision::Hour, Precision::Minute, Precision::Second];

    /// Step of the native time field, in seconds.
    pub fn step(self) -> u32 {
        match self {
            Precision::Hour => 3600,
            Precision::Minute => 60,
            Precision::Second => 1,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        }
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = TimeInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Precision::Hour),
            "minute" => Ok(Precision::Minute),
            "second" => Ok(Precision::Second),
            _ => Err(TimeInputError::InvalidPrecision(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Precision;

    #[test]
    fn ordered_from_hour_to_second() {
        assert!(Precision::Hour < Precision::Minute);
        assert!(Precision::Minute < Precision::Second);
        assert_eq!(Precision::default(), Precision::Minute);
    }

    #[test]
    fn steps() {
        assert_eq!(Precision::Hour.step(), 3600);
        assert_eq!(Precision::Minute.step(), 60);
        assert_eq!(Precision::Second.step(), 1);
    }

    #[test]
    fn from_str() {
        assert_eq!("second".parse::<Precision>(), Ok(Precision::Second));
        assert_eq!(" Hour ".parse::<Precision>(), Ok(Precision::Hour));
        assert!("millisecond".parse::<Precision>().is_err());
    }
}
