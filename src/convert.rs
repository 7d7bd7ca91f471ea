// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Conversions between the 12 and 24 hour clocks.
//!
//! In this notation 12 is the predecessor of 1: midnight is `12 am` and noon
//! is `12 pm`.

use std::fmt::{self, Display};
use std::str::FromStr;

/// The half of the day a 12 hour clock reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmPm {
    Am,
    Pm,
}

impl AmPm {
    /// The half-day a 24 hour reading falls in.
    pub fn of_hour(hour24: u32) -> Self {
        if hour24 < 12 {
            AmPm::Am
        } else {
            AmPm::Pm
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AmPm::Am => "am",
            AmPm::Pm => "pm",
        }
    }
}

impl Display for AmPm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmPm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "am" => Ok(AmPm::Am),
            "pm" => Ok(AmPm::Pm),
            _ => Err(()),
        }
    }
}

/// Maps a 12 hour reading onto `0..24`.
///
/// `12 am` becomes `0`, any hour below 12 in the afternoon gets 12 added and
/// everything else is left alone.
pub fn convert_12_to_24(hour12: u32, am_pm: AmPm) -> u32 {
    match am_pm {
        AmPm::Am if hour12 == 12 => 0,
        AmPm::Pm if hour12 < 12 => hour12 + 12,
        _ => hour12,
    }
}

/// Maps `0..24` onto a 12 hour reading. Both 0 and 12 read as 12.
pub fn convert_24_to_12(hour24: u32) -> (u32, AmPm) {
    let hour12 = match hour24 % 12 {
        0 => 12,
        hour => hour,
    };
    (hour12, AmPm::of_hour(hour24))
}

#[cfg(test)]
mod tests {
    use super::{convert_12_to_24, convert_24_to_12, AmPm};

    #[test]
    fn twelve_to_twenty_four() {
        assert_eq!(convert_12_to_24(12, AmPm::Am), 0);
        assert_eq!(convert_12_to_24(1, AmPm::Am), 1);
        assert_eq!(convert_12_to_24(11, AmPm::Am), 11);
        assert_eq!(convert_12_to_24(12, AmPm::Pm), 12);
        assert_eq!(convert_12_to_24(1, AmPm::Pm), 13);
        assert_eq!(convert_12_to_24(11, AmPm::Pm), 23);
    }

    #[test]
    fn twenty_four_to_twelve() {
        assert_eq!(convert_24_to_12(0), (12, AmPm::Am));
        assert_eq!(convert_24_to_12(9), (9, AmPm::Am));
        assert_eq!(convert_24_to_12(12), (12, AmPm::Pm));
        assert_eq!(convert_24_to_12(21), (9, AmPm::Pm));
        assert_eq!(convert_24_to_12(23), (11, AmPm::Pm));
    }

    #[test]
    fn conversions_are_inverse() {
        for hour in 0..24 {
            let (hour12, am_pm) = convert_24_to_12(hour);
            assert_eq!(convert_12_to_24(hour12, am_pm), hour, "hour {hour}");
        }
    }

    #[test]
    fn am_pm_strings() {
        assert_eq!("am".parse(), Ok(AmPm::Am));
        assert_eq!("pm".parse(), Ok(AmPm::Pm));
        assert_eq!("".parse::<AmPm>(), Err(()));
        assert_eq!(AmPm::Pm.to_string(), "pm");
    }
}
