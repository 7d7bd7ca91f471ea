// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::error::Error;
use std::fmt::{self, Display};

/// Errors raised while configuring a time input.
///
/// Only configuration mistakes end up here. A user typing an out-of-range
/// number is not an error: it is reported through
/// [`Outcome::Invalid`](crate::Outcome::Invalid) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInputError {
    /// A format token was repeated more than twice, e.g. `hhh`.
    UnsupportedToken(String),
    /// The locale tag does not name a known locale.
    UnknownLocale(String),
    /// A string could not be read as an `HH:mm(:ss)` time.
    InvalidTime(String),
    /// A string is not one of `hour`, `minute` or `second`.
    InvalidPrecision(String),
}

impl Display for TimeInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInputError::UnsupportedToken(token) => {
                write!(f, "Unsupported token: {token}")
            }
            TimeInputError::UnknownLocale(tag) => {
                write!(f, "Unknown locale: {tag}")
            }
            TimeInputError::InvalidTime(value) => {
                write!(f, "Invalid time: '{value}' is not a valid HH:mm(:ss) value")
            }
            TimeInputError::InvalidPrecision(value) => {
                write!(
                    f,
                    "Invalid precision: '{value}', expected hour, minute or second"
                )
            }
        }
    }
}

impl Error for TimeInputError {}

