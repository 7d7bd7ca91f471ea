// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for segmented, locale-aware time entry.
//!
//! A time input is drawn as a row of small fields (hour, minute, second and
//! AM/PM) laid out from a format pattern such as `h:mm:ss a`. The pattern is
//! either given by the caller or derived from the locale. The fields are
//! edited one at a time and merged back into one canonical `HH:mm(:ss)`
//! value:
//!
//! * [`TimeInput`] owns the fields, merges them and emits the value
//! * [`TimePicker`] wraps a [`TimeInput`] with an open/closed clock popup
//! * [`locale`] renders times the way a locale writes them
//! * [`pattern`] splits format patterns into field and literal tokens
//!
//! Nothing here draws anything. Rendering produces plain views (class names,
//! values, bounds) for a host UI to map onto its widgets.
//!
//! # Examples
//!
//! ```
//! use time_input::{FieldName, Outcome, TimeInput, TimeInputProps};
//!
//! let props = TimeInputProps::default().with_locale("en-US");
//! let mut input = TimeInput::new(props).unwrap();
//! assert_eq!(input.placeholder(), "h:mm a");
//!
//! input.change(FieldName::Hour12, "9");
//! input.change(FieldName::Minute, "30");
//! let outcome = input.change(FieldName::AmPm, "pm");
//! assert_eq!(
//!     outcome,
//!     Outcome::Changed {
//!         value: Some("21:30".to_owned()),
//!         should_close_clock: false
//!     }
//! );
//! ```

mod convert;
mod error;
pub mod fields;
mod focus;
mod input;
pub mod locale;
pub mod pattern;
mod picker;
mod precision;
pub mod range;
mod value;

pub use convert::{convert_12_to_24, convert_24_to_12, AmPm};
pub use error::TimeInputError;
pub use fields::{
    AmPmOption, AmPmSelect, FieldName, FieldState, FieldView, InputHandle, InputKind,
    NativeField, NumberField, Validity,
};
pub use focus::FocusOrder;
pub use input::{
    FieldLabels, Node, Outcome, Phase, RenderedInput, TimeInput, TimeInputProps,
};
pub use locale::{
    am_pm_labels, default_locale, derive_placeholder, divider_of, parse_locale, Locale,
    TimeFormatter,
};
pub use picker::{Button, ClockView, RenderedPicker, TimePicker, TimePickerProps};
pub use precision::Precision;
pub use value::{get_hours_minutes, get_hours_minutes_seconds, TimeSource, TimeValue};
