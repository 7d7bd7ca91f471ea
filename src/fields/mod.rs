// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The individual segments of a time input.
//!
//! Every segment follows the same contract: given the shared
//! `FieldContext` (the stored field state, the boundary times and the
//! class name prefix) it produces a view with a value, a `min` and a `max`.
//! The segments live in their own modules: `hour12`, `hour24`, `minute`,
//! `second`, `am_pm` and the hidden `native` field.

use crate::{range, AmPm, Precision, TimeValue};

pub(crate) mod am_pm;
pub(crate) mod hour12;
pub(crate) mod hour24;
pub(crate) mod minute;
pub(crate) mod native;
pub(crate) mod second;

mod handle;

pub use am_pm::{AmPmOption, AmPmSelect};
pub use handle::{InputHandle, InputKind, Validity};
pub use native::NativeField;

/// The identity of a segment. `as_str` is the form field name.
///
/// The declaration order is the order in which fields are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    AmPm,
    Hour12,
    Hour24,
    Minute,
    Second,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::AmPm,
        FieldName::Hour12,
        FieldName::Hour24,
        FieldName::Minute,
        FieldName::Second,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::AmPm => "amPm",
            FieldName::Hour12 => "hour12",
            FieldName::Hour24 => "hour24",
            FieldName::Minute => "minute",
            FieldName::Second => "second",
        }
    }

    /// Both hour fields share the `__hour` class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            FieldName::Hour12 | FieldName::Hour24 => "hour",
            name => name.as_str(),
        }
    }

    /// The precision a field needs in order to be shown.
    pub fn precision(self) -> Precision {
        match self {
            FieldName::Minute => Precision::Minute,
            FieldName::Second => Precision::Second,
            _ => Precision::Hour,
        }
    }
}

/// What the user has entered so far, field by field.
///
/// `None` means unset and `Some("")` means the user cleared the field. The
/// hour is kept on the 24 hour clock even while a 12 hour field shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub am_pm: Option<AmPm>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
}

impl FieldState {
    pub fn from_value(value: Option<TimeValue>) -> Self {
        match value {
            Some(time) => Self {
                am_pm: Some(AmPm::of_hour(time.hour)),
                hour: Some(time.hour.to_string()),
                minute: Some(time.minute.to_string()),
                second: Some(time.second.to_string()),
            },
            None => Self::default(),
        }
    }

    pub fn hour(&self) -> Option<u32> {
        range::candidate(self.hour.as_deref())
    }

    pub fn minute(&self) -> Option<u32> {
        range::candidate(self.minute.as_deref())
    }
}

/// Everything the segments share.
pub(crate) struct FieldContext<'a> {
    pub class_name: &'a str,
    pub disabled: bool,
    pub required: bool,
    pub min_time: Option<TimeValue>,
    pub max_time: Option<TimeValue>,
    pub state: &'a FieldState,
}

/// Per-segment presentation options.
#[derive(Default)]
pub(crate) struct SegmentOptions<'a> {
    pub aria_label: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub show_leading_zeros: bool,
    pub auto_focus: bool,
}

/// A numeric segment as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    pub name: FieldName,
    pub class_name: String,
    pub value: String,
    pub min: u32,
    pub max: u32,
    pub disabled: bool,
    pub required: bool,
    pub aria_label: Option<String>,
    pub placeholder: String,
    pub auto_focus: bool,
    /// A `0` is drawn in front of the input. It is not part of the value.
    pub has_leading_zero: bool,
}

impl NumberField {
    pub(crate) fn new(
        ctx: &FieldContext<'_>,
        options: &SegmentOptions<'_>,
        name: FieldName,
        value: String,
        (min, max): (u32, u32),
    ) -> Self {
        let class = ctx.class_name;
        let has_leading_zero = options.show_leading_zeros && needs_leading_zero(&value);
        let mut class_name = format!("{class}__input {class}__{}", name.class_suffix());
        if has_leading_zero {
            class_name.push_str(&format!(" {class}__input--hasLeadingZero"));
        }

        Self {
            name,
            class_name,
            value,
            min,
            max,
            disabled: ctx.disabled,
            required: ctx.required,
            aria_label: options.aria_label.map(str::to_owned),
            placeholder: options.placeholder.unwrap_or("--").to_owned(),
            auto_focus: options.auto_focus,
            has_leading_zero,
        }
    }

    /// The number of characters the field accepts.
    pub fn max_length(&self) -> usize {
        self.max.to_string().len()
    }
}

/// `9` gets a leading zero, `09`, `10` and the empty string do not. A lone
/// `0` does.
fn needs_leading_zero(value: &str) -> bool {
    value.parse::<u32>().is_ok_and(|n| n < 10) && (value == "0" || !value.starts_with('0'))
}

/// A segment view of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    Number(NumberField),
    Select(AmPmSelect),
}

impl FieldView {
    pub fn name(&self) -> FieldName {
        match self {
            FieldView::Number(field) => field.name,
            FieldView::Select(_) => FieldName::AmPm,
        }
    }
}
