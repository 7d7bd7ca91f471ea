// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::{AmPm, TimeValue};

use super::{FieldContext, SegmentOptions};

/// One `<option>` of the AM/PM select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmPmOption {
    /// `""`, `"am"` or `"pm"`.
    pub value: &'static str,
    pub label: String,
    pub disabled: bool,
}

/// The AM/PM segment as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmPmSelect {
    pub class_name: String,
    pub value: Option<AmPm>,
    pub disabled: bool,
    pub required: bool,
    pub aria_label: Option<String>,
    pub auto_focus: bool,
    pub options: Vec<AmPmOption>,
}

impl AmPmSelect {
    pub fn option(&self, value: AmPm) -> Option<&AmPmOption> {
        self.options.iter().find(|o| o.value == value.as_str())
    }
}

fn half_day(boundary: Option<TimeValue>) -> Option<AmPm> {
    boundary.map(|t| AmPm::of_hour(t.hour))
}

/// A half-day is disabled when the range excludes it entirely: "am" when the
/// earliest allowed time is already past noon, "pm" when the latest allowed
/// time is before noon.
pub(crate) fn disabled_options(ctx: &FieldContext<'_>) -> (bool, bool) {
    (
        half_day(ctx.min_time) == Some(AmPm::Pm),
        half_day(ctx.max_time) == Some(AmPm::Am),
    )
}

pub(crate) fn view(
    ctx: &FieldContext<'_>,
    options: &SegmentOptions<'_>,
    labels: &[String; 2],
) -> AmPmSelect {
    let class = ctx.class_name;
    let value = ctx.state.am_pm;
    let (am_disabled, pm_disabled) = disabled_options(ctx);

    let mut choices = Vec::with_capacity(3);
    if value.is_none() {
        choices.push(AmPmOption {
            value: "",
            label: options.placeholder.unwrap_or("--").to_owned(),
            disabled: false,
        });
    }
    choices.push(AmPmOption {
        value: AmPm::Am.as_str(),
        label: labels[0].clone(),
        disabled: am_disabled,
    });
    choices.push(AmPmOption {
        value: AmPm::Pm.as_str(),
        label: labels[1].clone(),
        disabled: pm_disabled,
    });

    AmPmSelect {
        class_name: format!("{class}__input {class}__amPm"),
        value,
        disabled: ctx.disabled,
        required: ctx.required,
        aria_label: options.aria_label.map(str::to_owned),
        auto_focus: options.auto_focus,
        options: choices,
    }
}
