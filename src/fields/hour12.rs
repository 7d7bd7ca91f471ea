// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::range::{safe_max, safe_min};
use crate::{convert_24_to_12, TimeValue};

use super::{FieldContext, FieldName, NumberField, SegmentOptions};

/// The boundary's hour on the 12 hour clock, if it lies in the half-day
/// currently selected. A boundary at 12 o'clock narrows nothing: 12 is both
/// the first and the last label of its half-day.
fn boundary_hour(ctx: &FieldContext<'_>, boundary: Option<TimeValue>) -> Option<u32> {
    let (hour, am_pm) = convert_24_to_12(boundary?.hour);
    (Some(am_pm) == ctx.state.am_pm && hour != 12).then_some(hour)
}

pub(crate) fn bounds(ctx: &FieldContext<'_>) -> (u32, u32) {
    (
        safe_max(1, [boundary_hour(ctx, ctx.min_time)]),
        safe_min(12, [boundary_hour(ctx, ctx.max_time)]),
    )
}

/// The stored hour projected onto the 12 hour clock.
pub(crate) fn value(ctx: &FieldContext<'_>) -> String {
    match ctx.state.hour.as_deref() {
        None | Some("") => String::new(),
        Some(hour) => match hour.parse::<u32>() {
            Ok(hour) => convert_24_to_12(hour).0.to_string(),
            Err(_) => hour.to_owned(),
        },
    }
}

pub(crate) fn view(ctx: &FieldContext<'_>, options: &SegmentOptions<'_>) -> NumberField {
    NumberField::new(ctx, options, FieldName::Hour12, value(ctx), bounds(ctx))
}

#[cfg(test)]
mod tests {
    use super::{bounds, value};
    use crate::fields::tests::{context, state};
    use crate::AmPm;

    #[test]
    fn shows_twelve_hour_projection() {
        let s = state(Some(AmPm::Pm), "21", "0");
        assert_eq!(value(&context(&s, None, None)), "9");
        let s = state(Some(AmPm::Am), "0", "0");
        assert_eq!(value(&context(&s, None, None)), "12");
        let s = state(Some(AmPm::Am), "", "0");
        assert_eq!(value(&context(&s, None, None)), "");
    }

    #[test]
    fn default_bounds() {
        let s = state(Some(AmPm::Am), "9", "0");
        assert_eq!(bounds(&context(&s, None, None)), (1, 12));
    }

    #[test]
    fn narrowed_in_the_same_half_day() {
        let s = state(Some(AmPm::Pm), "15", "0");
        assert_eq!(bounds(&context(&s, Some("14:00"), Some("18:30"))), (2, 6));
    }

    #[test]
    fn other_half_day_does_not_narrow() {
        let s = state(Some(AmPm::Am), "9", "0");
        assert_eq!(bounds(&context(&s, Some("14:00"), Some("18:30"))), (1, 12));
        let s = state(None, "9", "0");
        assert_eq!(bounds(&context(&s, Some("08:00"), None)), (1, 12));
    }

    #[test]
    fn twelve_o_clock_does_not_narrow() {
        let s = state(Some(AmPm::Pm), "13", "0");
        assert_eq!(bounds(&context(&s, Some("12:30"), None)), (1, 12));
    }
}
