// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::range::{safe_max, safe_min};
use crate::TimeValue;

use super::{FieldContext, FieldName, NumberField, SegmentOptions};

/// A boundary only limits the seconds within its own minute.
fn boundary_second(ctx: &FieldContext<'_>, boundary: Option<TimeValue>) -> Option<u32> {
    let boundary = boundary?;
    let same_minute = ctx.state.hour() == Some(boundary.hour)
        && ctx.state.minute() == Some(boundary.minute);
    same_minute.then_some(boundary.second)
}

pub(crate) fn bounds(ctx: &FieldContext<'_>) -> (u32, u32) {
    (
        safe_max(0, [boundary_second(ctx, ctx.min_time)]),
        safe_min(59, [boundary_second(ctx, ctx.max_time)]),
    )
}

pub(crate) fn view(ctx: &FieldContext<'_>, options: &SegmentOptions<'_>) -> NumberField {
    let value = ctx.state.second.clone().unwrap_or_default();
    NumberField::new(ctx, options, FieldName::Second, value, bounds(ctx))
}
