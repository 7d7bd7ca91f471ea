// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::range::{safe_max, safe_min};
use crate::TimeValue;

use super::{FieldContext, FieldName, NumberField, SegmentOptions};

/// A boundary only limits the minutes within its own hour.
fn boundary_minute(ctx: &FieldContext<'_>, boundary: Option<TimeValue>) -> Option<u32> {
    let boundary = boundary?;
    (ctx.state.hour() == Some(boundary.hour)).then_some(boundary.minute)
}

pub(crate) fn bounds(ctx: &FieldContext<'_>) -> (u32, u32) {
    (
        safe_max(0, [boundary_minute(ctx, ctx.min_time)]),
        safe_min(59, [boundary_minute(ctx, ctx.max_time)]),
    )
}

pub(crate) fn view(ctx: &FieldContext<'_>, options: &SegmentOptions<'_>) -> NumberField {
    let value = ctx.state.minute.clone().unwrap_or_default();
    NumberField::new(ctx, options, FieldName::Minute, value, bounds(ctx))
}
