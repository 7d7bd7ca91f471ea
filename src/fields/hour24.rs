// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::range::{safe_max, safe_min};

use super::{FieldContext, FieldName, NumberField, SegmentOptions};

pub(crate) fn bounds(ctx: &FieldContext<'_>) -> (u32, u32) {
    (
        safe_max(0, [ctx.min_time.map(|t| t.hour)]),
        safe_min(23, [ctx.max_time.map(|t| t.hour)]),
    )
}

pub(crate) fn view(ctx: &FieldContext<'_>, options: &SegmentOptions<'_>) -> NumberField {
    let value = ctx.state.hour.clone().unwrap_or_default();
    NumberField::new(ctx, options, FieldName::Hour24, value, bounds(ctx))
}
