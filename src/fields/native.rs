// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::{Precision, TimeValue};

use super::FieldContext;

/// The hidden platform time input that mirrors the merged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeField {
    pub name: String,
    pub value: String,
    pub min: Option<String>,
    pub max: Option<String>,
    /// 3600, 60 or 1 seconds.
    pub step: u32,
    pub disabled: bool,
    pub required: bool,
    pub aria_label: Option<String>,
    pub hidden: bool,
}

pub(crate) fn view(
    ctx: &FieldContext<'_>,
    name: &str,
    value: Option<TimeValue>,
    precision: Precision,
    aria_label: Option<&str>,
) -> NativeField {
    let format = |t: TimeValue| t.format(precision);
    NativeField {
        name: name.to_owned(),
        value: value.map(format).unwrap_or_default(),
        min: ctx.min_time.map(format),
        max: ctx.max_time.map(format),
        step: precision.step(),
        disabled: ctx.disabled,
        required: ctx.required,
        aria_label: aria_label.map(str::to_owned),
        hidden: true,
    }
}
