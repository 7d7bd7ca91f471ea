// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::{AmPm, TimeValue};

use super::{FieldView, NativeField};

/// The constraints of a mounted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Number { min: u32, max: u32 },
    Select,
    Time {
        min: Option<TimeValue>,
        max: Option<TimeValue>,
    },
}

/// Constraint validation result, mirroring the browser's `ValidityState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    ValueMissing,
    BadInput,
    RangeUnderflow,
    RangeOverflow,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

/// A mounted input as the controller sees it: whatever the user has typed
/// plus the constraints from the last render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandle {
    pub kind: InputKind,
    pub value: String,
    pub required: bool,
}

impl InputHandle {
    pub fn number(min: u32, max: u32) -> Self {
        Self {
            kind: InputKind::Number { min, max },
            value: String::new(),
            required: false,
        }
    }

    pub fn select() -> Self {
        Self {
            kind: InputKind::Select,
            value: String::new(),
            required: false,
        }
    }

    pub fn time() -> Self {
        Self {
            kind: InputKind::Time {
                min: None,
                max: None,
            },
            value: String::new(),
            required: false,
        }
    }

    /// The `max` attribute of a numeric input.
    pub fn max(&self) -> Option<u32> {
        match self.kind {
            InputKind::Number { max, .. } => Some(max),
            _ => None,
        }
    }

    pub fn validity(&self) -> Validity {
        let value = self.value.trim();
        if value.is_empty() {
            return if self.required {
                Validity::ValueMissing
            } else {
                Validity::Valid
            };
        }

        match &self.kind {
            InputKind::Number { min, max } => match value.parse::<u32>() {
                Err(_) => Validity::BadInput,
                Ok(n) if n < *min => Validity::RangeUnderflow,
                Ok(n) if n > *max => Validity::RangeOverflow,
                Ok(_) => Validity::Valid,
            },
            InputKind::Select => match value.parse::<AmPm>() {
                Ok(_) => Validity::Valid,
                Err(()) => Validity::BadInput,
            },
            InputKind::Time { min, max } => match TimeValue::parse(value) {
                Err(_) => Validity::BadInput,
                Ok(t) if min.is_some_and(|min| t < min) => Validity::RangeUnderflow,
                Ok(t) if max.is_some_and(|max| t > max) => Validity::RangeOverflow,
                Ok(_) => Validity::Valid,
            },
        }
    }

    /// Re-renders a segment into its handle.
    pub(crate) fn sync_field(&mut self, view: &FieldView) {
        match view {
            FieldView::Number(field) => {
                self.kind = InputKind::Number {
                    min: field.min,
                    max: field.max,
                };
                self.value = field.value.clone();
                self.required = field.required;
            }
            FieldView::Select(select) => {
                self.kind = InputKind::Select;
                self.value = select
                    .value
                    .map(|am_pm| am_pm.as_str().to_owned())
                    .unwrap_or_default();
                self.required = select.required;
            }
        }
    }

    pub(crate) fn sync_native(&mut self, view: &NativeField) {
        self.kind = InputKind::Time {
            min: view.min.as_deref().and_then(|t| TimeValue::parse(t).ok()),
            max: view.max.as_deref().and_then(|t| TimeValue::parse(t).ok()),
        };
        self.value = view.value.clone();
        self.required = view.required;
    }
}
