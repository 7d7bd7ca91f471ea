// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Keyboard focus across the visible segments.
//!
//! The order is the order in which the segments are drawn. Dividers and the
//! hidden native field never take part. Moving past either end is a no-op.

use tracing::trace;

use crate::fields::FieldName;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusOrder {
    order: Vec<FieldName>,
    focused: Option<FieldName>,
}

impl FocusOrder {
    pub fn new(order: Vec<FieldName>) -> Self {
        Self {
            order,
            focused: None,
        }
    }

    pub fn order(&self) -> &[FieldName] {
        &self.order
    }

    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    /// Focuses `field` if it is drawn. Returns whether focus moved there.
    pub fn focus(&mut self, field: FieldName) -> bool {
        if !self.order.contains(&field) {
            return false;
        }
        trace!(field = field.as_str(), "focus");
        self.focused = Some(field);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn first(&self) -> Option<FieldName> {
        self.order.first().copied()
    }

    pub fn next_of(&self, field: FieldName) -> Option<FieldName> {
        let idx = self.order.iter().position(|&f| f == field)?;
        self.order.get(idx + 1).copied()
    }

    pub fn previous_of(&self, field: FieldName) -> Option<FieldName> {
        let idx = self.order.iter().position(|&f| f == field)?;
        idx.checked_sub(1).map(|idx| self.order[idx])
    }

    /// Replaces the drawn segments, dropping focus if its field disappeared.
    pub fn set_order(&mut self, order: Vec<FieldName>) {
        if self.focused.is_some_and(|f| !order.contains(&f)) {
            self.focused = None;
        }
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::FocusOrder;
    use crate::fields::FieldName;

    fn order() -> FocusOrder {
        FocusOrder::new(vec![FieldName::Hour12, FieldName::Minute, FieldName::AmPm])
    }

    #[test]
    fn neighbours_without_wrapping() {
        let focus = order();
        assert_eq!(focus.first(), Some(FieldName::Hour12));
        assert_eq!(focus.next_of(FieldName::Hour12), Some(FieldName::Minute));
        assert_eq!(focus.next_of(FieldName::AmPm), None);
        assert_eq!(focus.previous_of(FieldName::Minute), Some(FieldName::Hour12));
        assert_eq!(focus.previous_of(FieldName::Hour12), None);
        assert_eq!(focus.next_of(FieldName::Second), None);
    }

    #[test]
    fn only_drawn_fields_take_focus() {
        let mut focus = order();
        assert!(!focus.focus(FieldName::Hour24));
        assert_eq!(focus.focused(), None);
        assert!(focus.focus(FieldName::Minute));
        assert_eq!(focus.focused(), Some(FieldName::Minute));
        focus.blur();
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn relayout_drops_stale_focus() {
        let mut focus = order();
        focus.focus(FieldName::AmPm);
        focus.set_order(vec![FieldName::Hour24, FieldName::Minute]);
        assert_eq!(focus.focused(), None);
        assert_eq!(focus.order(), [FieldName::Hour24, FieldName::Minute]);
    }
}
