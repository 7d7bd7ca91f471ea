// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore relayout

//! The composite time input.
//!
//! [`TimeInput`] lays out the segments named by a format pattern, owns one
//! [`InputHandle`] per drawn segment and merges the segments back into one
//! canonical value whenever one of them changes.
//!
//! The controller moves between two phases. It is `Synchronized` after every
//! reset from the `value` prop (or from any of `min_time`, `max_time`,
//! `max_detail` and `is_clock_open`) and `Editing` once the user has changed a
//! segment since then.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::fields::{
    am_pm, hour12, hour24, minute, native, second, AmPmSelect, FieldContext, FieldName,
    FieldState, FieldView, InputHandle, NativeField, NumberField, SegmentOptions,
};
use crate::focus::FocusOrder;
use crate::locale::{am_pm_labels, default_locale, derive_placeholder, divider_of, parse_locale};
use crate::pattern::{render_segments, Segment, TokenKind};
use crate::{convert_12_to_24, convert_24_to_12, AmPm, Locale, Precision, TimeInputError, TimeValue};

/// Per-segment strings, such as ARIA labels or placeholders. Both hour
/// segments share `hour`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLabels {
    pub am_pm: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
}

impl FieldLabels {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::AmPm => self.am_pm.as_deref(),
            FieldName::Hour12 | FieldName::Hour24 => self.hour.as_deref(),
            FieldName::Minute => self.minute.as_deref(),
            FieldName::Second => self.second.as_deref(),
        }
    }
}

/// Everything the owner of a [`TimeInput`] controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInputProps {
    pub value: Option<TimeValue>,
    pub min_time: Option<TimeValue>,
    pub max_time: Option<TimeValue>,
    pub max_detail: Precision,
    /// A pattern such as `HH:mm`. Derived from the locale when absent.
    pub format: Option<String>,
    /// A locale tag such as `de-DE`. Taken from the environment when absent.
    pub locale: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub auto_focus: bool,
    pub is_clock_open: Option<bool>,
    /// Form name of the native field.
    pub name: String,
    /// Prefix of every generated class name.
    pub class_name: String,
    pub aria_labels: FieldLabels,
    pub placeholders: FieldLabels,
    pub native_aria_label: Option<String>,
}

impl Default for TimeInputProps {
    fn default() -> Self {
        Self {
            value: None,
            min_time: None,
            max_time: None,
            max_detail: Precision::default(),
            format: None,
            locale: None,
            disabled: false,
            required: false,
            auto_focus: false,
            is_clock_open: None,
            name: "time".to_owned(),
            class_name: "time-input".to_owned(),
            aria_labels: FieldLabels::default(),
            placeholders: FieldLabels::default(),
            native_aria_label: None,
        }
    }
}

impl TimeInputProps {
    pub fn with_value(mut self, value: impl Into<Option<TimeValue>>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_min_time(mut self, min_time: impl Into<Option<TimeValue>>) -> Self {
        self.min_time = min_time.into();
        self
    }

    pub fn with_max_time(mut self, max_time: impl Into<Option<TimeValue>>) -> Self {
        self.max_time = max_time.into();
        self
    }

    pub fn with_max_detail(mut self, max_detail: Precision) -> Self {
        self.max_detail = max_detail;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn with_clock_open(mut self, is_clock_open: Option<bool>) -> Self {
        self.is_clock_open = is_clock_open;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_aria_labels(mut self, aria_labels: FieldLabels) -> Self {
        self.aria_labels = aria_labels;
        self
    }

    pub fn with_placeholders(mut self, placeholders: FieldLabels) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn with_native_aria_label(mut self, label: impl Into<String>) -> Self {
        self.native_aria_label = Some(label.into());
        self
    }
}

/// What a change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new value was emitted. `None` means the input was cleared.
    Changed {
        value: Option<String>,
        should_close_clock: bool,
    },
    /// The segments are partly filled or out of range. Nothing was emitted.
    Invalid,
    /// The event did not concern a drawn segment.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Synchronized,
    Editing,
}

/// One drawn element of the input group, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Divider { class_name: String, text: String },
    /// Pattern text that is neither a divider nor a field.
    Literal(String),
    /// The `0` drawn in front of a field that shows a leading zero.
    LeadingZero { class_name: String },
    Number(NumberField),
    Select(AmPmSelect),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInput {
    pub class_name: String,
    pub nodes: Vec<Node>,
    pub native: NativeField,
}

impl RenderedInput {
    /// The drawn segments, in order.
    pub fn field_names(&self) -> Vec<FieldName> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Number(field) => Some(field.name),
                Node::Select(_) => Some(FieldName::AmPm),
                _ => None,
            })
            .collect()
    }

    pub fn number(&self, name: FieldName) -> Option<&NumberField> {
        self.nodes.iter().find_map(|node| match node {
            Node::Number(field) if field.name == name => Some(field),
            _ => None,
        })
    }

    pub fn select(&self) -> Option<&AmPmSelect> {
        self.nodes.iter().find_map(|node| match node {
            Node::Select(select) => Some(select),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Divider(String),
    Literal(String),
    Field {
        name: FieldName,
        show_leading_zeros: bool,
    },
}

/// The pattern resolved against the locale and the precision.
#[derive(Debug, Clone)]
struct Layout {
    locale: Locale,
    placeholder: String,
    divider: Option<char>,
    am_pm_labels: [String; 2],
    items: Vec<Item>,
}

fn field_name(kind: TokenKind) -> Option<FieldName> {
    match kind {
        TokenKind::AmPm => Some(FieldName::AmPm),
        TokenKind::Hour12 => Some(FieldName::Hour12),
        TokenKind::Hour24 => Some(FieldName::Hour24),
        TokenKind::Minute => Some(FieldName::Minute),
        TokenKind::Second => Some(FieldName::Second),
        TokenKind::Literal => None,
    }
}

impl Layout {
    fn new(props: &TimeInputProps) -> Result<Self, TimeInputError> {
        let locale = match props.locale.as_deref() {
            Some(tag) => parse_locale(tag)?,
            None => default_locale(),
        };
        let explicit = props.format.is_some();
        let placeholder = match &props.format {
            Some(format) => format.clone(),
            None => derive_placeholder(locale, props.max_detail),
        };

        let mut items = Vec::new();
        // Dividers are held back until the field after them is known to be
        // drawn, so a field finer than the precision takes its divider along.
        let mut pending = Vec::new();
        for segment in render_segments(&placeholder, explicit) {
            let token = match segment {
                Segment::Divider(text) => {
                    pending.push(Item::Divider(text.to_owned()));
                    continue;
                }
                Segment::Literal(text) => {
                    pending.push(Item::Literal(text.to_owned()));
                    continue;
                }
                Segment::Field(token) => token,
            };
            let show_leading_zeros =
                token.show_leading_zeros(!explicit && token.kind == TokenKind::Second)?;
            let Some(name) = field_name(token.kind) else {
                continue;
            };
            if name.precision() > props.max_detail {
                pending.clear();
                continue;
            }
            items.append(&mut pending);
            items.push(Item::Field {
                name,
                show_leading_zeros,
            });
        }
        items.append(&mut pending);

        Ok(Self {
            locale,
            divider: divider_of(&placeholder),
            placeholder,
            am_pm_labels: am_pm_labels(locale),
            items,
        })
    }

    fn fields(&self) -> impl Iterator<Item = (FieldName, bool)> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Field {
                name,
                show_leading_zeros,
            } => Some((*name, *show_leading_zeros)),
            _ => None,
        })
    }

    fn focus_order(&self) -> FocusOrder {
        let mut order: Vec<FieldName> = Vec::new();
        for (name, _) in self.fields() {
            if !order.contains(&name) {
                order.push(name);
            }
        }
        FocusOrder::new(order)
    }

    fn mount(&self) -> BTreeMap<FieldName, InputHandle> {
        self.fields()
            .map(|(name, _)| {
                let handle = match name {
                    FieldName::AmPm => InputHandle::select(),
                    _ => InputHandle::number(0, 0),
                };
                (name, handle)
            })
            .collect()
    }
}

type ChangeCallback = Box<dyn FnMut(Option<&str>, bool)>;
type InvalidChangeCallback = Box<dyn FnMut()>;

/// A segmented time input.
///
/// # Examples
///
/// ```
/// use time_input::{FieldName, Outcome, Precision, TimeInput, TimeInputProps, TimeValue};
///
/// let props = TimeInputProps::default()
///     .with_locale("de-DE")
///     .with_max_detail(Precision::Second)
///     .with_value(TimeValue::new(22, 17, 3).unwrap());
/// let mut input = TimeInput::new(props).unwrap();
/// assert_eq!(
///     input.render().field_names(),
///     [FieldName::Hour24, FieldName::Minute, FieldName::Second]
/// );
///
/// let outcome = input.change(FieldName::Minute, "45");
/// assert_eq!(
///     outcome,
///     Outcome::Changed {
///         value: Some("22:45:03".to_owned()),
///         should_close_clock: false
///     }
/// );
/// ```
pub struct TimeInput {
    props: TimeInputProps,
    layout: Layout,
    state: FieldState,
    handles: BTreeMap<FieldName, InputHandle>,
    native: InputHandle,
    focus: FocusOrder,
    last_pressed_key: Option<String>,
    phase: Phase,
    on_change: Option<ChangeCallback>,
    on_invalid_change: Option<InvalidChangeCallback>,
}

impl fmt::Debug for TimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeInput")
            .field("props", &self.props)
            .field("layout", &self.layout)
            .field("state", &self.state)
            .field("handles", &self.handles)
            .field("native", &self.native)
            .field("focus", &self.focus)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl TimeInput {
    /// Lays out the segments and applies the initial value.
    ///
    /// # Errors
    ///
    /// Fails if the locale is unknown or the format repeats a token more than
    /// twice.
    pub fn new(props: TimeInputProps) -> Result<Self, TimeInputError> {
        let layout = Layout::new(&props)?;
        debug!(placeholder = %layout.placeholder, locale = ?layout.locale, "laid out time input");
        let mut input = Self {
            handles: layout.mount(),
            native: InputHandle::time(),
            focus: layout.focus_order(),
            layout,
            props,
            state: FieldState::default(),
            last_pressed_key: None,
            phase: Phase::Synchronized,
            on_change: None,
            on_invalid_change: None,
        };
        input.reset();
        if input.props.auto_focus {
            input.click_wrapper();
        }
        Ok(input)
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(Option<&str>, bool) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn with_on_invalid_change(mut self, on_invalid_change: impl FnMut() + 'static) -> Self {
        self.on_invalid_change = Some(Box::new(on_invalid_change));
        self
    }

    pub fn props(&self) -> &TimeInputProps {
        &self.props
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn locale(&self) -> Locale {
        self.layout.locale
    }

    /// The pattern the segments were laid out from.
    pub fn placeholder(&self) -> &str {
        &self.layout.placeholder
    }

    pub fn handle(&self, field: FieldName) -> Option<&InputHandle> {
        self.handles.get(&field)
    }

    pub fn native_handle(&self) -> &InputHandle {
        &self.native
    }

    pub fn focused(&self) -> Option<FieldName> {
        self.focus.focused()
    }

    /// Applies new props, laying the segments out again if the pattern may
    /// have changed and resetting the segments if the value may have.
    ///
    /// # Errors
    ///
    /// Same as [`TimeInput::new`]. On error nothing is changed.
    pub fn update(&mut self, props: TimeInputProps) -> Result<(), TimeInputError> {
        let relayout = props.format != self.props.format
            || props.locale != self.props.locale
            || props.max_detail != self.props.max_detail;
        let reset = props.value != self.props.value
            || props.min_time != self.props.min_time
            || props.max_time != self.props.max_time
            || props.max_detail != self.props.max_detail
            || props.is_clock_open != self.props.is_clock_open;

        if relayout {
            let layout = Layout::new(&props)?;
            debug!(placeholder = %layout.placeholder, locale = ?layout.locale, "laid out time input again");
            self.handles = layout.mount();
            let focused = self.focus.focused();
            self.focus = layout.focus_order();
            if let Some(field) = focused {
                self.focus.focus(field);
            }
            self.layout = layout;
        }
        self.props = props;

        if reset {
            self.reset();
        } else {
            self.sync_handles();
        }
        Ok(())
    }

    pub fn set_value(&mut self, value: Option<TimeValue>) {
        if self.props.value != value {
            self.props.value = value;
            self.reset();
        }
    }

    pub fn set_min_time(&mut self, min_time: Option<TimeValue>) {
        if self.props.min_time != min_time {
            self.props.min_time = min_time;
            self.reset();
        }
    }

    pub fn set_max_time(&mut self, max_time: Option<TimeValue>) {
        if self.props.max_time != max_time {
            self.props.max_time = max_time;
            self.reset();
        }
    }

    pub fn set_clock_open(&mut self, is_clock_open: Option<bool>) {
        if self.props.is_clock_open != is_clock_open {
            self.props.is_clock_open = is_clock_open;
            self.reset();
        }
    }

    /// Decomposes the `value` prop into the segments.
    fn reset(&mut self) {
        self.state = FieldState::from_value(self.props.value);
        self.phase = Phase::Synchronized;
        self.sync_handles();
        debug!(
            value = ?self.props.value.map(|v| v.format(self.props.max_detail)),
            "reset time input fields"
        );
    }

    fn context(&self) -> FieldContext<'_> {
        FieldContext {
            class_name: &self.props.class_name,
            disabled: self.props.disabled,
            required: self.props.required,
            min_time: self.props.min_time,
            max_time: self.props.max_time,
            state: &self.state,
        }
    }

    fn field_view(
        &self,
        ctx: &FieldContext<'_>,
        name: FieldName,
        show_leading_zeros: bool,
        auto_focus: bool,
    ) -> FieldView {
        let options = SegmentOptions {
            aria_label: self.props.aria_labels.get(name),
            placeholder: self.props.placeholders.get(name),
            show_leading_zeros,
            auto_focus,
        };
        match name {
            FieldName::AmPm => {
                FieldView::Select(am_pm::view(ctx, &options, &self.layout.am_pm_labels))
            }
            FieldName::Hour12 => FieldView::Number(hour12::view(ctx, &options)),
            FieldName::Hour24 => FieldView::Number(hour24::view(ctx, &options)),
            FieldName::Minute => FieldView::Number(minute::view(ctx, &options)),
            FieldName::Second => FieldView::Number(second::view(ctx, &options)),
        }
    }

    /// Views of the drawn segments, in order. Only the first one may ask
    /// for auto focus.
    fn views(&self) -> Vec<FieldView> {
        let ctx = self.context();
        self.layout
            .fields()
            .enumerate()
            .map(|(index, (name, show_leading_zeros))| {
                let auto_focus = index == 0 && self.props.auto_focus;
                self.field_view(&ctx, name, show_leading_zeros, auto_focus)
            })
            .collect()
    }

    fn native_view(&self) -> NativeField {
        native::view(
            &self.context(),
            &self.props.name,
            self.props.value,
            self.props.max_detail,
            self.props.native_aria_label.as_deref(),
        )
    }

    fn sync_handles(&mut self) {
        for view in self.views() {
            if let Some(handle) = self.handles.get_mut(&view.name()) {
                handle.sync_field(&view);
            }
        }
        let native = self.native_view();
        self.native.sync_native(&native);
    }

    pub fn render(&self) -> RenderedInput {
        let class = &self.props.class_name;
        let mut views = self.views().into_iter();
        let mut nodes = Vec::with_capacity(self.layout.items.len());
        for item in &self.layout.items {
            match item {
                Item::Divider(text) => nodes.push(Node::Divider {
                    class_name: format!("{class}__divider"),
                    text: text.clone(),
                }),
                Item::Literal(text) => nodes.push(Node::Literal(text.clone())),
                Item::Field { .. } => match views.next() {
                    Some(FieldView::Number(field)) => {
                        if field.has_leading_zero {
                            nodes.push(Node::LeadingZero {
                                class_name: format!("{class}__leadingZero"),
                            });
                        }
                        nodes.push(Node::Number(field));
                    }
                    Some(FieldView::Select(select)) => nodes.push(Node::Select(select)),
                    None => {}
                },
            }
        }
        RenderedInput {
            class_name: class.clone(),
            nodes,
            native: self.native_view(),
        }
    }

    /// Handles a raw change event from a segment.
    pub fn change(&mut self, field: FieldName, raw: &str) -> Outcome {
        let Some(handle) = self.handles.get_mut(&field) else {
            return Outcome::Unchanged;
        };
        handle.value = raw.to_owned();
        trace!(field = field.as_str(), value = raw, "field changed");

        self.store(field, raw);
        self.phase = Phase::Editing;
        let outcome = self.merge();
        self.sync_handles();
        self.emit(&outcome);
        outcome
    }

    /// Writes a segment's raw value into the field state. The hour is kept
    /// on the 24 hour clock.
    fn store(&mut self, field: FieldName, raw: &str) {
        match field {
            FieldName::AmPm => {
                let am_pm = raw.parse::<AmPm>().ok();
                if let (Some(am_pm), Some(hour)) = (am_pm, self.state.hour()) {
                    if self.handles.contains_key(&FieldName::Hour12) {
                        let (hour12, _) = convert_24_to_12(hour);
                        self.state.hour = Some(convert_12_to_24(hour12, am_pm).to_string());
                    }
                }
                self.state.am_pm = am_pm;
            }
            FieldName::Hour12 => {
                let am_pm = self.state.am_pm.unwrap_or(AmPm::Am);
                let hour = match raw.trim() {
                    "" => String::new(),
                    raw => match raw.parse::<u32>() {
                        Ok(hour12) => convert_12_to_24(hour12, am_pm).to_string(),
                        Err(_) => raw.to_owned(),
                    },
                };
                self.state.hour = Some(hour);
            }
            FieldName::Hour24 => self.state.hour = Some(raw.to_owned()),
            FieldName::Minute => self.state.minute = Some(raw.to_owned()),
            FieldName::Second => self.state.second = Some(raw.to_owned()),
        }
    }

    /// Reads every drawn segment and decides what to emit.
    fn merge(&self) -> Outcome {
        let all_empty = self
            .handles
            .iter()
            .filter(|(name, _)| **name != FieldName::AmPm)
            .all(|(_, handle)| handle.value.trim().is_empty());
        if all_empty {
            return Outcome::Changed {
                value: None,
                should_close_clock: false,
            };
        }

        let complete = self
            .handles
            .values()
            .all(|handle| !handle.value.trim().is_empty() && handle.validity().is_valid());
        if !complete {
            return Outcome::Invalid;
        }

        let number = |name: FieldName| {
            self.handles
                .get(&name)
                .and_then(|handle| handle.value.trim().parse::<u32>().ok())
        };
        let am_pm = self
            .handles
            .get(&FieldName::AmPm)
            .and_then(|handle| handle.value.parse::<AmPm>().ok())
            .or(self.state.am_pm)
            .unwrap_or(AmPm::Am);
        let hour = number(FieldName::Hour24)
            .or_else(|| number(FieldName::Hour12).map(|hour12| convert_12_to_24(hour12, am_pm)))
            .unwrap_or(0);
        let minute = number(FieldName::Minute).unwrap_or(0);
        let second = number(FieldName::Second).unwrap_or(0);

        match TimeValue::new(hour, minute, second) {
            Ok(time) => Outcome::Changed {
                value: Some(time.format(self.props.max_detail)),
                should_close_clock: false,
            },
            Err(_) => Outcome::Invalid,
        }
    }

    fn emit(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Changed {
                value,
                should_close_clock,
            } => {
                debug!(value = value.as_deref().unwrap_or("null"), "time input changed");
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(value.as_deref(), *should_close_clock);
                }
            }
            Outcome::Invalid => {
                debug!("time input is incomplete or out of range");
                if let Some(on_invalid_change) = self.on_invalid_change.as_mut() {
                    on_invalid_change();
                }
            }
            Outcome::Unchanged => {}
        }
    }

    /// Handles a change of the native field. Its value is emitted as is.
    pub fn change_native(&mut self, raw: &str) -> Outcome {
        self.native.value = raw.to_owned();
        self.phase = Phase::Editing;
        let value = raw.trim();
        let outcome = Outcome::Changed {
            value: (!value.is_empty()).then(|| value.to_owned()),
            should_close_clock: false,
        };
        self.emit(&outcome);
        outcome
    }

    fn is_divider_key(&self, key: &str) -> bool {
        let mut chars = key.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if Some(c) == self.layout.divider)
    }

    /// Handles a key going down in `field`. Returns whether the default
    /// action should be prevented.
    pub fn key_down(&mut self, field: FieldName, key: &str) -> bool {
        self.last_pressed_key = Some(key.to_owned());
        let target = match key {
            "ArrowLeft" => self.focus.previous_of(field),
            "ArrowRight" => self.focus.next_of(field),
            key if self.is_divider_key(key) => self.focus.next_of(field),
            _ => return false,
        };
        if let Some(target) = target {
            self.focus.focus(target);
        }
        true
    }

    /// Handles a key coming up in `field`, moving on to the next segment
    /// once no further digit would fit.
    pub fn key_up(&mut self, field: FieldName, key: &str) {
        if self.last_pressed_key.as_deref() != Some(key) {
            return;
        }
        if key.len() != 1 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return;
        }
        let Some(handle) = self.handles.get(&field) else {
            return;
        };
        let Some(max) = handle.max() else {
            return;
        };

        let value = handle.value.trim();
        let no_room = value
            .parse::<u32>()
            .is_ok_and(|n| n.saturating_mul(10) > max)
            || value.len() >= max.to_string().len();
        if no_room {
            if let Some(next) = self.focus.next_of(field) {
                self.focus.focus(next);
            }
        }
    }

    /// Handles a printable key about to be typed into `field`. Returns
    /// whether it should be refused because the field is full.
    pub fn key_press(&mut self, field: FieldName, key: &str, has_selection: bool) -> bool {
        if has_selection || key.chars().count() != 1 {
            return false;
        }
        let Some(handle) = self.handles.get(&field) else {
            return false;
        };
        let Some(max) = handle.max() else {
            return false;
        };
        handle.value.chars().count() >= max.to_string().len()
    }

    pub fn focus(&mut self, field: FieldName) -> bool {
        self.focus.focus(field)
    }

    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// A click on the group itself rather than on a segment focuses the
    /// first segment.
    pub fn click_wrapper(&mut self) {
        if let Some(first) = self.focus.first() {
            self.focus.focus(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeValue {
        s.parse().unwrap()
    }

    fn input(props: TimeInputProps) -> TimeInput {
        TimeInput::new(props.with_locale("en-US")).unwrap()
    }

    fn changed(value: &str) -> Outcome {
        Outcome::Changed {
            value: Some(value.to_owned()),
            should_close_clock: false,
        }
    }

    #[test]
    fn fields_finer_than_precision_are_dropped_with_their_divider() {
        let input = input(
            TimeInputProps::default()
                .with_format("[HH:mm:ss]")
                .with_max_detail(Precision::Minute),
        );
        let nodes = input.render().nodes;
        let texts: Vec<_> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Divider { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["[", ":", "]"]);
        assert_eq!(input.handle(FieldName::Second), None);
    }

    #[test]
    fn twelve_hour_entry_merges_with_am_pm() {
        let mut input = input(TimeInputProps::default().with_value(time("09:30")));
        assert_eq!(input.placeholder(), "h:mm a");
        assert_eq!(input.change(FieldName::AmPm, "pm"), changed("21:30"));
        assert_eq!(input.state().hour.as_deref(), Some("21"));
        assert_eq!(input.change(FieldName::Hour12, "12"), changed("12:30"));
        assert_eq!(input.change(FieldName::AmPm, "am"), changed("00:30"));
    }

    #[test]
    fn midnight_in_24_hour_form_is_kept() {
        let mut input = input(
            TimeInputProps::default()
                .with_format("HH:mm")
                .with_value(time("10:15")),
        );
        assert_eq!(input.change(FieldName::Hour24, "0"), changed("00:15"));
    }

    #[test]
    fn hour_precision_emits_whole_hours() {
        let mut input = input(
            TimeInputProps::default()
                .with_format("HH:mm")
                .with_max_detail(Precision::Hour)
                .with_value(time("10:15")),
        );
        assert_eq!(input.render().field_names(), [FieldName::Hour24]);
        assert_eq!(input.change(FieldName::Hour24, "11"), changed("11:00"));
        assert_eq!(input.render().native.value, "10:00");
    }

    #[test]
    fn phases() {
        let mut input = input(TimeInputProps::default().with_value(time("10:15")));
        assert_eq!(input.phase(), Phase::Synchronized);
        input.change(FieldName::Minute, "");
        assert_eq!(input.phase(), Phase::Editing);
        input.set_clock_open(Some(true));
        assert_eq!(input.phase(), Phase::Synchronized);
        assert_eq!(input.state().minute.as_deref(), Some("15"));
    }

    #[test]
    fn unknown_segment_is_unchanged() {
        let mut input = input(TimeInputProps::default().with_format("HH:mm"));
        assert_eq!(input.change(FieldName::Second, "5"), Outcome::Unchanged);
        assert_eq!(input.change(FieldName::Hour12, "5"), Outcome::Unchanged);
    }

    #[test]
    fn divider_key_moves_focus() {
        let mut input = input(TimeInputProps::default().with_format("HH.mm"));
        input.focus(FieldName::Hour24);
        assert!(input.key_down(FieldName::Hour24, "."));
        assert_eq!(input.focused(), Some(FieldName::Minute));
        assert!(!input.key_down(FieldName::Minute, ":"));
        assert!(input.key_down(FieldName::Minute, "ArrowRight"));
        assert_eq!(input.focused(), Some(FieldName::Minute));
        assert!(input.key_down(FieldName::Minute, "ArrowLeft"));
        assert_eq!(input.focused(), Some(FieldName::Hour24));
    }

    #[test]
    fn key_press_guards_max_length() {
        let mut input = input(
            TimeInputProps::default()
                .with_format("HH:mm")
                .with_value(time("10:15")),
        );
        assert!(input.key_press(FieldName::Minute, "3", false));
        assert!(!input.key_press(FieldName::Minute, "3", true));
        assert!(!input.key_press(FieldName::Minute, "Enter", false));
        input.change(FieldName::Minute, "1");
        assert!(!input.key_press(FieldName::Minute, "3", false));
    }

    #[test]
    fn relayout_keeps_value() {
        let mut input = input(
            TimeInputProps::default()
                .with_format("HH:mm")
                .with_value(time("22:17")),
        );
        let props = input.props().clone().with_format("h:mm a");
        input.update(props).unwrap();
        assert_eq!(
            input.render().field_names(),
            [FieldName::Hour12, FieldName::Minute, FieldName::AmPm]
        );
        assert_eq!(input.handle(FieldName::Hour12).unwrap().value, "10");
        assert_eq!(input.handle(FieldName::AmPm).unwrap().value, "pm");

        let bad = input.props().clone().with_format("HHH:mm");
        assert!(input.update(bad).is_err());
        assert_eq!(input.placeholder(), "h:mm a");
    }
}
