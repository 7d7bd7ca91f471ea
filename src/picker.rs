// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! A time input with a clock popup.
//!
//! [`TimePicker`] owns a [`TimeInput`] and whether the clock is open. Every
//! value the input emits is stored and handed back down as the input's
//! `value`, and every open or close is handed down as `is_clock_open`, which
//! resets edits in progress.

use std::fmt;

use tracing::debug;

use crate::fields::FieldName;
use crate::input::{Outcome, RenderedInput, TimeInput, TimeInputProps};
use crate::{TimeInputError, TimeValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerProps {
    /// Prefix of the picker's class names. The input group is drawn with
    /// `{class_name}__inputGroup`.
    pub class_name: String,
    /// Close the clock after a value is picked, unless told otherwise.
    pub close_clock: bool,
    pub disable_clock: bool,
    pub open_clock_on_focus: bool,
    pub is_open: bool,
    pub input: TimeInputProps,
}

impl Default for TimePickerProps {
    fn default() -> Self {
        Self {
            class_name: "time-picker".to_owned(),
            close_clock: true,
            disable_clock: false,
            open_clock_on_focus: true,
            is_open: false,
            input: TimeInputProps::default(),
        }
    }
}

impl TimePickerProps {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_close_clock(mut self, close_clock: bool) -> Self {
        self.close_clock = close_clock;
        self
    }

    pub fn with_disable_clock(mut self, disable_clock: bool) -> Self {
        self.disable_clock = disable_clock;
        self
    }

    pub fn with_open_clock_on_focus(mut self, open_clock_on_focus: bool) -> Self {
        self.open_clock_on_focus = open_clock_on_focus;
        self
    }

    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn with_input(mut self, input: TimeInputProps) -> Self {
        self.input = input;
        self
    }

    fn input_props(&self) -> TimeInputProps {
        TimeInputProps {
            class_name: format!("{}__inputGroup", self.class_name),
            is_clock_open: Some(self.is_open),
            ..self.input.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub class_name: String,
    pub disabled: bool,
}

/// The popup the analog clock is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub class_name: String,
    pub value: Option<TimeValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPicker {
    pub class_name: String,
    pub input: RenderedInput,
    pub clear_button: Button,
    /// Absent when the clock is disabled.
    pub clock_button: Option<Button>,
    /// Present while the clock is open.
    pub clock: Option<ClockView>,
}

type ValueCallback = Box<dyn FnMut(Option<&str>)>;
type Callback = Box<dyn FnMut()>;

pub struct TimePicker {
    props: TimePickerProps,
    input: TimeInput,
    on_change: Option<ValueCallback>,
    on_clock_open: Option<Callback>,
    on_clock_close: Option<Callback>,
}

impl fmt::Debug for TimePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePicker")
            .field("props", &self.props)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl TimePicker {
    /// # Errors
    ///
    /// Fails if the input cannot be laid out, see [`TimeInput::new`].
    pub fn new(props: TimePickerProps) -> Result<Self, TimeInputError> {
        let input = TimeInput::new(props.input_props())?;
        Ok(Self {
            props,
            input,
            on_change: None,
            on_clock_open: None,
            on_clock_close: None,
        })
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(Option<&str>) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn with_on_clock_open(mut self, on_clock_open: impl FnMut() + 'static) -> Self {
        self.on_clock_open = Some(Box::new(on_clock_open));
        self
    }

    pub fn with_on_clock_close(mut self, on_clock_close: impl FnMut() + 'static) -> Self {
        self.on_clock_close = Some(Box::new(on_clock_close));
        self
    }

    pub fn props(&self) -> &TimePickerProps {
        &self.props
    }

    pub fn input(&self) -> &TimeInput {
        &self.input
    }

    /// Direct access for keyboard and focus events inside the input group.
    /// Changes should go through [`TimePicker::change_field`] so that the
    /// picker sees them.
    pub fn input_mut(&mut self) -> &mut TimeInput {
        &mut self.input
    }

    pub fn is_open(&self) -> bool {
        self.props.is_open
    }

    /// The time the analog clock should show.
    pub fn clock_value(&self) -> Option<TimeValue> {
        self.props.input.value
    }

    /// # Errors
    ///
    /// Same as [`TimeInput::update`].
    pub fn update(&mut self, props: TimePickerProps) -> Result<(), TimeInputError> {
        self.input.update(props.input_props())?;
        self.props = props;
        Ok(())
    }

    fn set_open(&mut self, is_open: bool) {
        if self.props.is_open == is_open {
            return;
        }
        self.props.is_open = is_open;
        self.input.set_clock_open(Some(is_open));
        debug!(is_open, "toggled clock");
        let callback = if is_open {
            self.on_clock_open.as_mut()
        } else {
            self.on_clock_close.as_mut()
        };
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn open_clock(&mut self) {
        self.set_open(true);
    }

    pub fn close_clock(&mut self) {
        self.set_open(false);
    }

    /// The clock button. Does nothing while the picker is disabled or has no
    /// clock.
    pub fn toggle_clock(&mut self) {
        if self.props.input.disabled || self.props.disable_clock {
            return;
        }
        self.set_open(!self.props.is_open);
    }

    /// Accepts a value from outside the input, such as from the clock.
    /// `should_close_clock` falls back to the `close_clock` prop.
    pub fn change(&mut self, value: Option<&str>, should_close_clock: Option<bool>) {
        if should_close_clock.unwrap_or(self.props.close_clock) {
            self.close_clock();
        }
        let parsed = value.and_then(|v| TimeValue::parse(v).ok());
        self.props.input.value = parsed;
        self.input.set_value(parsed);
        debug!(value = value.unwrap_or("null"), "time picker changed");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
    }

    fn settle(&mut self, outcome: Outcome) -> Outcome {
        if let Outcome::Changed {
            value,
            should_close_clock,
        } = &outcome
        {
            self.change(value.as_deref(), Some(*should_close_clock));
        }
        outcome
    }

    pub fn change_field(&mut self, field: FieldName, raw: &str) -> Outcome {
        let outcome = self.input.change(field, raw);
        self.settle(outcome)
    }

    pub fn change_native(&mut self, raw: &str) -> Outcome {
        let outcome = self.input.change_native(raw);
        self.settle(outcome)
    }

    /// The clear button.
    pub fn clear(&mut self) {
        self.change(None, None);
    }

    /// Returns whether the key was handled.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" && self.props.is_open {
            self.close_clock();
            return true;
        }
        false
    }

    /// A click or touch outside the picker.
    pub fn outside_interaction(&mut self) {
        self.close_clock();
    }

    /// Focuses a segment, opening the clock if so configured. The AM/PM
    /// select never opens it.
    pub fn focus_field(&mut self, field: FieldName) {
        if !self.input.focus(field) {
            return;
        }
        if self.props.input.disabled
            || self.props.is_open
            || !self.props.open_clock_on_focus
            || field == FieldName::AmPm
        {
            return;
        }
        self.open_clock();
    }

    pub fn render(&self) -> RenderedPicker {
        let class = &self.props.class_name;
        let disabled = self.props.input.disabled;
        let class_name = format!(
            "{class} {class}--{} {class}--{}",
            if self.props.is_open { "open" } else { "closed" },
            if disabled { "disabled" } else { "enabled" },
        );
        let clock_button = (!self.props.disable_clock).then(|| Button {
            class_name: format!("{class}__clock-button {class}__button"),
            disabled,
        });
        let clock = (self.props.is_open && !self.props.disable_clock).then(|| ClockView {
            class_name: format!("{class}__clock"),
            value: self.clock_value(),
        });

        RenderedPicker {
            class_name,
            input: self.input.render(),
            clear_button: Button {
                class_name: format!("{class}__clear-button {class}__button"),
                disabled,
            },
            clock_button,
            clock,
        }
    }
}
