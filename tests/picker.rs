// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use time_input::{FieldName, Outcome, Phase, Precision, TimeInputProps, TimePicker, TimePickerProps};

mod common;
use common::time;

#[derive(Clone, Default)]
struct Events(Rc<RefCell<Vec<String>>>);

impl Events {
    fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    fn take(&self) -> Vec<String> {
        self.0.borrow_mut().drain(..).collect()
    }
}

fn picker(props: TimePickerProps) -> (TimePicker, Events) {
    let events = Events::default();
    let (on_change, on_open, on_close) = (events.clone(), events.clone(), events.clone());
    let picker = TimePicker::new(props)
        .unwrap()
        .with_on_change(move |value| on_change.push(format!("change {}", value.unwrap_or("null"))))
        .with_on_clock_open(move || on_open.push("open"))
        .with_on_clock_close(move || on_close.push("close"));
    (picker, events)
}

fn props() -> TimePickerProps {
    TimePickerProps::default().with_input(
        TimeInputProps::default()
            .with_locale("de-DE")
            .with_max_detail(Precision::Second)
            .with_value(time("22:17:03")),
    )
}

#[rstest]
#[case::escape(|p: &mut TimePicker| { p.key_down("Escape"); })]
#[case::outside(|p: &mut TimePicker| p.outside_interaction())]
#[case::toggle(|p: &mut TimePicker| p.toggle_clock())]
fn test_closing_the_clock(#[case] close: fn(&mut TimePicker)) {
    let (mut picker, events) = picker(props());
    picker.open_clock();
    assert!(picker.is_open());
    close(&mut picker);
    assert!(!picker.is_open());
    assert_eq!(events.take(), ["open", "close"]);
}

#[test]
fn test_toggling_resets_edits() {
    let (mut picker, _) = picker(props());
    picker.change_field(FieldName::Minute, "");
    assert_eq!(picker.input().phase(), Phase::Editing);
    picker.toggle_clock();
    assert_eq!(picker.input().phase(), Phase::Synchronized);
    assert_eq!(picker.input().handle(FieldName::Minute).unwrap().value, "17");
}

#[test]
fn test_clear_emits_null() {
    let (mut picker, events) = picker(props().with_open(true));
    picker.clear();
    assert_eq!(events.take(), ["close", "change null"]);
    assert_eq!(picker.clock_value(), None);
    assert_eq!(picker.input().handle(FieldName::Hour24).unwrap().value, "");
}

#[test]
fn test_external_change_honors_close_clock() {
    let (mut picker, events) = picker(props().with_close_clock(false).with_open(true));
    picker.change(Some("08:00:00"), None);
    assert!(picker.is_open());
    assert_eq!(events.take(), ["change 08:00:00"]);
    assert_eq!(picker.clock_value(), Some(time("08:00:00")));
    picker.change(Some("09:00:00"), Some(true));
    assert!(!picker.is_open());
}

#[test]
fn test_input_changes_reach_the_clock() {
    let (mut picker, events) = picker(props());
    let outcome = picker.change_field(FieldName::Hour24, "9");
    assert!(matches!(outcome, Outcome::Changed { .. }));
    assert_eq!(events.take(), ["change 09:17:03"]);
    assert_eq!(picker.clock_value(), Some(time("09:17:03")));

    assert_eq!(picker.change_field(FieldName::Minute, ""), Outcome::Invalid);
    assert!(events.take().is_empty());
    assert_eq!(picker.clock_value(), Some(time("09:17:03")));
}

#[rstest]
#[case::opens(true, false, FieldName::Hour24, true)]
#[case::not_configured(false, false, FieldName::Hour24, false)]
#[case::disabled(true, true, FieldName::Hour24, false)]
fn test_focus_opens_clock(
    #[case] open_on_focus: bool,
    #[case] disabled: bool,
    #[case] field: FieldName,
    #[case] expected: bool,
) {
    let mut props = props().with_open_clock_on_focus(open_on_focus);
    props.input = props.input.with_disabled(disabled);
    let (mut picker, _) = picker(props);
    picker.focus_field(field);
    assert_eq!(picker.is_open(), expected);
}

#[test]
fn test_am_pm_focus_keeps_clock_closed() {
    let mut props = props();
    props.input = props.input.with_locale("en-US");
    let (mut picker, _) = picker(props);
    picker.focus_field(FieldName::AmPm);
    assert!(!picker.is_open());
    assert_eq!(picker.input().focused(), Some(FieldName::AmPm));
}

#[test]
fn test_render() {
    let (mut picker, _) = picker(props().with_class_name("tp"));
    let rendered = picker.render();
    assert_eq!(rendered.class_name, "tp tp--closed tp--enabled");
    assert_eq!(rendered.input.class_name, "tp__inputGroup");
    assert_eq!(rendered.clear_button.class_name, "tp__clear-button tp__button");
    assert!(rendered.clock.is_none());

    picker.toggle_clock();
    let rendered = picker.render();
    assert_eq!(rendered.class_name, "tp tp--open tp--enabled");
    let clock = rendered.clock.unwrap();
    assert_eq!(clock.class_name, "tp__clock");
    assert_eq!(clock.value, Some(time("22:17:03")));
}
