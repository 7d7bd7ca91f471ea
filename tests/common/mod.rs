// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::cell::RefCell;
use std::rc::Rc;

use time_input::{TimeInput, TimeInputProps, TimeValue};

/// Records every callback a time input fires.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Recorder {
    pub changes: Rc<RefCell<Vec<(Option<String>, bool)>>>,
    pub invalid: Rc<RefCell<usize>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn attach(&self, input: TimeInput) -> TimeInput {
        let changes = Rc::clone(&self.changes);
        let invalid = Rc::clone(&self.invalid);
        input
            .with_on_change(move |value, should_close_clock| {
                changes
                    .borrow_mut()
                    .push((value.map(str::to_owned), should_close_clock));
            })
            .with_on_invalid_change(move || *invalid.borrow_mut() += 1)
    }

    pub fn changes(&self) -> Vec<(Option<String>, bool)> {
        self.changes.borrow().clone()
    }

    pub fn invalid_count(&self) -> usize {
        *self.invalid.borrow()
    }
}

#[allow(dead_code)]
pub fn time(s: &str) -> TimeValue {
    match s.parse() {
        Ok(time) => time,
        Err(e) => panic!("Failed to parse time from value '{s}': {e}"),
    }
}

/// A time input with a recorder attached.
#[allow(dead_code)]
pub fn recorded(props: TimeInputProps) -> (TimeInput, Recorder) {
    let recorder = Recorder::default();
    let input = match TimeInput::new(props) {
        Ok(input) => input,
        Err(e) => panic!("Failed to lay out time input: {e}"),
    };
    (recorder.attach(input), recorder)
}
