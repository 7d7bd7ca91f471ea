#![no_main]

use libfuzzer_sys::fuzz_target;
use time_input::{TimeInput, TimeInputProps};

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let joined: String = time_input::pattern::tokenize(s)
        .iter()
        .map(|token| token.text)
        .collect();
    assert_eq!(joined, s);
    let _ = time_input::pattern::render_segments(s, false);
    let _ = TimeInput::new(TimeInputProps::default().with_locale("en-US").with_format(s));
});
