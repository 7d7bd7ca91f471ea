#![no_main]

use libfuzzer_sys::fuzz_target;
use time_input::{Precision, TimeValue};

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    if let Ok(time) = TimeValue::parse(s) {
        let printed = time.format(Precision::Second);
        assert_eq!(TimeValue::parse(&printed), Ok(time));
    }
});
