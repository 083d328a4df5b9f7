#![no_main]

use libfuzzer_sys::fuzz_target;
use widget::{DelayMs, parse_delay};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let lenient = parse_delay(Some(raw));
    match raw.parse::<DelayMs>() {
        Ok(strict) => assert_eq!(strict, lenient),
        Err(_) => assert_eq!(lenient, DelayMs::ZERO),
    }
});
