#![no_main]

use libfuzzer_sys::fuzz_target;
use libtrivia_ownership::trivia::scan_trivia;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let trivia = scan_trivia(s);
    assert_eq!(trivia.to_string(), s);
});
