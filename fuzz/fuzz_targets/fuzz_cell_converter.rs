#![no_main]

use libfuzzer_sys::fuzz_target;
use nbmyst::convert::convert_cell;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

        // Unterminated sections are expected; panics and hangs are not
        let _ = convert_cell(&mut lines);
    }
});
