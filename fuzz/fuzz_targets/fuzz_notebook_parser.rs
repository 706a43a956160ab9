#![no_main]

use libfuzzer_sys::fuzz_target;
use nbmyst::notebook::Notebook;
use nbmyst::pipeline::convert_notebook;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(mut notebook) = Notebook::parse(text) {
            let _ = convert_notebook(&mut notebook, "fuzz");
        }
    }
});
