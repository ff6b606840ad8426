#![no_main]

use cminus::artifacts::Artifacts;
use cminus::lexer::ScanOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The front end takes text; invalid UTF-8 never reaches it.
    if let Ok(s) = std::str::from_utf8(data) {
        let artifacts = Artifacts::compile(s, &ScanOptions::default());
        assert!(artifacts.parse_tree.starts_with("Program"));
        assert!(artifacts.syntax_errors.matches("Unexpected EOF").count() <= 1);
    }
});
