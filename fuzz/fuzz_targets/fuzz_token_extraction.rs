//! Fuzz target for GlyphLine token extraction.
//!
//! Goal: extraction should **never panic**, and every extracted token must
//! start with `~` and contain no whitespace.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_token_extraction
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for token in glyphlint_domain::extract_tokens(&text) {
        assert!(token.starts_with('~'));
        assert!(!token.chars().any(char::is_whitespace));
        let _ = glyphlint_domain::is_valid_token(token);
    }
});
