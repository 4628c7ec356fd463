//! Fuzz target for ICEMAP policy parsing.
//!
//! Goal: the YAML and JSON loaders should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_parser
//! ```

#![no_main]

use glyphlint_settings::{PolicyFormat, load_policy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = load_policy(text, PolicyFormat::Yaml);
        let _ = load_policy(text, PolicyFormat::Json);
    }
});
