//! Fuzz target for model-reply parsing.
//!
//! This fuzzer tests that reply parsing:
//! 1. Never panics on arbitrary text
//! 2. Always degrades malformed replies to an empty list
//! 3. Feeds cleanly into the confidence gate

#![no_main]

use cleansheets::llm::parse_issues;
use cleansheets::filter_confident;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(reply) = std::str::from_utf8(data) {
        let issues = parse_issues(reply);
        let kept = filter_confident(issues);
        for issue in &kept {
            if let Some(c) = issue.confidence {
                assert!(c > 0.7);
            }
        }
    }
});
