//! Fuzz target for the email evaluator.
//!
//! The cheap length and `@` rejections must agree with the full check.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fieldcheck_validation::evaluators;

fuzz_target!(|input: &str| {
    let valid = evaluators::email(input);

    if input.len() < 3 || input.len() > 320 || !input.contains('@') {
        assert!(!valid);
    }

    // Every grammar class is ASCII
    if !input.is_ascii() {
        assert!(!valid);
    }

    // Matching is case-insensitive
    assert_eq!(valid, evaluators::email(&input.to_ascii_uppercase()));
});
