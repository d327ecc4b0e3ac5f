//! Fuzz target for the validator's accumulation model.
//!
//! Applies an arbitrary sequence of rules and checks that the pass flag,
//! the error map and first-failure-wins stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fieldcheck_validation::Validator;

#[derive(Debug, Arbitrary)]
enum Check {
    Required(String),
    Email(String),
    MinInt(i64, i64),
    MinFloat(f64, f64),
    MinString(String, u8),
    MaxInt(i64, i64),
    BetweenInt(i64, i64, i64),
    Custom(bool),
}

#[derive(Debug, Arbitrary)]
struct Step {
    /// Small field space so fields collide often
    field: u8,
    msg: String,
    check: Check,
}

fuzz_target!(|steps: Vec<Step>| {
    let mut v = Validator::new();

    for step in &steps {
        let field = format!("f{}", step.field % 4);
        let before = v.error(&field).map(str::to_string);

        match &step.check {
            Check::Required(s) => v.required(s, &field, &step.msg),
            Check::Email(s) => v.email(s, &field, &step.msg),
            Check::MinInt(a, b) => v.min_int(*a, *b, &field, &step.msg),
            Check::MinFloat(a, b) => v.min_float(*a, *b, &field, &step.msg),
            Check::MinString(s, min) => v.min_string(s, *min as usize, &field, &step.msg),
            Check::MaxInt(a, b) => v.max_int(*a, *b, &field, &step.msg),
            Check::BetweenInt(a, lo, hi) => v.between_int(*a, *lo, *hi, &field, &step.msg),
            Check::Custom(ok) => v.check(*ok, &field, &step.msg),
        };

        match (before, v.error(&field)) {
            (Some(before), after) => assert_eq!(after, Some(before.as_str())),
            (None, Some(recorded)) if !step.msg.is_empty() => assert_eq!(recorded, step.msg),
            _ => {}
        }

        assert_eq!(v.is_passed(), v.errors().is_empty());
        assert_eq!(v.is_failed(), !v.is_passed());
    }
});
