//! Fuzz target for message templates.
//!
//! Any template accepted by the builder renders the field name.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fieldcheck_validation::{MessageTable, Rule, count_placeholders};
use std::fmt::Display;

#[derive(Debug, Arbitrary)]
struct FuzzTemplate {
    rule: u8,
    template: String,
}

fuzz_target!(|data: FuzzTemplate| {
    let rule = Rule::ALL[data.rule as usize % Rule::ALL.len()];

    let Ok(table) = MessageTable::builder()
        .set(rule, data.template.clone())
        .build()
    else {
        assert_ne!(count_placeholders(&data.template), rule.placeholders());
        return;
    };

    let values: Vec<i64> = (1..rule.placeholders() as i64).collect();
    let bounds: Vec<&dyn Display> = values.iter().map(|b| b as &dyn Display).collect();

    // The first placeholder always receives the field name
    let message = table.message(rule, "FIELD", &bounds);
    assert!(message.contains("FIELD"));
});
