// Validator: accumulates the first failure per field

use crate::{MessageTable, Rule, ValidationErrors, evaluators};
use fieldcheck_log::{debug, trace};
use regex::Regex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Collects validation failures keyed by field name.
///
/// Every rule method evaluates its predicate and, on failure, records a
/// message for the field unless one is already recorded. A non-empty `msg`
/// is used verbatim; an empty one selects the rule's template from the
/// validator's [`MessageTable`]. Methods return `&mut Self` so checks can
/// be chained.
///
/// ```
/// use fieldcheck_validation::Validator;
///
/// let mut v = Validator::new();
/// v.email("john.doe@example.com", "email", "")
///     .min_int(17, 18, "age", "")
///     .min_string("rey", 2, "name", "");
///
/// assert!(v.is_failed());
/// assert_eq!(v.error("age"), Some("age should be more than 18"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    errors: HashMap<String, String>,
    passed: bool,
    messages: Arc<MessageTable>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A clean validator using the built-in messages.
    pub fn new() -> Self {
        Self::with_messages(MessageTable::shared_default())
    }

    /// A clean validator using a configured message table.
    pub fn with_messages(messages: Arc<MessageTable>) -> Self {
        Self {
            errors: HashMap::new(),
            passed: true,
            messages,
        }
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    // ========================================================================
    // Rules
    // ========================================================================

    /// Fails on empty or whitespace-only strings.
    pub fn required(&mut self, s: &str, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::required(s), Rule::Required, field, msg, &[])
    }

    /// Fails unless `s` is an RFC 5322 email address.
    pub fn email(&mut self, s: &str, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::email(s), Rule::Email, field, msg, &[])
    }

    /// Fails when `value < min`.
    pub fn min_int(&mut self, value: i64, min: i64, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::min(value, min), Rule::MinInt, field, msg, &[&min])
    }

    /// Fails when `value < min`. No epsilon: the bound itself passes.
    pub fn min_float(&mut self, value: f64, min: f64, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::min(value, min), Rule::MinFloat, field, msg, &[&min])
    }

    /// Fails when `s` has fewer than `min` characters.
    pub fn min_string(&mut self, s: &str, min: usize, field: &str, msg: &str) -> &mut Self {
        self.record(
            evaluators::min_string(s, min),
            Rule::MinString,
            field,
            msg,
            &[&min],
        )
    }

    pub fn max_int(&mut self, value: i64, max: i64, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::max(value, max), Rule::MaxInt, field, msg, &[&max])
    }

    pub fn max_float(&mut self, value: f64, max: f64, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::max(value, max), Rule::MaxFloat, field, msg, &[&max])
    }

    pub fn max_string(&mut self, s: &str, max: usize, field: &str, msg: &str) -> &mut Self {
        self.record(
            evaluators::max_string(s, max),
            Rule::MaxString,
            field,
            msg,
            &[&max],
        )
    }

    /// Fails unless `min <= value <= max`.
    pub fn between_int(
        &mut self,
        value: i64,
        min: i64,
        max: i64,
        field: &str,
        msg: &str,
    ) -> &mut Self {
        self.record(
            evaluators::between(value, min, max),
            Rule::BetweenInt,
            field,
            msg,
            &[&min, &max],
        )
    }

    pub fn between_float(
        &mut self,
        value: f64,
        min: f64,
        max: f64,
        field: &str,
        msg: &str,
    ) -> &mut Self {
        self.record(
            evaluators::between(value, min, max),
            Rule::BetweenFloat,
            field,
            msg,
            &[&min, &max],
        )
    }

    /// Fails unless `s` has exactly `len` characters.
    pub fn len_string(&mut self, s: &str, len: usize, field: &str, msg: &str) -> &mut Self {
        self.record(
            evaluators::len_string(s, len),
            Rule::LenString,
            field,
            msg,
            &[&len],
        )
    }

    /// Fails unless `pattern` matches `s`.
    pub fn matches(&mut self, s: &str, pattern: &Regex, field: &str, msg: &str) -> &mut Self {
        self.record(evaluators::matches(s, pattern), Rule::Regex, field, msg, &[])
    }

    /// Fails unless `allowed` contains `value`. The default message lists
    /// the allowed values as `[a, b, c]`.
    pub fn one_of<T>(&mut self, value: &T, allowed: &[T], field: &str, msg: &str) -> &mut Self
    where
        T: PartialEq + Display,
    {
        let ok = evaluators::one_of(value, allowed);
        self.record(ok, Rule::OneOf, field, msg, &[&ListDisplay(allowed)])
    }

    /// Record a caller-computed predicate under the `custom` rule.
    pub fn check(&mut self, ok: bool, field: &str, msg: &str) -> &mut Self {
        self.record(ok, Rule::Custom, field, msg, &[])
    }

    fn record(
        &mut self,
        ok: bool,
        rule: Rule,
        field: &str,
        msg: &str,
        bounds: &[&dyn Display],
    ) -> &mut Self {
        if ok {
            return self;
        }

        self.passed = false;

        match self.errors.entry(field.to_string()) {
            Entry::Occupied(_) => {
                trace!(
                    target: "fieldcheck::validator",
                    "Ignoring {} failure on already failed field {}", rule, field
                );
            }
            Entry::Vacant(slot) => {
                let message = if msg.is_empty() {
                    self.messages.message(rule, field, bounds)
                } else {
                    msg.to_string()
                };
                debug!(
                    target: "fieldcheck::validator",
                    "Field {} failed rule {}: {}", field, rule, message
                );
                slot.insert(message);
            }
        }

        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn is_failed(&self) -> bool {
        !self.passed
    }

    /// Field name to first recorded message. Iteration order is unspecified.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_errors(self) -> HashMap<String, String> {
        self.errors
    }

    /// `Ok(())` if every check passed, otherwise the failures sorted by
    /// field name.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.passed {
            Ok(())
        } else {
            Err(ValidationErrors::from(self.errors))
        }
    }
}

struct ListDisplay<'a, T>(&'a [T]);

impl<T: Display> Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}
