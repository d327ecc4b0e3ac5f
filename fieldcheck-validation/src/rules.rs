// Rule names, default messages and message rendering

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Rule name for [`Rule::Required`].
pub const REQUIRED: &str = "required";
/// Default message for fields with the required rule.
pub const REQUIRED_MSG: &str = "%s is required";

/// Rule name for [`Rule::Email`].
pub const EMAIL: &str = "email";
/// Default message for fields with the email rule.
pub const EMAIL_MSG: &str = "%s is not valid";

pub const MIN_INT: &str = "minInt";
pub const MIN_INT_MSG: &str = "%s should be more than %v";

pub const MIN_FLOAT: &str = "minFloat";
pub const MIN_FLOAT_MSG: &str = "%s should be more than %v";

pub const MIN_STRING: &str = "minString";
pub const MIN_STRING_MSG: &str = "%s should have more than %v characters";

pub const MAX_INT: &str = "maxInt";
pub const MAX_INT_MSG: &str = "%s should be less than %v";

pub const MAX_FLOAT: &str = "maxFloat";
pub const MAX_FLOAT_MSG: &str = "%s should be less than %v";

pub const MAX_STRING: &str = "maxString";
pub const MAX_STRING_MSG: &str = "%s should have less than %v characters";

pub const BETWEEN_INT: &str = "betweenInt";
pub const BETWEEN_INT_MSG: &str = "%s should be greater than or equal %v and less than or equal %v";

pub const BETWEEN_FLOAT: &str = "betweenFloat";
pub const BETWEEN_FLOAT_MSG: &str =
    "%s should be greater than or equal %v and less than or equal %v";

pub const LEN_STRING: &str = "lenString";
pub const LEN_STRING_MSG: &str = "%s should have %v characters";

pub const REGEX: &str = "regex";
pub const REGEX_MSG: &str = "%s is not valid";

pub const ONE_OF: &str = "oneOf";
pub const ONE_OF_MSG: &str = "%s does not exist in %v";

/// Rule name used by [`Validator::check`](crate::Validator::check).
pub const CUSTOM: &str = "custom";
pub const CUSTOM_MSG: &str = "%s is not valid";

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Required,
    Email,
    MinInt,
    MinFloat,
    MinString,
    MaxInt,
    MaxFloat,
    MaxString,
    BetweenInt,
    BetweenFloat,
    LenString,
    Regex,
    OneOf,
    Custom,
}

impl Rule {
    pub const ALL: [Rule; 14] = [
        Rule::Required,
        Rule::Email,
        Rule::MinInt,
        Rule::MinFloat,
        Rule::MinString,
        Rule::MaxInt,
        Rule::MaxFloat,
        Rule::MaxString,
        Rule::BetweenInt,
        Rule::BetweenFloat,
        Rule::LenString,
        Rule::Regex,
        Rule::OneOf,
        Rule::Custom,
    ];

    /// The public rule-name constant, used as the key in message tables.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Required => REQUIRED,
            Rule::Email => EMAIL,
            Rule::MinInt => MIN_INT,
            Rule::MinFloat => MIN_FLOAT,
            Rule::MinString => MIN_STRING,
            Rule::MaxInt => MAX_INT,
            Rule::MaxFloat => MAX_FLOAT,
            Rule::MaxString => MAX_STRING,
            Rule::BetweenInt => BETWEEN_INT,
            Rule::BetweenFloat => BETWEEN_FLOAT,
            Rule::LenString => LEN_STRING,
            Rule::Regex => REGEX,
            Rule::OneOf => ONE_OF,
            Rule::Custom => CUSTOM,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Rule::ALL.into_iter().find(|rule| rule.name() == name)
    }

    /// The built-in message template for this rule.
    pub fn default_template(self) -> &'static str {
        match self {
            Rule::Required => REQUIRED_MSG,
            Rule::Email => EMAIL_MSG,
            Rule::MinInt => MIN_INT_MSG,
            Rule::MinFloat => MIN_FLOAT_MSG,
            Rule::MinString => MIN_STRING_MSG,
            Rule::MaxInt => MAX_INT_MSG,
            Rule::MaxFloat => MAX_FLOAT_MSG,
            Rule::MaxString => MAX_STRING_MSG,
            Rule::BetweenInt => BETWEEN_INT_MSG,
            Rule::BetweenFloat => BETWEEN_FLOAT_MSG,
            Rule::LenString => LEN_STRING_MSG,
            Rule::Regex => REGEX_MSG,
            Rule::OneOf => ONE_OF_MSG,
            Rule::Custom => CUSTOM_MSG,
        }
    }

    /// Number of values substituted into this rule's template: the field
    /// name plus one per bound.
    pub fn placeholders(self) -> usize {
        match self {
            Rule::Required | Rule::Email | Rule::Regex | Rule::Custom => 1,
            Rule::BetweenInt | Rule::BetweenFloat => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Substitute `%s`/`%v` placeholders left to right from `args`.
///
/// `%%` renders a single `%`. Placeholders left over once `args` runs out
/// are kept verbatim.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb @ ('s' | 'v')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        out.push('%');
                        out.push(verb);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

/// Count `%s`/`%v` placeholders, ignoring `%%` escapes.
pub fn count_placeholders(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
            }
            Some('s') | Some('v') => {
                chars.next();
                count += 1;
            }
            _ => {}
        }
    }

    count
}

static DEFAULT_MESSAGES: Lazy<Arc<MessageTable>> = Lazy::new(|| Arc::new(MessageTable::default()));

/// Read-only mapping from rule to message template.
///
/// Built once, then shared between validators through an `Arc`. See
/// [`MessageTable::builder`] for overriding templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    pub(crate) templates: HashMap<Rule, String>,
}

impl Default for MessageTable {
    fn default() -> Self {
        Self {
            templates: Rule::ALL
                .into_iter()
                .map(|rule| (rule, rule.default_template().to_string()))
                .collect(),
        }
    }
}

impl MessageTable {
    /// The process-wide default table.
    pub fn shared_default() -> Arc<MessageTable> {
        Arc::clone(&DEFAULT_MESSAGES)
    }

    pub fn template(&self, rule: Rule) -> &str {
        self.templates
            .get(&rule)
            .map(String::as_str)
            .unwrap_or_else(|| rule.default_template())
    }

    /// Render the message for `rule` failing on `field`.
    pub fn message(&self, rule: Rule, field: &str, bounds: &[&dyn fmt::Display]) -> String {
        let mut args: Vec<&dyn fmt::Display> = Vec::with_capacity(bounds.len() + 1);
        args.push(&field);
        args.extend_from_slice(bounds);
        render(self.template(rule), &args)
    }
}
