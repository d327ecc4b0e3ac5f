// Validation and configuration errors

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The recorded failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Resolved message (custom or rendered default)
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All field failures of one validator, sorted by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(mut errors: Vec<ValidationError>) -> Self {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// `{"errors": [{"field": .., "message": ..}, ..]}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<HashMap<String, String>> for ValidationErrors {
    fn from(map: HashMap<String, String>) -> Self {
        Self::new(
            map.into_iter()
                .map(|(field, message)| ValidationError { field, message })
                .collect(),
        )
    }
}

/// Errors raised while building or loading a message table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("Malformed template for rule {rule}: expected {expected} placeholders, found {found}")]
    MalformedTemplate {
        rule: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse message configuration: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
