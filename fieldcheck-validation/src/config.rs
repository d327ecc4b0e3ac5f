// Message table configuration: builder and file loaders

use crate::{ConfigError, MessageTable, Rule, count_placeholders};
use fieldcheck_log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Supported message file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    #[cfg(feature = "toml")]
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            #[cfg(feature = "toml")]
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// Builder for a [`MessageTable`] that overrides some default templates.
///
/// Every template is checked against the number of values its rule
/// substitutes, so a built table can always render.
#[derive(Debug, Default)]
pub struct MessageTableBuilder {
    overrides: Vec<(Rule, String)>,
}

impl MessageTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the template for `rule`. Later calls win.
    pub fn set(mut self, rule: Rule, template: impl Into<String>) -> Self {
        self.overrides.push((rule, template.into()));
        self
    }

    /// Override by rule name, as found in configuration files.
    pub fn set_named(self, name: &str, template: impl Into<String>) -> Result<Self, ConfigError> {
        let rule = Rule::from_name(name).ok_or_else(|| ConfigError::UnknownRule(name.to_string()))?;
        Ok(self.set(rule, template))
    }

    pub fn build(self) -> Result<MessageTable, ConfigError> {
        let mut table = MessageTable::default();

        for (rule, template) in self.overrides {
            let found = count_placeholders(&template);
            if found != rule.placeholders() {
                return Err(ConfigError::MalformedTemplate {
                    rule: rule.name().to_string(),
                    expected: rule.placeholders(),
                    found,
                });
            }
            table.templates.insert(rule, template);
        }

        Ok(table)
    }
}

impl MessageTable {
    pub fn builder() -> MessageTableBuilder {
        MessageTableBuilder::new()
    }

    fn from_entries(entries: HashMap<String, String>) -> Result<Self, ConfigError> {
        let count = entries.len();
        let table = entries
            .into_iter()
            .try_fold(MessageTable::builder(), |builder, (name, template)| {
                builder.set_named(&name, template)
            })?
            .build()?;

        info!(
            target: "fieldcheck::messages",
            "Loaded message table with {} overridden templates", count
        );
        Ok(table)
    }

    /// Parse a flat JSON object of `rule name -> template`.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let entries: HashMap<String, String> = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?;
        Self::from_entries(entries)
    }

    /// Parse a flat TOML table of `rule name = template`.
    ///
    /// ```
    /// use fieldcheck_validation::{MessageTable, Rule};
    ///
    /// let table = MessageTable::from_toml_str(r#"
    ///     email = "%s must be a real address"
    /// "#).unwrap();
    /// assert_eq!(table.template(Rule::Email), "%s must be a real address");
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let entries: HashMap<String, String> = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))?;
        Self::from_entries(entries)
    }

    pub fn parse(content: &str, format: FileFormat) -> Result<Self, ConfigError> {
        match format {
            FileFormat::Json => Self::from_json_str(content),
            #[cfg(feature = "toml")]
            FileFormat::Toml => Self::from_toml_str(content),
        }
    }

    /// Load a table from disk, picking the format from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::Parse("No file extension found".to_string()))?;
        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::Parse(format!("Unsupported format: {}", ext)))?;

        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }
}
