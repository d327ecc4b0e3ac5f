// fieldcheck - chainable field validation
//
// Re-exports the validation crate at the top level and the logging crate
// as `fieldcheck::log`.

pub use fieldcheck_validation::*;

pub use fieldcheck_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConfigError, MessageTable, Rule, Validate, ValidationError, ValidationErrors, Validator,
    };
}
