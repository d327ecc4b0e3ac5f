//! Field validation for fieldcheck
//!
//! A [`Validator`] runs named rules against values pulled out of user
//! input and keeps the first failure message per field. Validation never
//! stops early: every field is checked, and the caller inspects the
//! outcome afterwards.
//!
//! # Examples
//!
//! ## Chaining rules
//!
//! ```
//! use fieldcheck_validation::Validator;
//!
//! let mut v = Validator::new();
//! v.required("", "name", "")
//!     .min_string("", 3, "name", "")
//!     .min_int(3, 10, "score", "")
//!     .email("john.doe@example.com", "email", "");
//!
//! assert!(v.is_failed());
//! // Only the first failing rule for `name` is kept
//! assert_eq!(v.error("name"), Some("name is required"));
//! assert_eq!(v.error("score"), Some("score should be more than 10"));
//! assert_eq!(v.error("email"), None);
//! ```
//!
//! ## Custom messages
//!
//! ```
//! use fieldcheck_validation::Validator;
//!
//! let mut v = Validator::new();
//! v.min_int(17, 18, "age", "age must be greater than 18");
//! assert_eq!(v.errors()["age"], "age must be greater than 18");
//! ```
//!
//! ## Configured message tables
//!
//! ```
//! use fieldcheck_validation::{MessageTable, Rule, Validator};
//! use std::sync::Arc;
//!
//! let table = MessageTable::builder()
//!     .set(Rule::Email, "%s: please enter a valid address")
//!     .build()
//!     .unwrap();
//!
//! let mut v = Validator::with_messages(Arc::new(table));
//! v.email("nope", "email", "");
//! assert_eq!(v.error("email"), Some("email: please enter a valid address"));
//! ```

mod config;
mod errors;
pub mod evaluators;
mod rules;
mod traits;
mod validator;

pub use config::*;
pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;
