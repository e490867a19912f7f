//! The redaction engine.
//!
//! - **`matcher`**: decides whether a dotted path is redacted
//! - **`walk`**: applies that decision across JSON-shaped data
//! - **`query`**: applies it to URL query parameters
//! - **`engine`**: the `Redactor` capability and its rule-driven implementation
//!
//! Rule data lives in `crate::rules`.

mod engine;
mod matcher;
mod query;
mod walk;

pub use engine::{RedactionEngine, RedactionHandling, Redactor};
pub use query::is_valid_url;
