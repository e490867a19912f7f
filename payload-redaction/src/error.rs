//! Error types for rule construction, configuration loading and URL redaction.
//!
//! Redaction itself never fails because a value matched a rule: a match is
//! always resolved by substitution. The variants here cover input that cannot
//! be interpreted at all.

use thiserror::Error;

/// Errors produced while building a rule set or redacting a URL.
#[derive(Debug, Error)]
pub enum RedactionError {
    /// The string handed to `redact_url` is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A rule was configured with an empty match value.
    #[error("empty rule value in `{category}`")]
    EmptyRule {
        /// The rule category the empty value was found in.
        category: &'static str,
    },

    /// A replacement text was configured as the empty string.
    #[error("empty redaction text for `{context}`")]
    EmptyRedactionText {
        /// Which replacement text was empty.
        context: &'static str,
    },

    /// A configuration document could not be parsed.
    #[error("invalid redaction config: {0}")]
    Config(#[source] serde_json::Error),

    /// A value could not be converted into its JSON form for redaction.
    #[error("failed to serialize value for redaction: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RedactionError>;
