//! The redaction engine and the capability it implements.
//!
//! - [`Redactor`]: the two-operation contract collaborators depend on
//! - [`RedactionEngine`]: the built-in, rule-driven implementation
//! - [`RedactionHandling`]: picks between built-in rules and a caller-supplied
//!   [`Redactor`]

use std::{fmt, sync::Arc};

use serde::Serialize;
use serde_json::Value;
use slog::{o, Discard, Logger};

use super::matcher;
use crate::{
    error::{RedactionError, Result},
    rules::RedactionConfig,
};

// =============================================================================
// Redactor - the capability collaborators depend on
// =============================================================================

/// Scrubs sensitive values out of payloads and URLs before they are logged.
///
/// [`RedactionEngine`] is the built-in implementation. Implement this trait to
/// replace it entirely, then hand it over through
/// [`RedactionHandling::Custom`].
pub trait Redactor: Send + Sync {
    /// Recursively redacts a JSON-shaped value.
    #[must_use]
    fn redact(&self, data: Value) -> Value;

    /// Redacts the query string of an absolute URL.
    fn redact_url(&self, url: &str) -> Result<String>;
}

// =============================================================================
// RedactionEngine - rule-driven implementation
// =============================================================================

/// Rule-driven [`Redactor`].
///
/// The engine holds an immutable [`RedactionConfig`] and keeps no per-call
/// state, so one instance can be shared across threads. Build a new engine to
/// change rules.
#[derive(Clone)]
pub struct RedactionEngine {
    config: RedactionConfig,
    pub(crate) logger: Logger,
}

impl RedactionEngine {
    /// Creates an engine over `config` that discards its diagnostics.
    #[must_use]
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            config,
            logger: Logger::root(Discard, o!()),
        }
    }

    /// Creates an engine over [`RedactionConfig::default_rules`].
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(RedactionConfig::default_rules())
    }

    /// Sends diagnostics (warnings about input that could not be redacted) to
    /// `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.new(o!("component" => "redaction"));
        self
    }

    /// The rules this engine applies.
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Whether the value at dotted `path` must be replaced.
    ///
    /// Whitelist paths win over everything; after that an exact path match, an
    /// exact leaf property match, or a leaf substring match redacts.
    pub fn should_redact(&self, path: &str) -> bool {
        matcher::should_redact(&self.config, path)
    }

    /// Redacts `data` and returns it.
    ///
    /// Matching scalars become the JSON redaction text. Strings that are
    /// absolute URLs and don't match have their query redacted instead. A bare
    /// scalar at the root is returned unchanged, since it has no property name
    /// to match.
    #[must_use]
    pub fn redact(&self, mut data: Value) -> Value {
        self.redact_in_place(&mut data);
        data
    }

    /// Redacts `data` without taking ownership of it.
    pub fn redact_in_place(&self, data: &mut Value) {
        self.redact_at(data, "");
    }

    /// Serializes `value` to JSON and redacts the result.
    ///
    /// # Errors
    ///
    /// Returns [`RedactionError::Serialize`] if `value` can't be represented
    /// as JSON (for example a map with non-string keys).
    pub fn redact_serializable<T>(&self, value: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_value(value).map_err(RedactionError::Serialize)?;
        Ok(self.redact(data))
    }
}

impl Redactor for RedactionEngine {
    fn redact(&self, data: Value) -> Value {
        RedactionEngine::redact(self, data)
    }

    fn redact_url(&self, url: &str) -> Result<String> {
        RedactionEngine::redact_url(self, url)
    }
}

impl fmt::Debug for RedactionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactionEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RedactionHandling - built-in rules or a caller-supplied Redactor
// =============================================================================

/// How an SDK configuration wants redaction done.
#[derive(Clone)]
pub enum RedactionHandling {
    /// Build a [`RedactionEngine`] from these rules.
    Rules(RedactionConfig),
    /// Use the caller's implementation as-is.
    Custom(Arc<dyn Redactor>),
}

impl RedactionHandling {
    /// Resolves to the redactor collaborators should call.
    ///
    /// `logger` is attached only when a built-in engine is created.
    pub fn into_redactor(self, logger: &Logger) -> Arc<dyn Redactor> {
        match self {
            RedactionHandling::Rules(config) => {
                Arc::new(RedactionEngine::new(config).with_logger(logger.clone()))
            }
            RedactionHandling::Custom(redactor) => redactor,
        }
    }
}

impl Default for RedactionHandling {
    fn default() -> Self {
        Self::Rules(RedactionConfig::default_rules())
    }
}

impl From<RedactionConfig> for RedactionHandling {
    fn from(config: RedactionConfig) -> Self {
        Self::Rules(config)
    }
}

impl From<Arc<dyn Redactor>> for RedactionHandling {
    fn from(redactor: Arc<dyn Redactor>) -> Self {
        Self::Custom(redactor)
    }
}

impl fmt::Debug for RedactionHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedactionHandling::Rules(config) => f.debug_tuple("Rules").field(config).finish(),
            RedactionHandling::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
