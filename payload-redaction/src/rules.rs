//! Rule data: what to match and what to substitute.
//!
//! A [`RedactionConfig`] is immutable once built. Rule categories are plain
//! lists; the order in which they are consulted is fixed by the matcher, not
//! by the configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RedactionError, Result};

/// Default replacement for values redacted inside structured data.
pub const DEFAULT_JSON_REDACTION_TEXT: &str = "[REDACTED]";

/// Default replacement for redacted URL query parameter values.
pub const DEFAULT_URL_REDACTION_TEXT: &str = "REDACTED";

/// Property names redacted at any depth by [`RedactionConfig::default_rules`].
const DEFAULT_PROPERTIES: &[&str] = &[
    "token",
    "accessToken",
    "apiToken",
    "previewToken",
    "apiKey",
    "apiSecret",
    "clientId",
    "clientSecret",
    "secret",
    "metaData",
];

/// Substrings that redact any property name containing them by default.
const DEFAULT_INCLUDES: &[&str] = &["password"];

/// A single match criterion.
///
/// `value` is compared exactly for path and property rules and as a substring
/// for includes rules. Comparison ignores case unless the rule was created with
/// [`RedactionRule::case_sensitive`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionRule {
    value: String,
    #[serde(default)]
    case_sensitive: bool,
}

impl RedactionRule {
    /// Creates a case-insensitive rule.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            case_sensitive: false,
        }
    }

    /// Creates a rule that only matches with identical casing.
    #[must_use]
    pub fn case_sensitive(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            case_sensitive: true,
        }
    }

    /// The literal this rule matches.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether comparison respects case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl From<&str> for RedactionRule {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RedactionRule {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// The rule set consumed by [`crate::RedactionEngine`].
///
/// Build one with [`RedactionConfig::builder`], load one with
/// [`RedactionConfig::from_json`], or start from
/// [`RedactionConfig::default_rules`]. `RedactionConfig::default()` has no
/// rules at all and only carries the default redaction texts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConfigDocument")]
pub struct RedactionConfig {
    paths: Vec<RedactionRule>,
    properties: Vec<RedactionRule>,
    whitelist_paths: Vec<RedactionRule>,
    includes: Vec<RedactionRule>,
    json_redaction_text: String,
    url_redaction_text: String,
}

impl RedactionConfig {
    /// Starts an empty builder.
    pub fn builder() -> RedactionConfigBuilder {
        RedactionConfigBuilder::default()
    }

    /// The SDK's built-in rules: any property containing `password`, plus the
    /// usual credential property names, all case-insensitive.
    #[must_use]
    pub fn default_rules() -> Self {
        Self {
            properties: DEFAULT_PROPERTIES.iter().copied().map(RedactionRule::new).collect(),
            includes: DEFAULT_INCLUDES.iter().copied().map(RedactionRule::new).collect(),
            ..Self::default()
        }
    }

    /// Parses a configuration document in the SDK's camelCase JSON shape.
    ///
    /// Every key is optional. Rule values must be non-empty.
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(RedactionError::Config)
    }

    /// Returns a builder pre-populated with this configuration.
    pub fn to_builder(&self) -> RedactionConfigBuilder {
        RedactionConfigBuilder {
            paths: self.paths.clone(),
            properties: self.properties.clone(),
            whitelist_paths: self.whitelist_paths.clone(),
            includes: self.includes.clone(),
            json_redaction_text: Some(self.json_redaction_text.clone()),
            url_redaction_text: Some(self.url_redaction_text.clone()),
        }
    }

    /// Exact dotted-path rules.
    pub fn paths(&self) -> &[RedactionRule] {
        &self.paths
    }

    /// Exact leaf property-name rules.
    pub fn properties(&self) -> &[RedactionRule] {
        &self.properties
    }

    /// Dotted paths that are never redacted.
    pub fn whitelist_paths(&self) -> &[RedactionRule] {
        &self.whitelist_paths
    }

    /// Substring rules applied to the leaf property name.
    pub fn includes(&self) -> &[RedactionRule] {
        &self.includes
    }

    /// Replacement used inside structured data.
    pub fn json_redaction_text(&self) -> &str {
        &self.json_redaction_text
    }

    /// Replacement used for URL query parameter values.
    pub fn url_redaction_text(&self) -> &str {
        &self.url_redaction_text
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            properties: Vec::new(),
            whitelist_paths: Vec::new(),
            includes: Vec::new(),
            json_redaction_text: DEFAULT_JSON_REDACTION_TEXT.to_string(),
            url_redaction_text: DEFAULT_URL_REDACTION_TEXT.to_string(),
        }
    }
}

/// Collects rules and validates them into a [`RedactionConfig`].
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct RedactionConfigBuilder {
    paths: Vec<RedactionRule>,
    properties: Vec<RedactionRule>,
    whitelist_paths: Vec<RedactionRule>,
    includes: Vec<RedactionRule>,
    json_redaction_text: Option<String>,
    url_redaction_text: Option<String>,
}

impl RedactionConfigBuilder {
    /// Redacts the value at exactly this dotted path, e.g. `account.users.token`.
    pub fn path(mut self, rule: impl Into<RedactionRule>) -> Self {
        self.paths.push(rule.into());
        self
    }

    /// Redacts any property with exactly this name, at any depth.
    pub fn property(mut self, rule: impl Into<RedactionRule>) -> Self {
        self.properties.push(rule.into());
        self
    }

    /// Redacts any property whose name contains this substring.
    pub fn include(mut self, rule: impl Into<RedactionRule>) -> Self {
        self.includes.push(rule.into());
        self
    }

    /// Keeps the value at exactly this dotted path, overriding every other rule.
    pub fn whitelist_path(mut self, rule: impl Into<RedactionRule>) -> Self {
        self.whitelist_paths.push(rule.into());
        self
    }

    /// Overrides the structured-data replacement text.
    pub fn json_redaction_text(mut self, text: impl Into<String>) -> Self {
        self.json_redaction_text = Some(text.into());
        self
    }

    /// Overrides the URL query replacement text.
    pub fn url_redaction_text(mut self, text: impl Into<String>) -> Self {
        self.url_redaction_text = Some(text.into());
        self
    }

    /// Validates the collected rules.
    ///
    /// Fails if any rule value or replacement text is empty.
    pub fn build(self) -> Result<RedactionConfig> {
        for (category, rules) in [
            ("paths", &self.paths),
            ("properties", &self.properties),
            ("whitelistPaths", &self.whitelist_paths),
            ("includes", &self.includes),
        ] {
            if rules.iter().any(|rule| rule.value.is_empty()) {
                return Err(RedactionError::EmptyRule { category });
            }
        }

        let json_redaction_text = non_empty_text(
            self.json_redaction_text,
            DEFAULT_JSON_REDACTION_TEXT,
            "jsonRedactionText",
        )?;
        let url_redaction_text = non_empty_text(
            self.url_redaction_text,
            DEFAULT_URL_REDACTION_TEXT,
            "urlRedactionText",
        )?;

        Ok(RedactionConfig {
            paths: self.paths,
            properties: self.properties,
            whitelist_paths: self.whitelist_paths,
            includes: self.includes,
            json_redaction_text,
            url_redaction_text,
        })
    }
}

fn non_empty_text(
    text: Option<String>,
    default: &str,
    context: &'static str,
) -> Result<String> {
    match text {
        None => Ok(default.to_string()),
        Some(text) if text.is_empty() => Err(RedactionError::EmptyRedactionText { context }),
        Some(text) => Ok(text),
    }
}

/// Wire shape of a configuration document; every key is optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    #[serde(default)]
    paths: Vec<RedactionRule>,
    #[serde(default)]
    properties: Vec<RedactionRule>,
    #[serde(default)]
    whitelist_paths: Vec<RedactionRule>,
    #[serde(default)]
    includes: Vec<RedactionRule>,
    json_redaction_text: Option<String>,
    url_redaction_text: Option<String>,
}

impl TryFrom<ConfigDocument> for RedactionConfig {
    type Error = RedactionError;

    fn try_from(document: ConfigDocument) -> Result<Self> {
        RedactionConfigBuilder {
            paths: document.paths,
            properties: document.properties,
            whitelist_paths: document.whitelist_paths,
            includes: document.includes,
            json_redaction_text: document.json_redaction_text,
            url_redaction_text: document.url_redaction_text,
        }
        .build()
    }
}
