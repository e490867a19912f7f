//! Adapters for attaching redacted payloads to `slog` events.
//!
//! This module connects a [`Redactor`] with `slog` by providing `slog::Value`
//! implementations whose logged representation is always the redacted form:
//! JSON payloads are emitted as nested structured values, URLs as strings.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the redactor output,
//!   not from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings, and URLs that cannot be parsed are emitted as given.
//!
//! It does not configure `slog` or decide what gets logged.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::Redactor;

/// Placeholder logged when a value can't be converted to JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize redacted value";

/// A `slog::Value` that emits an owned redacted payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via
/// `slog`'s nested-value support.
#[derive(Clone, Debug)]
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The redacted payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their redacted form as JSON.
///
/// ## Example
/// ```ignore
/// use payload_redaction::slog::IntoRedactedJson;
///
/// info!(logger, "response"; "body" => body.into_redacted_json(&*redactor));
/// ```
pub trait IntoRedactedJson: Serialize + Sized {
    /// Serializes `self`, redacts it with `redactor` and wraps the result.
    ///
    /// If `self` can't be converted into a `serde_json::Value`, the returned
    /// value holds the string [`SERIALIZATION_FAILED`] instead.
    fn into_redacted_json(self, redactor: &dyn Redactor) -> RedactedJson {
        let json_value = match serde_json::to_value(&self) {
            Ok(value) => redactor.redact(value),
            Err(_) => JsonValue::String(SERIALIZATION_FAILED.to_string()),
        };
        RedactedJson::new(json_value)
    }
}

impl<T> IntoRedactedJson for T where T: Serialize {}

/// A `slog::Value` that emits a URL with its query redacted.
#[derive(Clone, Debug)]
pub struct RedactedUrl {
    url: String,
}

impl RedactedUrl {
    /// The URL that will be logged.
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl SlogValue for RedactedUrl {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.url)
    }
}

/// Converts URL strings into a `slog::Value` that logs their redacted form.
pub trait IntoRedactedUrl: AsRef<str> + Sized {
    /// Redacts the query of `self` with `redactor`.
    ///
    /// A string that is not an absolute URL has no query to redact and is
    /// logged unchanged.
    fn into_redacted_url(self, redactor: &dyn Redactor) -> RedactedUrl {
        let url = self.as_ref();
        let url = redactor
            .redact_url(url)
            .unwrap_or_else(|_| url.to_string());
        RedactedUrl { url }
    }
}

impl<T> IntoRedactedUrl for T where T: AsRef<str> {}
