//! Recursive redaction of JSON-shaped data.
//!
//! Objects extend the path with their key. Arrays do not: every element of an
//! array is matched against the array's own path, so `items.token` addresses
//! the `token` field of every element of `items`.

use serde_json::Value;
use slog::warn;

use super::engine::RedactionEngine;

impl RedactionEngine {
    /// Redacts `value` in place, treating `path` as its location.
    ///
    /// An empty path means `value` is the root of the document.
    pub(crate) fn redact_at(&self, value: &mut Value, path: &str) {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    if path.is_empty() {
                        self.redact_at(child, key);
                    } else {
                        self.redact_at(child, &format!("{path}.{key}"));
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.redact_at(item, path);
                }
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                self.redact_scalar(value, path);
            }
            Value::Null => {}
        }
    }

    fn redact_scalar(&self, value: &mut Value, path: &str) {
        if path.is_empty() {
            warn!(
                self.logger,
                "value passed to redact is a bare scalar, only objects and arrays can be redacted";
                "kind" => json_kind(value)
            );
            return;
        }

        if self.should_redact(path) {
            *value = Value::String(self.config().json_redaction_text().to_string());
            return;
        }

        if let Value::String(text) = value {
            if !super::query::is_valid_url(text) {
                return;
            }
            match self.redact_url(text) {
                Ok(redacted) => *text = redacted,
                Err(err) => warn!(
                    self.logger,
                    "left URL-like value unredacted";
                    "path" => path,
                    "error" => %err
                ),
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
