//! URL query redaction.
//!
//! Query keys in bracket notation (`a[b][0][c]`) are mapped onto the same
//! dotted paths used for JSON data, with numeric indices dropped, so a rule
//! for `a.b.c` applies identically to both forms.
//!
//! Only the raw value of a matching `key=value` segment is rewritten; every
//! other byte of the query is kept as it was received.

use std::borrow::Cow;

use slog::{warn, Logger};
use url::{form_urlencoded, Url};

use super::engine::RedactionEngine;
use crate::error::{RedactionError, Result};

/// Returns `true` if `candidate` parses as an absolute URL.
///
/// This is the guard applied before string values inside JSON data are
/// handed to [`RedactionEngine::redact_url`].
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Matches `^-?\d+$`.
fn is_array_index(segment: &str) -> bool {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

pub(crate) fn query_key_to_object_path(key: &str, logger: &Logger) -> String {
    let mut segments = key.split('[');
    let mut path = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        let mut parts = segment.split(']');
        let (Some(name), Some(_), None) = (parts.next(), parts.next(), parts.next()) else {
            warn!(
                logger,
                "malformed bracket segment in URL query key, skipping it";
                "key" => key,
                "segment" => segment
            );
            continue;
        };

        if is_array_index(name) {
            continue;
        }
        path.push('.');
        path.push_str(name);
    }

    path
}

impl RedactionEngine {
    /// Converts a bracket-notation query key into a dotted object path.
    ///
    /// `nested[0][secret]` becomes `nested.secret`. A segment without exactly
    /// one closing bracket is skipped with a warning; the rest of the key is
    /// still converted.
    pub fn query_key_to_object_path(&self, key: &str) -> String {
        query_key_to_object_path(key, &self.logger)
    }

    /// Replaces the values of matching query parameters with the URL
    /// redaction text.
    ///
    /// Scheme, host, path, fragment and all non-matching parameters are kept.
    /// If nothing matched, `url` is returned exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`RedactionError::InvalidUrl`] if `url` is not an absolute URL.
    pub fn redact_url(&self, url: &str) -> Result<String> {
        let mut parsed = Url::parse(url).map_err(|source| RedactionError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let Some(query) = parsed.query() else {
            return Ok(url.to_string());
        };

        let replacement: String =
            form_urlencoded::byte_serialize(self.config().url_redaction_text().as_bytes())
                .collect();
        let mut redacted_any = false;

        let segments: Vec<Cow<'_, str>> = query
            .split('&')
            .map(|segment| {
                let Some((key, _)) = form_urlencoded::parse(segment.as_bytes()).next() else {
                    return Cow::Borrowed(segment);
                };
                if !self.should_redact(&self.query_key_to_object_path(&key)) {
                    return Cow::Borrowed(segment);
                }

                redacted_any = true;
                let raw_key = segment.split_once('=').map_or(segment, |(raw_key, _)| raw_key);
                Cow::Owned(format!("{raw_key}={replacement}"))
            })
            .collect();

        if !redacted_any {
            return Ok(url.to_string());
        }

        let rewritten = segments.join("&");
        parsed.set_query(Some(&rewritten));
        Ok(parsed.into())
    }
}
