//! Rule-driven redaction for payloads on their way into logs and traces.
//!
//! The transport layer of a commerce SDK hands this crate request URLs and
//! request/response bodies right before they are attached to an observability
//! event. The crate replaces sensitive values with a placeholder:
//!
//! - **Rules** ([`RedactionConfig`]): exact dotted paths, exact property names,
//!   property-name substrings, and whitelist paths that override all of them.
//! - **Engine** ([`RedactionEngine`]): `redact` walks JSON-shaped data,
//!   `redact_url` rewrites query parameter values. Both consult the same
//!   path decision, so `items.token` matches `{"items": [{"token": ..}]}` and
//!   `?items[0][token]=..` alike.
//!
//! ```
//! use payload_redaction::RedactionEngine;
//! use serde_json::json;
//!
//! let engine = RedactionEngine::with_default_rules();
//!
//! let body = engine.redact(json!({ "password": "p1", "other": "x" }));
//! assert_eq!(body, json!({ "password": "[REDACTED]", "other": "x" }));
//!
//! let url = engine.redact_url("https://x.test/p?token=abc&keep=1").unwrap();
//! assert_eq!(url, "https://x.test/p?token=REDACTED&keep=1");
//! ```
//!
//! What this crate does not do:
//! - perform I/O or decide what gets logged
//! - redact binary payloads; malformed URLs inside data are left as they are,
//!   with a warning
//!
//! Diagnostics go to an `slog::Logger` attached with
//! [`RedactionEngine::with_logger`]. The [`slog`](crate::slog) module provides
//! `slog::Value` adapters that log the redacted form of a value.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod redaction;
mod rules;
pub mod slog;

pub use error::{RedactionError, Result};
pub use redaction::{is_valid_url, RedactionEngine, RedactionHandling, Redactor};
pub use rules::{
    RedactionConfig, RedactionConfigBuilder, RedactionRule, DEFAULT_JSON_REDACTION_TEXT,
    DEFAULT_URL_REDACTION_TEXT,
};
