//! Decides whether the value at a dotted path must be redacted.
//!
//! Precedence is fixed and short-circuits at the first decisive category:
//!
//! 1. whitelist paths (keep)
//! 2. exact paths (redact)
//! 3. exact leaf property names (redact)
//! 4. leaf property substrings (redact)

use crate::rules::{RedactionConfig, RedactionRule};

impl RedactionRule {
    /// Exact comparison, falling back to a lowercase comparison for
    /// case-insensitive rules.
    pub(crate) fn matches_exactly(&self, candidate: &str) -> bool {
        candidate == self.value()
            || (!self.is_case_sensitive()
                && candidate.to_lowercase() == self.value().to_lowercase())
    }

    /// Substring comparison with the same case handling as
    /// [`RedactionRule::matches_exactly`].
    pub(crate) fn is_contained_in(&self, candidate: &str) -> bool {
        candidate.contains(self.value())
            || (!self.is_case_sensitive()
                && candidate
                    .to_lowercase()
                    .contains(&self.value().to_lowercase()))
    }
}

/// True if any rule in `rules` matches `candidate` exactly.
pub(crate) fn test_redaction_rules(candidate: &str, rules: &[RedactionRule]) -> bool {
    rules.iter().any(|rule| rule.matches_exactly(candidate))
}

/// The final segment of a dotted path, or the whole path if it has no `.`.
pub(crate) fn leaf_property(path: &str) -> &str {
    path.rsplit_once('.').map_or(path, |(_, leaf)| leaf)
}

pub(crate) fn should_redact(config: &RedactionConfig, path: &str) -> bool {
    if test_redaction_rules(path, config.whitelist_paths()) {
        return false;
    }

    if test_redaction_rules(path, config.paths()) {
        return true;
    }

    let leaf = leaf_property(path);
    if test_redaction_rules(leaf, config.properties()) {
        return true;
    }

    config.includes().iter().any(|rule| rule.is_contained_in(leaf))
}
