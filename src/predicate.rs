//! Entry predicates built from command-line patterns

use std::borrow::Cow;

use glob::Pattern;
use regex::Regex;
use serde_json::Value;

use crate::tree::Visit;

/// Accepts entries whose key matches a glob and whose value matches a regex.
///
/// Unset criteria accept everything. The value regex only applies to string
/// and number leaves; containers and other leaves never match it.
#[derive(Debug, Clone, Default)]
pub struct EntryPredicate {
    key: Option<Pattern>,
    value: Option<Regex>,
}

impl EntryPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the key to match `pattern`. Invalid patterns are rejected.
    pub fn with_key_glob(mut self, pattern: &str) -> Result<Self, glob::PatternError> {
        self.key = Some(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Require the leaf value to match `pattern`.
    pub fn with_value_regex(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.value = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn matches(&self, visit: &Visit<'_>) -> bool {
        if let Some(ref key) = self.key {
            if !key.matches(visit.key) {
                return false;
            }
        }
        if let Some(ref regex) = self.value {
            let text = match visit.value.as_leaf() {
                Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
                Some(Value::Number(n)) => Cow::Owned(n.to_string()),
                _ => return false,
            };
            if !regex.is_match(&text) {
                return false;
            }
        }
        true
    }
}
