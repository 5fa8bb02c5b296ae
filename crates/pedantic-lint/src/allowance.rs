//! Name allow lists.
//!
//! A rule's `allow` patterns (and `[audit] exclude_scopes`) are glob
//! patterns matched against the whole name, e.g. `"legacy_*"` or
//! `"ID"`.

use glob::{Pattern, PatternError};

#[derive(Debug, Clone, Default)]
pub struct Allowance {
    patterns: Vec<Pattern>,
}

impl Allowance {
    /// Compiles `patterns`; the first invalid pattern is returned with its error.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, (String, PatternError)> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| (p.to_string(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_allowed(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
