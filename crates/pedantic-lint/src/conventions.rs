//! Naming-convention predicates.
//!
//! Each check normalizes a name into its conventional form and reports
//! whether the input already was that form. All checks accept any string.

use crate::inflection::{self, Inflector};
use serde::Serialize;

/// Outcome of a convention check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conformance {
    pub is_conformant: bool,
    pub suggestion: String,
}

impl Conformance {
    fn compare(name: &str, suggestion: String) -> Self {
        Self {
            is_conformant: name == suggestion,
            suggestion,
        }
    }
}

/// Letter case of the snake-case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

/// `"something-else"` → `"SomethingElse"`.
#[must_use]
pub fn check_camel_case(name: &str) -> Conformance {
    let suggestion: String = name
        .replace('-', " ")
        .split_whitespace()
        .map(inflection::camelize)
        .collect();
    Conformance::compare(name, suggestion)
}

/// `"posts"` → `"post"`, using the built-in English tables.
#[must_use]
pub fn check_singularity(name: &str) -> Conformance {
    check_singularity_with(name, Inflector::english())
}

#[must_use]
pub fn check_singularity_with(name: &str, inflector: &Inflector) -> Conformance {
    Conformance::compare(name, inflector.singularize(name))
}

/// `"lower_snake_case"` → `"lower-snake-case"`.
#[must_use]
pub fn check_lower_dash_case(name: &str) -> Conformance {
    let suggestion = name
        .split_whitespace()
        .map(|section| inflection::dasherize(section).to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
    Conformance::compare(name, suggestion)
}

/// `"camelCase"` → `"camel_case"`, or `"CAMEL_CASE"` with [`Case::Upper`].
#[must_use]
pub fn check_snake_case(name: &str, case: Case) -> Conformance {
    let suggestion = name
        .split_whitespace()
        .map(inflection::underscore)
        .collect::<Vec<_>>()
        .join("_");
    let suggestion = match case {
        Case::Lower => suggestion,
        Case::Upper => suggestion.to_uppercase(),
    };
    Conformance::compare(name, suggestion)
}
