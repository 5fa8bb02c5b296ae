use crate::conventions::{check_lower_dash_case, Conformance};

pub const NAME: &str = "pipeline-lower-dash-case";

pub const DESCRIPTION: &str = "Pipeline names must be lower dash case (load-people)";

#[must_use]
pub fn check(name: &str) -> Conformance {
    check_lower_dash_case(name)
}

#[must_use]
pub fn message(name: &str, expected: &str) -> String {
    format!("Pipeline {name} is not lower dash case. Suggestion: {expected}")
}
