//! Node types are checked twice: for casing and for singularity. The two
//! checks are independent, so one type can fail both.

use crate::conventions::{check_camel_case, check_singularity_with, Conformance};
use crate::inflection::Inflector;

pub const CAMEL_CASE_NAME: &str = "node-camel-case";

pub const CAMEL_CASE_DESCRIPTION: &str = "Node types must be upper camel case (BestFriend)";

pub const SINGULAR_NAME: &str = "node-singular";

pub const SINGULAR_DESCRIPTION: &str = "Node types must be singular nouns (Person, not People)";

#[must_use]
pub fn check_camel(name: &str) -> Conformance {
    check_camel_case(name)
}

#[must_use]
pub fn check_singular(name: &str, inflector: &Inflector) -> Conformance {
    check_singularity_with(name, inflector)
}

#[must_use]
pub fn camel_case_message(name: &str, expected: &str) -> String {
    format!("Node type {name} is not camel case. Suggestion: {expected}")
}

#[must_use]
pub fn singular_message(name: &str, expected: &str) -> String {
    format!("Node type {name} is not singular. Suggestion: {expected}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_type_fails_camel_only() {
        let inflector = Inflector::default();
        assert_eq!(check_camel("person").suggestion, "Person");
        assert!(check_singular("person", &inflector).is_conformant);
    }

    #[test]
    fn plural_lowercase_fails_both() {
        let inflector = Inflector::default();
        let camel = check_camel("people");
        let singular = check_singular("people", &inflector);
        assert!(!camel.is_conformant);
        assert!(!singular.is_conformant);
        assert_eq!(
            camel_case_message("people", &camel.suggestion),
            "Node type people is not camel case. Suggestion: People"
        );
        assert_eq!(
            singular_message("people", &singular.suggestion),
            "Node type people is not singular. Suggestion: person"
        );
    }

    #[test]
    fn conventional_type_passes() {
        let inflector = Inflector::default();
        assert!(check_camel("Organization").is_conformant);
        assert!(check_singular("Organization", &inflector).is_conformant);
    }
}
