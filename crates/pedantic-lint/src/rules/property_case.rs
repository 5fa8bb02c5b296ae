use crate::conventions::{check_snake_case, Case, Conformance};

pub const NAME: &str = "property-snake-case";

pub const DESCRIPTION: &str = "Property names must be lower snake case (name_of_person)";

#[must_use]
pub fn check(name: &str) -> Conformance {
    check_snake_case(name, Case::Lower)
}

#[must_use]
pub fn message(name: &str, expected: &str) -> String {
    format!("Property {name} is not snake case. Suggestion: {expected}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_property_fails() {
        let result = check("nameOfPerson");
        assert!(!result.is_conformant);
        assert_eq!(
            message("nameOfPerson", &result.suggestion),
            "Property nameOfPerson is not snake case. Suggestion: name_of_person"
        );
    }

    #[test]
    fn snake_property_passes() {
        assert!(check("since").is_conformant);
        assert!(check("created_at").is_conformant);
    }
}
