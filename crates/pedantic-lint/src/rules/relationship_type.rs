use crate::conventions::{check_snake_case, Case, Conformance};

pub const NAME: &str = "relationship-upper-snake-case";

pub const DESCRIPTION: &str = "Relationship types must be upper snake case (BEST_FRIEND_OF)";

#[must_use]
pub fn check(name: &str) -> Conformance {
    check_snake_case(name, Case::Upper)
}

#[must_use]
pub fn message(name: &str, expected: &str) -> String {
    format!("Relationship type {name} is not upper snake case. Suggestion: {expected}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_snake_fails() {
        let result = check("best_friend_of");
        assert!(!result.is_conformant);
        assert_eq!(result.suggestion, "BEST_FRIEND_OF");
        assert_eq!(
            message("best_friend_of", &result.suggestion),
            "Relationship type best_friend_of is not upper snake case. Suggestion: BEST_FRIEND_OF"
        );
    }

    #[test]
    fn upper_snake_passes() {
        assert!(check("HAS_EMPLOYEE").is_conformant);
        assert!(check("KNOWS").is_conformant);
    }

    #[test]
    fn camel_case_is_split() {
        assert_eq!(check("hasEmployee").suggestion, "HAS_EMPLOYEE");
    }
}
