//! Built-in safety clause rules.

use super::registry::ClauseRegistry;
use super::types::ClauseRule;

/// Create the clause registry used for yoga knowledge records.
///
/// Rules apply in this order:
///
/// ```text
/// contraindication   Contraindication: / Contraindications:
/// precaution         Precaution: / Precautions:
/// avoid_if           Avoid if ...
/// not_recommended    Not recommended for ...
/// ```
#[must_use]
pub fn create_safety_clause_registry() -> ClauseRegistry {
    let mut registry = ClauseRegistry::new();

    for rule in [
        ClauseRule::new("contraindication", r"Contraindications?:\s*"),
        ClauseRule::new("precaution", r"Precautions?:\s*"),
        ClauseRule::new("avoid_if", r"Avoid if "),
        ClauseRule::new("not_recommended", r"Not recommended for "),
    ] {
        #[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
        registry.register(rule).expect("valid clause pattern");
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_safety_clause_registry_order() {
        let registry = create_safety_clause_registry();

        assert_eq!(
            registry.labels(),
            vec!["contraindication", "precaution", "avoid_if", "not_recommended"]
        );
    }

    #[test]
    fn test_builtin_rules_match_singular_and_plural() {
        let registry = create_safety_clause_registry();
        let mut rules = registry.rules();

        let contraindication = rules.next().unwrap();
        let regex = &contraindication.regex;
        assert!(regex.is_match("Contraindication: glaucoma."));
        assert!(regex.is_match("contraindications: glaucoma."));

        let precaution = rules.next().unwrap();
        assert!(precaution.regex.is_match("PRECAUTION: go slowly."));
        assert!(precaution.regex.is_match("Precautions: go slowly."));
    }
}
