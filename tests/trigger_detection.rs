//! Unit tests for carousel trigger detection
//!
//! Covers the builtin question patterns one by one, plus the
//! configuration-extended sets.

use cardmark::cardmark::triggers::{should_use_carousel, TriggerSet};
use rstest::rstest;

#[rstest]
#[case("What are the steps to request parental leave?", true)]
#[case("How to calculate severance pay?", true)]
#[case("What is the process for appealing a dismissal?", true)]
#[case("Is there a procedure to update my tax forms?", true)]
#[case("What are my options if my hours are cut?", true)]
#[case("What types of leave can I take?", true)]
#[case("Are there different kinds of employment contracts?", true)]
#[case("Compare hourly and salaried pay", true)]
#[case("What is the difference between termination and layoff?", true)]
#[case("What is the minimum wage?", false)]
#[case("When is my final paycheque due?", false)]
#[case("Is my lunch break paid?", false)]
#[case("Can I refuse unsafe work?", false)]
fn detects_carousel_worthy_questions(#[case] question: &str, #[case] expected: bool) {
    assert_eq!(should_use_carousel(question), expected);
}

#[test]
fn test_matching_ignores_case_and_position() {
    assert!(should_use_carousel("Please explain HOW TO file a claim."));
    assert!(should_use_carousel("STEPS TO take after an injury"));
}

#[test]
fn test_configured_patterns_extend_the_builtin_set() {
    let set = TriggerSet::with_extra(&[r"walk\s+me\s+through".to_string()]).unwrap();

    assert!(set.matches("Walk me through a grievance"));
    assert!(set.matches("How to file a grievance"));
    assert!(!should_use_carousel("Walk me through a grievance"));
}

#[test]
fn test_invalid_configured_pattern_reports_an_error() {
    let result = TriggerSet::with_extra(&["[unterminated".to_string()]);
    assert!(result.is_err());
}
