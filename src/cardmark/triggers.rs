//! Carousel trigger heuristics
//!
//! Decides from the wording of a user question whether the answering
//! service should be steered toward carousel output. Questions asking for
//! steps, procedures, options, or comparisons suit a card-per-item
//! layout; factual one-liners do not.
//!
//! The builtin patterns are a stable contract with the answering prompt.
//! Deployments can append their own patterns through configuration, see
//! [`TriggerSet::with_extra`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Builtin trigger patterns, matched case-insensitively.
///
/// Each pattern names a question shape that reads better as a carousel:
/// enumerable steps, option lists, and comparisons.
const TRIGGER_PATTERNS: &[&str] = &[
    r"steps?\s+to",
    r"how\s+to",
    r"process\s+for",
    r"procedure\s+to",
    r"what\s+are\s+my\s+options",
    r"types?\s+of",
    r"different\s+kinds",
    r"compare",
    r"difference\s+between",
];

static BUILTIN_TRIGGERS: Lazy<TriggerSet> = Lazy::new(TriggerSet::builtin);

/// A compiled set of carousel trigger patterns
#[derive(Debug, Clone)]
pub struct TriggerSet {
    patterns: Vec<Regex>,
}

impl TriggerSet {
    /// The builtin pattern set
    pub fn builtin() -> Self {
        let patterns = TRIGGER_PATTERNS
            .iter()
            .map(|pattern| compile_insensitive(pattern).unwrap())
            .collect();
        Self { patterns }
    }

    /// The builtin set plus user-configured patterns, each matched
    /// case-insensitively. Fails on the first invalid pattern.
    pub fn with_extra(extra: &[String]) -> Result<Self, regex::Error> {
        let mut set = Self::builtin();
        for pattern in extra {
            set.patterns.push(compile_insensitive(pattern)?);
        }
        Ok(set)
    }

    /// True when the question matches any pattern in the set
    pub fn matches(&self, question: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(question))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){}", pattern))
}

/// True when the question should steer the answer toward carousel output,
/// per the builtin patterns
pub fn should_use_carousel(question: &str) -> bool {
    BUILTIN_TRIGGERS.matches(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_process_questions_trigger() {
        assert!(should_use_carousel("What are the steps to apply for leave?"));
        assert!(should_use_carousel("How to file a complaint?"));
        assert!(should_use_carousel("What is the process for getting promoted?"));
    }

    #[test]
    fn test_option_and_comparison_questions_trigger() {
        assert!(should_use_carousel("What are my options for resolving disputes?"));
        assert!(should_use_carousel("Compare different types of leave"));
        assert!(should_use_carousel("What is the difference between layoff and dismissal?"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(should_use_carousel("HOW TO appeal?"));
        assert!(should_use_carousel("Types OF contracts"));
    }

    #[test]
    fn test_factual_questions_do_not_trigger() {
        assert!(!should_use_carousel("What is the minimum wage?"));
        assert!(!should_use_carousel("When does overtime apply?"));
        assert!(!should_use_carousel("Is lunch break paid?"));
    }

    #[test]
    fn test_builtin_set_size() {
        assert_eq!(TriggerSet::builtin().len(), 9);
    }

    #[test]
    fn test_extra_patterns_extend_the_builtin_set() {
        let set = TriggerSet::with_extra(&[r"checklist\s+for".to_string()]).unwrap();

        assert_eq!(set.len(), 10);
        assert!(set.matches("Do you have a CHECKLIST for onboarding?"));
        assert!(!TriggerSet::builtin().matches("Do you have a checklist for onboarding?"));
    }

    #[test]
    fn test_invalid_extra_pattern_is_rejected() {
        assert!(TriggerSet::with_extra(&["(unclosed".to_string()]).is_err());
    }
}
