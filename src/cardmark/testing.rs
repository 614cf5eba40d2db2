//! Testing utilities for card and section assertions
//!
//!     The answer markup is a wire contract with stored answers, so test
//!     content must not drift. Making up answer strings in each test file
//!     invites small mistakes (a two-hyphen separator, a missing closing
//!     fence) that quietly tune the parser to the wrong thing, and when the
//!     contract changes every ad-hoc string has to be hunted down.
//!
//!     This is why parser and classifier tests follow two strict rules:
//!
//!         1. Use verified sample files via
//!            [AnswerSources](super::processor::answer_sources::AnswerSources)
//!            whenever a whole answer is under test. Inline strings are only
//!            for single-rule edge cases that no sample isolates.
//!         2. Use the fluent assertions here ([assert_cards](fn@assert_cards),
//!            [assert_sections](fn@assert_sections)) instead of walking the
//!            result structs by hand. When a field changes shape, only the
//!            assertion implementation needs updating, not every test.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use cardmark::cardmark::testing::assert_cards;
//!
//!     let result = parse_carousel_cards(&content);
//!     assert_cards(&result)
//!         .count(2)
//!         .card(0, |card| {
//!             card.title("Sick Leave").icon("🏥").no_action();
//!         })
//!         .remaining_lacks(":::carousel");
//!     ```

use super::ast::{Card, ParseResult};
use super::sections::{AnswerSection, SectionKind, SectionedAnswer};

/// Create an assertion builder for a carousel parse result
pub fn assert_cards(result: &ParseResult) -> CardsAssertion<'_> {
    CardsAssertion { result }
}

/// Create an assertion builder for a sectioned answer
pub fn assert_sections(answer: &SectionedAnswer) -> SectionsAssertion<'_> {
    SectionsAssertion { answer }
}

pub struct CardsAssertion<'a> {
    result: &'a ParseResult,
}

impl<'a> CardsAssertion<'a> {
    /// Assert the number of extracted cards
    pub fn count(self, expected: usize) -> Self {
        let actual = self.result.cards.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} cards, found {}: [{}]",
            expected,
            actual,
            summarize_cards(&self.result.cards)
        );
        self
    }

    /// Assert on a specific card by index
    pub fn card<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CardAssertion<'a>),
    {
        assert!(
            index < self.result.cards.len(),
            "Card index {} out of bounds (result has {} cards: [{}])",
            index,
            self.result.cards.len(),
            summarize_cards(&self.result.cards)
        );

        assertion(CardAssertion {
            card: &self.result.cards[index],
            context: format!("cards[{}]", index),
        });
        self
    }

    /// Assert the exact remaining content
    pub fn remaining_is(self, expected: &str) -> Self {
        assert_eq!(
            self.result.remaining_content, expected,
            "Remaining content mismatch"
        );
        self
    }

    /// Assert the remaining content contains a substring
    pub fn remaining_contains(self, expected: &str) -> Self {
        assert!(
            self.result.remaining_content.contains(expected),
            "Expected remaining content to contain '{}', got: '{}'",
            expected,
            self.result.remaining_content
        );
        self
    }

    /// Assert the remaining content does NOT contain a substring
    pub fn remaining_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.result.remaining_content.contains(unexpected),
            "Expected remaining content to lack '{}', got: '{}'",
            unexpected,
            self.result.remaining_content
        );
        self
    }
}

pub struct CardAssertion<'a> {
    card: &'a Card,
    context: String,
}

impl<'a> CardAssertion<'a> {
    /// Assert the card title
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.card.title, expected,
            "{}: expected title '{}', found '{}'",
            self.context, expected, self.card.title
        );
        self
    }

    /// Assert the exact card content
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.card.content, expected,
            "{}: expected content '{}', found '{}'",
            self.context, expected, self.card.content
        );
        self
    }

    /// Assert the card content contains a substring
    pub fn content_contains(self, expected: &str) -> Self {
        assert!(
            self.card.content.contains(expected),
            "{}: expected content to contain '{}', got: '{}'",
            self.context,
            expected,
            self.card.content
        );
        self
    }

    /// Assert the card icon
    pub fn icon(self, expected: &str) -> Self {
        assert_eq!(
            self.card.icon.as_deref(),
            Some(expected),
            "{}: expected icon '{}', found {:?}",
            self.context,
            expected,
            self.card.icon
        );
        self
    }

    /// Assert the card has no icon
    pub fn no_icon(self) -> Self {
        assert_eq!(
            self.card.icon, None,
            "{}: expected no icon, found {:?}",
            self.context, self.card.icon
        );
        self
    }

    /// Assert the card action text and url
    pub fn action(self, text: &str, url: &str) -> Self {
        match &self.card.action {
            Some(action) => {
                assert_eq!(
                    action.text, text,
                    "{}: expected action text '{}', found '{}'",
                    self.context, text, action.text
                );
                assert_eq!(
                    action.url, url,
                    "{}: expected action url '{}', found '{}'",
                    self.context, url, action.url
                );
            }
            None => panic!(
                "{}: expected action '{} | {}', found none",
                self.context, text, url
            ),
        }
        self
    }

    /// Assert the card has no action
    pub fn no_action(self) -> Self {
        assert!(
            self.card.action.is_none(),
            "{}: expected no action, found {:?}",
            self.context,
            self.card.action
        );
        self
    }
}

pub struct SectionsAssertion<'a> {
    answer: &'a SectionedAnswer,
}

impl<'a> SectionsAssertion<'a> {
    /// Assert the number of sections
    pub fn count(self, expected: usize) -> Self {
        let actual = self.answer.sections.len();
        assert_eq!(
            actual, expected,
            "Expected {} sections, found {}",
            expected, actual
        );
        self
    }

    /// Assert the exact preamble
    pub fn preamble_is(self, expected: &str) -> Self {
        assert_eq!(self.answer.preamble, expected, "Preamble mismatch");
        self
    }

    /// Assert on a specific section by index
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.answer.sections.len(),
            "Section index {} out of bounds (answer has {} sections)",
            index,
            self.answer.sections.len()
        );

        assertion(SectionAssertion {
            section: &self.answer.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a AnswerSection,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    /// Assert the section kind
    pub fn kind(self, expected: SectionKind) -> Self {
        assert_eq!(
            self.section.kind, expected,
            "{}: expected kind {:?}, found {:?}",
            self.context, expected, self.section.kind
        );
        self
    }

    /// Assert the exact section body
    pub fn body_is(self, expected: &str) -> Self {
        assert_eq!(
            self.section.body, expected,
            "{}: body mismatch",
            self.context
        );
        self
    }

    /// Assert the section body contains a substring
    pub fn body_contains(self, expected: &str) -> Self {
        assert!(
            self.section.body.contains(expected),
            "{}: expected body to contain '{}', got: '{}'",
            self.context,
            expected,
            self.section.body
        );
        self
    }

    /// Assert the section carried `[Found: Yes]`
    pub fn found_yes(self) -> Self {
        assert_eq!(
            self.section.found,
            Some(true),
            "{}: expected [Found: Yes], found {:?}",
            self.context,
            self.section.found
        );
        self
    }

    /// Assert the section carried `[Found: No]`
    pub fn found_no(self) -> Self {
        assert_eq!(
            self.section.found,
            Some(false),
            "{}: expected [Found: No], found {:?}",
            self.context,
            self.section.found
        );
        self
    }

    /// Assert the section carried no found marker at all
    pub fn no_found_marker(self) -> Self {
        assert_eq!(
            self.section.found, None,
            "{}: expected no found marker, found {:?}",
            self.context, self.section.found
        );
        self
    }
}

fn summarize_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
