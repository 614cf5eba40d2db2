//! Answer content model
//!
//! The types produced by classification and carousel parsing. An answer
//! string is tagged with a [`ContentType`] deciding how the rendering
//! surface lays it out, and a carousel-bearing answer yields a list of
//! [`Card`]s plus the text left over once the block is removed.
//!
//! A card is written in the answer as a small record of `key: value`
//! lines:
//!
//!     :::carousel
//!     card: Step 1: Document the Issue
//!     content: Keep detailed records of the incident.
//!     icon: 📝
//!     action: Learn More | https://example.com/complaint-process
//!     ---
//!     card: Step 2: Report Internally
//!     content: Raise the issue with your supervisor or HR.
//!     :::
//!
//! Only `card:` is required; everything else degrades by omission.
//!
//! Learn More:
//! - Verified sample answers: docs/specs/v1/samples/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering mode chosen for one answer string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// The answer carries a well-formed carousel block
    Carousel,
    /// The answer carries dash list lines (rendered as a table/list)
    Table,
    /// Plain prose, no recognized structure
    Text,
    /// Both a carousel block and list lines outside or inside it
    Mixed,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Carousel => "carousel",
            ContentType::Table => "table",
            ContentType::Text => "text",
            ContentType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Call-to-action link attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    pub text: String,
    pub url: String,
}

impl CardAction {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// One slide of a carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Required; a record without a title is dropped by the parser
    pub title: String,
    /// Body text, may be empty
    #[serde(default)]
    pub content: String,
    /// Optional glyph shown on the card face
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Optional call-to-action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CardAction>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            icon: None,
            action: None,
        }
    }

    /// Preferred builder
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_action(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.action = Some(CardAction::new(text, url));
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card('{}')", self.title)
    }
}

/// Outcome of extracting the first carousel block from an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Cards in the order their records appear in the block
    pub cards: Vec<Card>,
    /// The answer with the block removed and trimmed; with no block
    /// found this is the input byte for byte
    pub remaining_content: String,
}

impl ParseResult {
    /// Result for an answer with no recognizable carousel block: the
    /// input passes through unchanged
    pub fn untouched(content: &str) -> Self {
        Self {
            cards: Vec::new(),
            remaining_content: content.to_string(),
        }
    }
}
