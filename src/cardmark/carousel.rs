//! Carousel block extraction
//!
//! Pulls the first `:::carousel ... :::` block out of an answer and turns
//! its `---`-separated records into [`Card`](super::ast::Card)s. The text
//! around the block is handed back as `remaining_content` so the caller
//! can still render it.
//!
//! Parsing never fails. An answer without a block passes through
//! unchanged, malformed records are dropped, malformed fields are
//! omitted. The block grammar is a stable contract with stored answers,
//! so the delimiters and keys here are matched literally.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{Card, CardAction, ParseResult};

/// Shortest span from `:::carousel` to the next closing fence, across lines.
/// An opener with no later fence matches nothing.
pub(crate) static CAROUSEL_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s):::carousel.*?:::").unwrap());

const OPEN_FENCE: &str = ":::carousel";
const CLOSE_FENCE: &str = ":::";

/// Extracts the first carousel block from `content`.
///
/// With no block present the input is returned unchanged, not even
/// trimmed. With a block present the block is removed, the leftover text
/// is trimmed, and each record carrying a `card:` line becomes one card,
/// in order. Later blocks stay in `remaining_content`.
pub fn parse_carousel_cards(content: &str) -> ParseResult {
    let block = match CAROUSEL_BLOCK.find(content) {
        Some(block) => block,
        None => return ParseResult::untouched(content),
    };

    let interior = &content[block.start() + OPEN_FENCE.len()..block.end() - CLOSE_FENCE.len()];
    let cards = parse_records(interior);

    let mut remaining = String::with_capacity(content.len() - block.len());
    remaining.push_str(&content[..block.start()]);
    remaining.push_str(&content[block.end()..]);

    ParseResult {
        cards,
        remaining_content: remaining.trim().to_string(),
    }
}

/// Splits the block interior on separator lines and parses each record.
/// Records without a usable title are skipped.
fn parse_records(interior: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut record_lines: Vec<&str> = Vec::new();

    for line in interior.lines() {
        if is_separator_line(line) {
            if let Some(card) = parse_record(&record_lines) {
                cards.push(card);
            }
            record_lines.clear();
        } else {
            record_lines.push(line);
        }
    }
    if let Some(card) = parse_record(&record_lines) {
        cards.push(card);
    }

    cards
}

/// A separator is a line of three or more hyphens standing alone,
/// surrounding whitespace allowed
fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// Parses one record's lines into a card. Lines have the form
/// `key: value`, split on the first colon; unknown keys and lines
/// without a colon are ignored; repeated keys keep the last value.
fn parse_record(lines: &[&str]) -> Option<Card> {
    let mut title: Option<String> = None;
    let mut content = String::new();
    let mut icon: Option<String> = None;
    let mut action: Option<CardAction> = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once(':') {
            Some(split) => split,
            None => continue,
        };
        let value = value.trim();

        match key.trim() {
            "card" => {
                if !value.is_empty() {
                    title = Some(value.to_string());
                }
            }
            "content" => content = value.to_string(),
            "icon" => {
                if !value.is_empty() {
                    icon = Some(value.to_string());
                }
            }
            "action" => action = parse_action(value),
            _ => {}
        }
    }

    let title = title?;
    Some(Card {
        title,
        content,
        icon,
        action,
    })
}

/// `action: <text> | <url>` with both sides non-empty after trimming;
/// anything else is omitted
fn parse_action(value: &str) -> Option<CardAction> {
    let (text, url) = value.split_once('|')?;
    let text = text.trim();
    let url = url.trim();
    if text.is_empty() || url.is_empty() {
        return None;
    }
    Some(CardAction::new(text, url))
}
