//! Answer format classification
//!
//! Tags one answer string with the [`ContentType`] the rendering surface
//! should use. Two independent signals are read off the whole string and
//! combined:
//!
//! - a well-formed `:::carousel ... :::` block (an unterminated opener
//!   does not count),
//! - a dash list line, any line whose trimmed form starts with `- `.
//!
//! Both present is `Mixed`, carousel alone is `Carousel`, list lines
//! alone are `Table`, neither is `Text`. The list scan deliberately runs
//! over block interiors too, so a raw dash line inside a carousel still
//! flips the answer to `Mixed`.

use super::ast::ContentType;
use super::carousel::CAROUSEL_BLOCK;

/// Classifies an answer string. Total and pure, every input maps to a tag.
pub fn detect_content_type(content: &str) -> ContentType {
    match (has_carousel_block(content), has_list_line(content)) {
        (true, true) => ContentType::Mixed,
        (true, false) => ContentType::Carousel,
        (false, true) => ContentType::Table,
        (false, false) => ContentType::Text,
    }
}

/// True when the string contains `:::carousel` with a later closing fence
pub fn has_carousel_block(content: &str) -> bool {
    CAROUSEL_BLOCK.is_match(content)
}

/// True when some line, trimmed, starts with the two characters `- `
pub fn has_list_line(content: &str) -> bool {
    content.lines().any(|line| line.trim().starts_with("- "))
}
