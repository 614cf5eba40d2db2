//! Sectioned answer splitting
//!
//! The answering service is instructed to reply in two labelled parts: a
//! `**public-doc**:` section grounded in public documents, then a
//! `**company-doc**:` section grounded in the employer's own documents.
//! Each section is supposed to end with a `[Found: Yes]` or `[Found: No]`
//! marker saying whether its sources held an answer.
//!
//!     **public-doc**:
//!     Employees are entitled to 3 paid sick days per year.
//!     [Found: Yes]
//!     **company-doc**:
//!     Your handbook does not cover sick leave.
//!     [Found: No]
//!
//! Splitting never fails. Headers count only at line starts; text before
//! the first header becomes the preamble; an answer with no headers at
//! all passes through as preamble unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static FOUND_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[Found:\s*(Yes|No)\]").unwrap());

/// Which document pool a section was answered from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    PublicDoc,
    CompanyDoc,
}

impl SectionKind {
    /// The literal header opening a section of this kind
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::PublicDoc => "**public-doc**:",
            SectionKind::CompanyDoc => "**company-doc**:",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::PublicDoc => "public-doc",
            SectionKind::CompanyDoc => "company-doc",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One labelled part of a sectioned answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSection {
    pub kind: SectionKind,
    /// Section text with the header and `[Found: ...]` marker removed,
    /// trimmed
    pub body: String,
    /// `Some(true)` for `[Found: Yes]`, `Some(false)` for `[Found: No]`,
    /// `None` when the marker is missing
    pub found: Option<bool>,
}

/// A whole answer split at its section headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionedAnswer {
    /// Text before the first header; the whole answer, unchanged, when
    /// there are no headers
    pub preamble: String,
    pub sections: Vec<AnswerSection>,
}

impl SectionedAnswer {
    /// First public-doc section, if any
    pub fn public_doc(&self) -> Option<&AnswerSection> {
        self.section_of(&SectionKind::PublicDoc)
    }

    /// First company-doc section, if any
    pub fn company_doc(&self) -> Option<&AnswerSection> {
        self.section_of(&SectionKind::CompanyDoc)
    }

    fn section_of(&self, kind: &SectionKind) -> Option<&AnswerSection> {
        self.sections.iter().find(|section| section.kind == *kind)
    }
}

/// Splits an answer at its `**public-doc**:` / `**company-doc**:`
/// headers. Total; see the module docs for the degrade rules.
pub fn split_sections(content: &str) -> SectionedAnswer {
    let headers = find_headers(content);

    let first = match headers.first() {
        Some(first) => first,
        None => {
            return SectionedAnswer {
                preamble: content.to_string(),
                sections: Vec::new(),
            }
        }
    };

    let preamble = content[..first.0].trim().to_string();
    let mut sections = Vec::with_capacity(headers.len());

    for (index, (start, kind)) in headers.iter().enumerate() {
        let body_start = start + kind.marker().len();
        let body_end = headers
            .get(index + 1)
            .map(|(next, _)| *next)
            .unwrap_or(content.len());
        let (body, found) = extract_found(&content[body_start..body_end]);
        sections.push(AnswerSection {
            kind: kind.clone(),
            body,
            found,
        });
    }

    SectionedAnswer { preamble, sections }
}

/// Positions of section headers sitting at line starts, in order
fn find_headers(content: &str) -> Vec<(usize, SectionKind)> {
    let mut headers = Vec::new();
    for kind in [SectionKind::PublicDoc, SectionKind::CompanyDoc] {
        for (pos, _) in content.match_indices(kind.marker()) {
            if pos == 0 || content.as_bytes()[pos - 1] == b'\n' {
                headers.push((pos, kind.clone()));
            }
        }
    }
    headers.sort_by_key(|(pos, _)| *pos);
    headers
}

/// Strips the first `[Found: Yes|No]` marker out of a section body and
/// reports what it said
fn extract_found(raw: &str) -> (String, Option<bool>) {
    match FOUND_MARKER.captures(raw) {
        Some(captures) => {
            let marker = captures.get(0).unwrap();
            let found = &captures[1] == "Yes";
            let mut body = String::with_capacity(raw.len() - marker.len());
            body.push_str(&raw[..marker.start()]);
            body.push_str(&raw[marker.end()..]);
            (body.trim().to_string(), Some(found))
        }
        None => (raw.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONED: &str = "**public-doc**:\nEmployees are entitled to 3 paid sick days per year.\n[Found: Yes]\n**company-doc**:\nYour handbook does not cover sick leave.\n[Found: No]";

    #[test]
    fn test_splits_public_and_company_sections() {
        let answer = split_sections(SECTIONED);

        assert_eq!(answer.preamble, "");
        assert_eq!(answer.sections.len(), 2);

        let public = answer.public_doc().unwrap();
        assert_eq!(
            public.body,
            "Employees are entitled to 3 paid sick days per year."
        );
        assert_eq!(public.found, Some(true));

        let company = answer.company_doc().unwrap();
        assert_eq!(company.body, "Your handbook does not cover sick leave.");
        assert_eq!(company.found, Some(false));
    }

    #[test]
    fn test_no_headers_passes_through_as_preamble() {
        let input = "  Just a plain answer.  ";
        let answer = split_sections(input);

        assert!(answer.sections.is_empty());
        assert_eq!(answer.preamble, input);
    }

    #[test]
    fn test_preamble_before_first_header_is_kept() {
        let input = "Here is what I found.\n**public-doc**:\nBody.\n[Found: Yes]";
        let answer = split_sections(input);

        assert_eq!(answer.preamble, "Here is what I found.");
        assert_eq!(answer.sections.len(), 1);
    }

    #[test]
    fn test_header_not_at_line_start_is_ignored() {
        let input = "inline **public-doc**: mention only";
        let answer = split_sections(input);

        assert!(answer.sections.is_empty());
        assert_eq!(answer.preamble, input);
    }

    #[test]
    fn test_missing_found_marker_leaves_body_alone() {
        let input = "**company-doc**:\nNo marker in this one.";
        let answer = split_sections(input);

        let company = answer.company_doc().unwrap();
        assert_eq!(company.found, None);
        assert_eq!(company.body, "No marker in this one.");
    }

    #[test]
    fn test_repeated_kind_keeps_both_in_order() {
        let input = "**public-doc**:\nFirst.\n**public-doc**:\nSecond.";
        let answer = split_sections(input);

        assert_eq!(answer.sections.len(), 2);
        assert_eq!(answer.sections[0].body, "First.");
        assert_eq!(answer.sections[1].body, "Second.");
        assert_eq!(answer.public_doc().unwrap().body, "First.");
    }

    #[test]
    fn test_section_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SectionKind::PublicDoc).unwrap();
        assert_eq!(json, "\"public-doc\"");
    }

    #[test]
    fn test_found_marker_tolerates_inner_spacing() {
        let (body, found) = extract_found("Body text. [Found:  Yes]");
        assert_eq!(found, Some(true));
        assert_eq!(body, "Body text.");
    }
}
