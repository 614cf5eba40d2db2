//! Citation link building
//!
//! Turns the source documents that grounded an answer into citations the
//! rendering surface can link to. PDF sources deep-link to the cited
//! page with a `#page=` fragment; web sources deep-link to the cited
//! passage with a `#:~:text=` text fragment built from the first words
//! of the retrieved content.

use serde::{Deserialize, Serialize};

/// Number of leading words quoted into a text fragment
const TEXT_FRAGMENT_WORDS: usize = 20;

/// A document retrieved to ground an answer. `page` is empty for
/// non-PDF sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub content: String,
}

/// A rendered citation: the plain source link plus a deep link into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub original_url: String,
    pub fragment_url: String,
    pub title: String,
}

/// Builds the citation for one source document
pub fn citation_for(doc: &SourceDocument) -> Citation {
    Citation {
        original_url: doc.source.clone(),
        fragment_url: fragment_url(&doc.source, &doc.page, &doc.content),
        title: doc.title.clone(),
    }
}

/// Deep link into `source`: the page anchor when a page is known, a
/// text fragment from the leading content words otherwise, the bare
/// source when neither is available
pub fn fragment_url(source: &str, page: &str, content: &str) -> String {
    if !page.is_empty() {
        return format!("{}#page={}", source, page);
    }
    if !content.is_empty() {
        let snippet = leading_words(content, TEXT_FRAGMENT_WORDS);
        return format!("{}#:~:text={}", source, urlencoding::encode(&snippet));
    }
    source.to_string()
}

/// First `count` space-separated words. Splits on single spaces so runs
/// of spaces survive a round trip, matching the stored-answer contract.
fn leading_words(content: &str, count: usize) -> String {
    content.split(' ').take(count).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(source: &str, page: &str, content: &str) -> SourceDocument {
        SourceDocument {
            source: source.to_string(),
            title: "Employment Standards".to_string(),
            page: page.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_pdf_sources_link_to_the_page() {
        let citation = citation_for(&doc("https://example.com/esa.pdf", "12", "ignored"));

        assert_eq!(citation.original_url, "https://example.com/esa.pdf");
        assert_eq!(citation.fragment_url, "https://example.com/esa.pdf#page=12");
        assert_eq!(citation.title, "Employment Standards");
    }

    #[test]
    fn test_web_sources_link_to_a_text_fragment() {
        let citation = citation_for(&doc("https://example.com/wages", "", "paid sick days"));

        assert_eq!(
            citation.fragment_url,
            "https://example.com/wages#:~:text=paid%20sick%20days"
        );
    }

    #[test]
    fn test_text_fragment_stops_at_twenty_words() {
        let content = (1..=25)
            .map(|n| format!("w{}", n))
            .collect::<Vec<_>>()
            .join(" ");
        let url = fragment_url("https://example.com/a", "", &content);

        let expected = (1..=20)
            .map(|n| format!("w{}", n))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(
            url,
            format!("https://example.com/a#:~:text={}", urlencoding::encode(&expected))
        );
        assert!(!url.contains("w21"));
    }

    #[test]
    fn test_space_runs_survive_word_counting() {
        assert_eq!(leading_words("a  b", 20), "a  b");
        assert_eq!(leading_words("a  b c", 3), "a  b");
    }

    #[test]
    fn test_bare_source_when_nothing_to_anchor() {
        assert_eq!(
            fragment_url("https://example.com/page", "", ""),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_citation_wire_names() {
        let citation = citation_for(&doc("https://example.com/esa.pdf", "3", ""));
        let json = serde_json::to_string(&citation).unwrap();

        assert!(json.contains("\"originalUrl\""));
        assert!(json.contains("\"fragmentUrl\""));
    }
}
