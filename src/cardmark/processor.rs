//! File processing API for the cardmark answer format
//!
//! This module provides an extensible API for processing answer files with
//! different stages (classify, cards, sections) and formats (simple, json,
//! yaml).
//!
//! # Sample Sources
//!
//! The `answer_sources` module provides access to verified answer sample
//! files for testing. These samples are the only canonical sources for
//! answer content and should be used instead of copying content to ensure
//! tests use the latest format contract.
//!
//! ## Example Usage
//!
//! ```rust
//! use cardmark::cardmark::processor::answer_sources::AnswerSources;
//!
//! // Get raw string content
//! let content = AnswerSources::get_string("000-plain-text.answer").unwrap();
//!
//! // Get extracted cards as JSON
//! let cards = AnswerSources::get_cards("020-carousel-steps.answer").unwrap();
//!
//! // Get processed content in simple format
//! let processed =
//!     AnswerSources::get_processed("020-carousel-steps.answer", "cards-simple").unwrap();
//! ```

use crate::cardmark::ast::{ContentType, ParseResult};
use crate::cardmark::carousel::parse_carousel_cards;
use crate::cardmark::classifier::detect_content_type;
use crate::cardmark::sections::{split_sections, SectionedAnswer};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Classify,
    Cards,
    Sections,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "cards-json" or "classify-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "classify" => ProcessingStage::Classify,
            "cards" => ProcessingStage::Cards,
            "sections" => ProcessingStage::Sections,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1..].join("-"))),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let stages = [
            ProcessingStage::Classify,
            ProcessingStage::Cards,
            ProcessingStage::Sections,
        ];
        let formats = [OutputFormat::Simple, OutputFormat::Json, OutputFormat::Yaml];

        let mut specs = Vec::with_capacity(stages.len() * formats.len());
        for stage in &stages {
            for format in &formats {
                specs.push(ProcessingSpec {
                    stage: stage.clone(),
                    format: format.clone(),
                });
            }
        }
        specs
    }

    /// The format string this spec parses from
    pub fn to_format_string(&self) -> String {
        format!(
            "{}-{}",
            match self.stage {
                ProcessingStage::Classify => "classify",
                ProcessingStage::Cards => "cards",
                ProcessingStage::Sections => "sections",
            },
            match self.format {
                OutputFormat::Simple => "simple",
                OutputFormat::Json => "json",
                OutputFormat::Yaml => "yaml",
            }
        )
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Classification output as it crosses the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifiedView {
    content_type: ContentType,
}

/// Process an answer string according to the given specification
pub fn process_str(content: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Classify => {
            let view = ClassifiedView {
                content_type: detect_content_type(content),
            };
            match spec.format {
                OutputFormat::Simple => Ok(view.content_type.as_str().to_string()),
                OutputFormat::Json => to_json(&view),
                OutputFormat::Yaml => to_yaml(&view),
            }
        }
        ProcessingStage::Cards => {
            let result = parse_carousel_cards(content);
            match spec.format {
                OutputFormat::Simple => Ok(format_cards(&result)),
                OutputFormat::Json => to_json(&result),
                OutputFormat::Yaml => to_yaml(&result),
            }
        }
        ProcessingStage::Sections => {
            let answer = split_sections(content);
            match spec.format {
                OutputFormat::Simple => Ok(format_sections(&answer)),
                OutputFormat::Json => to_json(&answer),
                OutputFormat::Yaml => to_yaml(&answer),
            }
        }
    }
}

/// Process an answer file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_str(&content, spec)
}

/// Format extracted cards in the simple inspection format, one field per
/// line, `<end>` closing each card
fn format_cards(result: &ParseResult) -> String {
    let mut out = String::new();
    for card in &result.cards {
        out.push_str(&format!("<card:{}>\n", card.title));
        out.push_str(&format!("<content:{}>\n", card.content));
        if let Some(icon) = &card.icon {
            out.push_str(&format!("<icon:{}>\n", icon));
        }
        if let Some(action) = &card.action {
            out.push_str(&format!("<action:{}|{}>\n", action.text, action.url));
        }
        out.push_str("<end>\n");
    }
    out
}

/// Format a sectioned answer in the simple inspection format, structure
/// only, bodies omitted
fn format_sections(answer: &SectionedAnswer) -> String {
    let mut out = String::new();
    if !answer.preamble.is_empty() {
        out.push_str("<preamble>\n");
    }
    for section in &answer.sections {
        match section.found {
            Some(found) => out.push_str(&format!(
                "<section:{}:found={}>\n",
                section.kind,
                if found { "yes" } else { "no" }
            )),
            None => out.push_str(&format!("<section:{}>\n", section.kind)),
        }
    }
    out
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::IoError(e.to_string()))
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_yaml::to_string(value).map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_format_string())
        .collect()
}

/// Sample sources module for accessing verified answer test files
pub mod answer_sources {
    use super::*;

    /// The current format version - change this when the contract updates
    pub const SPEC_VERSION: &str = "v1";

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-plain-text.answer",
        "010-bullet-list.answer",
        "020-carousel-steps.answer",
        "030-carousel-options.answer",
        "040-mixed-carousel-list.answer",
        "050-sectioned-answer.answer",
        "060-carousel-skip-invalid.answer",
        "070-unterminated-carousel.answer",
    ];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw string content
        String,
        /// Extracted cards as JSON
        Cards,
        /// Processed content using the specified format string
        Processed(String),
    }

    /// Main interface for accessing answer sample files
    pub struct AnswerSources;

    impl AnswerSources {
        /// Get the path to the samples directory
        fn samples_dir() -> String {
            format!("docs/specs/{}/samples", SPEC_VERSION)
        }

        /// Get the full path to a sample file
        fn sample_path(filename: &str) -> String {
            format!("{}/{}", Self::samples_dir(), filename)
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content in the specified format
        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::sample_path(filename);

            match format {
                SampleFormat::String => fs::read_to_string(&path).map_err(|e| {
                    ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                }),
                SampleFormat::Cards => {
                    let content = fs::read_to_string(&path).map_err(|e| {
                        ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                    })?;

                    let result = parse_carousel_cards(&content);
                    serde_json::to_string_pretty(&result).map_err(|e| {
                        ProcessingError::IoError(format!("Failed to serialize cards: {}", e))
                    })
                }
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    process_file(&path, &spec)
                }
            }
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        /// Get sample content as extracted cards (JSON format)
        pub fn get_cards(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Cards)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }

        /// Get sample metadata
        pub fn get_sample_info(filename: &str) -> Result<SampleInfo, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::sample_path(filename);
            let content = fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))?;

            Ok(SampleInfo {
                filename: filename.to_string(),
                spec_version: SPEC_VERSION.to_string(),
                line_count: content.lines().count(),
                char_count: content.len(),
                content_type: detect_content_type(&content),
            })
        }
    }

    /// Information about a sample file
    #[derive(Debug, Clone, PartialEq)]
    pub struct SampleInfo {
        pub filename: String,
        pub spec_version: String,
        pub line_count: usize,
        pub char_count: usize,
        /// Tag the classifier assigns to the sample's content
        pub content_type: ContentType,
    }

}
