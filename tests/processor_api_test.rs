//! Unit tests for the cardmark processor API

use std::fs;
use cardmark::cardmark::processor::answer_sources::AnswerSources;
use cardmark::cardmark::processor::{
    process_file, process_str, OutputFormat, ProcessingError, ProcessingSpec, ProcessingStage,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_spec_parsing() {
        // Test valid specs
        let spec = ProcessingSpec::from_string("cards-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Cards);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("cards-json").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Cards);
        assert_eq!(spec.format, OutputFormat::Json);

        // Test invalid specs
        assert!(ProcessingSpec::from_string("cards").is_err());
        assert!(ProcessingSpec::from_string("cards-invalid").is_err());
        assert!(ProcessingSpec::from_string("invalid-simple").is_err());
    }

    #[test]
    fn test_available_specs() {
        let specs = ProcessingSpec::available_specs();
        assert_eq!(specs.len(), 9);

        let cards_simple = specs
            .iter()
            .find(|s| s.stage == ProcessingStage::Cards && s.format == OutputFormat::Simple);
        assert!(cards_simple.is_some());

        let sections_yaml = specs
            .iter()
            .find(|s| s.stage == ProcessingStage::Sections && s.format == OutputFormat::Yaml);
        assert!(sections_yaml.is_some());
    }

    #[test]
    fn test_cards_simple_processing() {
        let processed =
            AnswerSources::get_processed("030-carousel-options.answer", "cards-simple").unwrap();

        insta::assert_snapshot!(processed, @r###"
<card:Sick Leave>
<content:Up to 3 unpaid, job-protected days per year for personal illness or injury.>
<icon:🏥>
<end>
<card:Vacation Leave>
<content:Two weeks of paid vacation after each completed year of employment.>
<icon:🏖️>
<end>
<card:Parental Leave>
<content:Up to 63 weeks of job-protected leave for new parents, shared between partners.>
<icon:👶>
<end>
"###);
    }

    #[test]
    fn test_cards_json_processing() {
        let processed =
            AnswerSources::get_processed("030-carousel-options.answer", "cards-json").unwrap();

        assert!(processed.starts_with('{'));
        assert!(processed.ends_with('}'));
        assert!(processed.contains("\"title\": \"Sick Leave\""));
        assert!(processed.contains("\"icon\": \"🏖️\""));
        assert!(processed.contains("\"remainingContent\": \"You have several leave options available:\""));
    }

    #[test]
    fn test_sections_simple_processing() {
        let processed =
            AnswerSources::get_processed("050-sectioned-answer.answer", "sections-simple").unwrap();

        assert_eq!(
            processed,
            "<section:public-doc:found=yes>\n<section:company-doc:found=no>\n"
        );
    }

    #[test]
    fn test_classify_processing() {
        let spec = ProcessingSpec::from_string("classify-simple").unwrap();
        assert_eq!(process_str("Just a plain answer.", &spec).unwrap(), "text");

        let spec = ProcessingSpec::from_string("classify-json").unwrap();
        let result = process_str("- first\n- second", &spec).unwrap();
        assert!(result.contains("\"contentType\": \"table\""));
    }

    #[test]
    fn test_file_processing() {
        // Create a temporary test file
        let test_content = "Quick intro:\n\n:::carousel\ncard: First\ncontent: One.\n---\ncard: Second\ncontent: Two.\n:::";
        let test_file = "test_api.answer";

        fs::write(test_file, test_content).unwrap();

        // Test cards-json processing
        let spec = ProcessingSpec::from_string("cards-json").unwrap();
        let result = process_file(test_file, &spec).unwrap();

        assert!(result.contains("\"title\": \"First\""));
        assert!(result.contains("\"title\": \"Second\""));
        assert!(result.contains("\"remainingContent\": \"Quick intro:\""));

        // Test classify-simple processing
        let spec = ProcessingSpec::from_string("classify-simple").unwrap();
        let result = process_file(test_file, &spec).unwrap();

        assert_eq!(result, "carousel");

        // Clean up
        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_file_not_found_error() {
        let spec = ProcessingSpec::from_string("cards-simple").unwrap();
        let result = process_file("nonexistent.answer", &spec);

        assert!(result.is_err());
        match result.unwrap_err() {
            ProcessingError::IoError(_) => {} // Expected
            _ => panic!("Expected IoError"),
        }
    }

    #[test]
    fn test_unknown_stage_error() {
        let result = ProcessingSpec::from_string("tokenize-simple");
        assert!(result.is_err());
        match result.unwrap_err() {
            ProcessingError::InvalidStage(_) => {} // Expected
            _ => panic!("Expected InvalidStage error"),
        }
    }

    #[test]
    fn test_unknown_format_error() {
        let result = ProcessingSpec::from_string("cards-xml");
        assert!(result.is_err());
        match result.unwrap_err() {
            ProcessingError::InvalidFormatType(_) => {} // Expected
            _ => panic!("Expected InvalidFormatType error"),
        }
    }
}
