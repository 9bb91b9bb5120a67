pub mod link_analyzer;
pub mod numeric_sequence;
pub mod term_matcher;

use crate::indicator::IndicatorSet;
use crate::rules::trim_message;

/// A message prepared for indicator extraction.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    /// Trimmed text in its original case.
    pub text: &'a str,
    pub lowered: String,
}

impl<'a> Message<'a> {
    pub fn new(raw: &'a str) -> Self {
        let text = trim_message(raw);
        Self {
            text,
            lowered: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub trait IndicatorExtractor: Send + Sync {
    fn extract(&self, message: &Message<'_>, found: &mut IndicatorSet);
    fn name(&self) -> &str;
}

pub struct IndicatorEngine {
    extractors: Vec<Box<dyn IndicatorExtractor>>,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(term_matcher::TermMatcher::new()),
                Box::new(link_analyzer::LinkDetector::new()),
                Box::new(numeric_sequence::NumericSequenceDetector::new()),
            ],
        }
    }

    pub fn analyze(&self, message: &Message<'_>) -> IndicatorSet {
        let mut found = IndicatorSet::new();

        for extractor in &self.extractors {
            let before = found.len();
            extractor.extract(message, &mut found);
            if found.len() > before {
                log::debug!(
                    "{} added {} indicator(s)",
                    extractor.name(),
                    found.len() - before
                );
            }
        }

        found
    }

    #[cfg(test)]
    pub(crate) fn extractor_names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}
