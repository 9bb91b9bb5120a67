use super::{IndicatorExtractor, Message};
use crate::indicator::{Indicator, IndicatorSet};
use crate::rules::LINK_PATTERN;
use regex::Regex;

/// Detects explicit URLs, bare domains with a path and known shorteners.
pub struct LinkDetector {
    link_regex: &'static Regex,
}

impl Default for LinkDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkDetector {
    pub fn new() -> Self {
        Self {
            link_regex: &LINK_PATTERN,
        }
    }

    /// First link-like match in the text, for diagnostics.
    pub fn first_link<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.link_regex.find(text).map(|m| m.as_str())
    }
}

impl IndicatorExtractor for LinkDetector {
    fn extract(&self, message: &Message<'_>, found: &mut IndicatorSet) {
        // The pattern is case-insensitive, so run it on the original text
        if let Some(link) = self.first_link(message.text) {
            log::debug!("Link-like text detected: {}", link);
            found.insert(Indicator::Link);
        }
    }

    fn name(&self) -> &str {
        "LinkDetector"
    }
}
