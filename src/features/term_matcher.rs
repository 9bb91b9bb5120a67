use super::{IndicatorExtractor, Message};
use crate::indicator::{Indicator, IndicatorSet};
use crate::rules::SUSPICIOUS_TERMS;

/// Reports every suspicious term contained in the lowercased message.
///
/// Containment is plain substring search, so short terms such as `pin` also
/// fire inside longer words.
pub struct TermMatcher {
    terms: &'static [&'static str],
}

impl Default for TermMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TermMatcher {
    pub fn new() -> Self {
        Self {
            terms: SUSPICIOUS_TERMS,
        }
    }
}

impl IndicatorExtractor for TermMatcher {
    fn extract(&self, message: &Message<'_>, found: &mut IndicatorSet) {
        for &term in self.terms {
            if message.lowered.contains(term) {
                found.insert(Indicator::Term(term));
            }
        }
    }

    fn name(&self) -> &str {
        "TermMatcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms_in(text: &str) -> Vec<&'static str> {
        let mut found = IndicatorSet::new();
        TermMatcher::new().extract(&Message::new(text), &mut found);
        found.labels()
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(terms_in("CONGRATULATIONS"), vec!["congratulations"]);
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(terms_in("spinning"), vec!["pin"]);
        assert_eq!(terms_in("showing"), vec!["win"]);
    }

    #[test]
    fn test_overlapping_terms_all_reported() {
        assert_eq!(
            terms_in("you are a winner"),
            vec!["win", "winner"]
        );
        assert_eq!(
            terms_in("Scan QR to claim"),
            vec!["scan", "qr", "scan qr"]
        );
    }

    #[test]
    fn test_repeated_term_reported_once() {
        assert_eq!(terms_in("bank bank BANK"), vec!["bank"]);
    }

    #[test]
    fn test_plain_text_has_no_terms() {
        assert!(terms_in("See you at lunch tomorrow").is_empty());
    }
}
