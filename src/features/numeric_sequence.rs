use super::{IndicatorExtractor, Message};
use crate::indicator::{Indicator, IndicatorSet};
use crate::rules::NUMERIC_SEQUENCE_PATTERN;

/// Flags 4-8 digit runs that look like one-time codes or account numbers.
pub struct NumericSequenceDetector;

impl Default for NumericSequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericSequenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl IndicatorExtractor for NumericSequenceDetector {
    fn extract(&self, message: &Message<'_>, found: &mut IndicatorSet) {
        if NUMERIC_SEQUENCE_PATTERN.is_match(message.text) {
            found.insert(Indicator::NumericSequence);
        }
    }

    fn name(&self) -> &str {
        "NumericSequenceDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detects(text: &str) -> bool {
        let mut found = IndicatorSet::new();
        NumericSequenceDetector::new().extract(&Message::new(text), &mut found);
        found.contains(&Indicator::NumericSequence)
    }

    #[test]
    fn test_otp_lengths() {
        assert!(detects("Your code is 4821"));
        assert!(detects("Account 12345678 debited"));
        assert!(!detects("Room 101"));
        assert!(!detects("Card 1234567890123456"));
    }

    #[test]
    fn test_multiple_runs_counted_once() {
        let mut found = IndicatorSet::new();
        NumericSequenceDetector::new().extract(&Message::new("1111 2222 3333"), &mut found);
        assert_eq!(found.len(), 1);
    }
}
