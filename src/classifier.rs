use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use crate::features::{IndicatorEngine, Message};
use crate::indicator::IndicatorSet;
use crate::rules::URGENCY_PHRASES;

static ENGINE: Lazy<IndicatorEngine> = Lazy::new(IndicatorEngine::new);

const UNSAFE_MIN_SCORE: usize = 3;
const SUSPICIOUS_SCORE: usize = 2;
const UNSAFE_BASE_CONFIDENCE: usize = 55;
const UNSAFE_STEP: usize = 12;
const SUSPICIOUS_CONFIDENCE: u8 = 60;
const SAFE_BASE_CONFIDENCE: usize = 85;
const SAFE_STEP: usize = 8;
const SAFE_MIN_CONFIDENCE: usize = 50;
pub const MAX_CONFIDENCE: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    /// Nothing to classify after trimming.
    #[serde(rename = "empty")]
    Empty,
    Safe,
    Suspicious,
    Unsafe,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Empty => "empty",
            Label::Safe => "Safe",
            Label::Suspicious => "Suspicious",
            Label::Unsafe => "Unsafe",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    label: Label,
    confidence: u8,
    triggered_indicators: IndicatorSet,
}

impl ClassificationResult {
    pub fn empty() -> Self {
        Self {
            label: Label::Empty,
            confidence: 0,
            triggered_indicators: IndicatorSet::new(),
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Percentage in `[0, 95]`; not a calibrated probability.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn triggered_indicators(&self) -> &IndicatorSet {
        &self.triggered_indicators
    }
}

/// Maps a score to its label and confidence. First matching band wins.
pub fn threshold(score: usize) -> (Label, u8) {
    if score >= UNSAFE_MIN_SCORE {
        let confidence = UNSAFE_BASE_CONFIDENCE
            .saturating_add(score.saturating_mul(UNSAFE_STEP))
            .min(MAX_CONFIDENCE as usize);
        (Label::Unsafe, confidence as u8)
    } else if score == SUSPICIOUS_SCORE {
        (Label::Suspicious, SUSPICIOUS_CONFIDENCE)
    } else {
        let confidence = SAFE_BASE_CONFIDENCE
            .saturating_sub(score * SAFE_STEP)
            .max(SAFE_MIN_CONFIDENCE);
        (Label::Safe, confidence as u8)
    }
}

/// Number of urgency phrases present. These stack on top of the indicator
/// count even when the same words were also reported as term indicators.
pub fn urgency_boost(lowered: &str) -> usize {
    URGENCY_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .count()
}

pub struct Classifier<'e> {
    engine: &'e IndicatorEngine,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self { engine: &ENGINE }
    }
}

impl<'e> Classifier<'e> {
    #[cfg(test)]
    pub(crate) fn with_engine(engine: &'e IndicatorEngine) -> Self {
        Self { engine }
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let message = Message::new(text);
        if message.is_empty() {
            return ClassificationResult::empty();
        }

        let triggered_indicators = self.engine.analyze(&message);
        let boost = urgency_boost(&message.lowered);
        let score = triggered_indicators.len() + boost;
        let (label, confidence) = threshold(score);

        log::debug!(
            "Classified message: {} indicator(s), urgency +{}, score {} -> {} {}%",
            triggered_indicators.len(),
            boost,
            score,
            label,
            confidence
        );

        ClassificationResult {
            label,
            confidence,
            triggered_indicators,
        }
    }
}

/// Classifies a message with the built-in rule set.
pub fn classify(text: &str) -> ClassificationResult {
    Classifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bands() {
        assert_eq!(threshold(0), (Label::Safe, 85));
        assert_eq!(threshold(1), (Label::Safe, 77));
        assert_eq!(threshold(2), (Label::Suspicious, 60));
        assert_eq!(threshold(3), (Label::Unsafe, 91));
        assert_eq!(threshold(4), (Label::Unsafe, 95));
        assert_eq!(threshold(40), (Label::Unsafe, 95));
        assert_eq!(threshold(usize::MAX), (Label::Unsafe, 95));
    }

    #[test]
    fn test_unsafe_confidence_non_decreasing() {
        let mut previous = 0;
        for score in UNSAFE_MIN_SCORE..60 {
            let (label, confidence) = threshold(score);
            assert_eq!(label, Label::Unsafe);
            assert!(confidence >= previous);
            assert!(confidence <= MAX_CONFIDENCE);
            previous = confidence;
        }
    }

    #[test]
    fn test_urgency_boost_counts_each_phrase_once() {
        assert_eq!(urgency_boost("hello"), 0);
        assert_eq!(urgency_boost("urgent urgent urgent"), 1);
        assert_eq!(urgency_boost("urgent: act immediately or be blocked"), 3);
    }

    #[test]
    fn test_urgency_stacks_on_term_indicators() {
        // "urgent" is both a term indicator and an urgency phrase
        let result = classify("urgent");
        assert_eq!(result.triggered_indicators().labels(), vec!["urgent"]);
        assert_eq!(result.label(), Label::Suspicious);
        assert_eq!(result.confidence(), 60);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(classify("   \n\t"), ClassificationResult::empty());
    }

    #[test]
    fn test_custom_engine() {
        let engine = IndicatorEngine::new();
        let classifier = Classifier::with_engine(&engine);
        assert_eq!(classifier.classify("Your OTP is 482913"), classify("Your OTP is 482913"));
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::Empty).unwrap(), "\"empty\"");
        assert_eq!(serde_json::to_string(&Label::Unsafe).unwrap(), "\"Unsafe\"");
    }
}
