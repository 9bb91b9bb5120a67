use serde::{Serialize, Serializer};
use std::fmt;

use crate::rules::{LINK_INDICATOR, NUMERIC_SEQUENCE_INDICATOR};

/// A discrete signal explaining why a message was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// A suspicious term found in the message, reported verbatim.
    Term(&'static str),
    Link,
    NumericSequence,
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Term(term) => term,
            Indicator::Link => LINK_INDICATOR,
            Indicator::NumericSequence => NUMERIC_SEQUENCE_INDICATOR,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Indicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Indicators in detection order, each reported once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndicatorSet {
    items: Vec<Indicator>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an indicator, returning false if it was already present.
    pub fn insert(&mut self, indicator: Indicator) -> bool {
        if self.contains_label(indicator.as_str()) {
            return false;
        }
        self.items.push(indicator);
        true
    }

    /// Membership is keyed by the reported label, not the variant.
    pub fn contains_label(&self, label: &str) -> bool {
        self.items.iter().any(|i| i.as_str() == label)
    }

    pub fn contains(&self, indicator: &Indicator) -> bool {
        self.contains_label(indicator.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.items.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.items.iter().map(Indicator::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a IndicatorSet {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = IndicatorSet::new();
        assert!(set.insert(Indicator::Term("otp")));
        assert!(set.insert(Indicator::Link));
        assert!(!set.insert(Indicator::Term("otp")));
        assert!(!set.insert(Indicator::Link));
        assert_eq!(set.len(), 2);
        assert_eq!(set.labels(), vec!["otp", "contains link/URL"]);
    }

    #[test]
    fn test_serializes_as_label_list() {
        let mut set = IndicatorSet::new();
        set.insert(Indicator::Term("bank"));
        set.insert(Indicator::NumericSequence);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"["bank","numeric sequence (possible OTP/account)"]"#
        );
    }
}
