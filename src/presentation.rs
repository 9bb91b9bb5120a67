use serde::Serialize;
use std::fmt::Write as _;

use crate::classifier::{ClassificationResult, Label};

pub const EMPTY_PROMPT: &str = "⚠️ Please paste a message to check.";
pub const INDICATORS_HEADING: &str = "Detected indicators:";
pub const ADVICE: &str =
    "Advice: Do not click links or share OTP/passwords. Verify using official channels.";
pub const NO_INDICATORS_NOTE: &str =
    "No obvious scam indicators found. Still be cautious and verify the sender if unsure.";

/// Visual treatment of a result. Suspicious and unsafe results share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Prompt,
    Safe,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub tone: Tone,
    pub headline: String,
    pub tags: Vec<String>,
    /// Advisory when indicators fired, reassurance otherwise, none for the prompt.
    pub note: Option<&'static str>,
}

impl ResultView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let confidence = result.confidence();
        let (tone, headline) = match result.label() {
            Label::Empty => {
                return Self {
                    tone: Tone::Prompt,
                    headline: EMPTY_PROMPT.to_string(),
                    tags: Vec::new(),
                    note: None,
                }
            }
            Label::Unsafe => (Tone::Warning, format!("🚨 UNSAFE {confidence}%")),
            Label::Suspicious => (Tone::Warning, format!("⚠️ SUSPICIOUS {confidence}%")),
            Label::Safe => (Tone::Safe, format!("✅ SAFE {confidence}%")),
        };

        let tags: Vec<String> = result
            .triggered_indicators()
            .iter()
            .map(|i| i.to_string())
            .collect();
        let note = if tags.is_empty() {
            NO_INDICATORS_NOTE
        } else {
            ADVICE
        };

        Self {
            tone,
            headline,
            tags,
            note: Some(note),
        }
    }

    pub fn render_text(&self, show_advice: bool) -> String {
        let mut out = String::new();
        out.push_str(&self.headline);
        out.push('\n');

        if !self.tags.is_empty() {
            let _ = writeln!(out, "{INDICATORS_HEADING}");
            for tag in &self.tags {
                let _ = writeln!(out, "  • {tag}");
            }
        }

        match self.note {
            Some(ADVICE) if !show_advice => {}
            Some(note) => {
                let _ = writeln!(out, "{note}");
            }
            None => {}
        }

        out
    }
}
