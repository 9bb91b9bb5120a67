pub mod classifier;
pub mod config;
pub mod features;
pub mod indicator;
pub mod presentation;
pub mod rules;
pub mod session;

pub use classifier::{classify, ClassificationResult, Classifier, Label};
pub use config::{Config, OutputFormat};
pub use indicator::{Indicator, IndicatorSet};
pub use presentation::{ResultView, Tone};
pub use session::{Session, View};
