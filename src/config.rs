use anyhow::{bail, Context};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Output and logging settings. The rule set itself is fixed and has no
/// configuration surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_show_advice")]
    pub show_advice: bool,
}

fn default_show_advice() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_advice: default_show_advice(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format '{other}' (expected text or json)"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: Some(LoggingConfig {
                level: "info".to_string(),
            }),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {path}"))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {path}"))?;
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {path}"))?;
        Ok(())
    }

    /// Level filter from `logging.level`, `Info` when unset.
    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        match &self.logging {
            Some(logging) => logging
                .level
                .parse::<LevelFilter>()
                .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", logging.level)),
            None => Ok(LevelFilter::Info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_advice);
        assert_eq!(config.log_level().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scam-check.yaml");
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.show_advice = false;
        config.to_file(path).unwrap();

        assert_eq!(Config::from_file(path).unwrap(), config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("logging:\n  level: debug\n").unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);

        let config: Config = serde_yaml::from_str("output:\n  format: json\n").unwrap();
        assert!(config.logging.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_advice);
    }

    #[test]
    fn test_rejects_unknown_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "logging:\n  level: loud\n").unwrap();
        assert!(Config::from_file(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::from_file("/nonexistent/scam-check.yaml").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
