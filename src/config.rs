use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::summarizer::SummarizerConfig;

/// Configuration for the transcript summarizer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Summarization engine settings
    pub summarizer: SummarizerConfig,

    /// Service wrapper settings
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Sentence budget used for summarize-video requests
    pub request_sentences: usize,

    /// Directory searched for `<video_id>.txt` transcript files
    pub transcript_dir: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_sentences: 7,
            transcript_dir: "./transcripts".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first config file found
    pub fn load() -> Result<Self> {
        let config_paths = [
            "transcript-summarizer.toml",
            "config/transcript-summarizer.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Err(anyhow!("No configuration file found"))
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.request_sentences == 0 {
            return Err(anyhow!("request_sentences must be greater than 0"));
        }
        if self.summarizer.max_input_chars == 0 {
            return Err(anyhow!("max_input_chars must be greater than 0"));
        }
        if let Some(max) = self.summarizer.max_summary_chars {
            if max == 0 {
                return Err(anyhow!("max_summary_chars must be greater than 0 when set"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::ScoringStrategy;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.request_sentences, 7);
        assert_eq!(config.summarizer.num_sentences, 5);
        assert_eq!(config.summarizer.strategy, ScoringStrategy::GraphCentrality);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [summarizer]
            strategy = "frequency-sum"
            num_sentences = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.summarizer.strategy, ScoringStrategy::FrequencySum);
        assert_eq!(config.summarizer.num_sentences, 3);
        // Untouched fields keep their defaults.
        assert_eq!(config.summarizer.min_sentence_chars, 20);
        assert_eq!(config.service.request_sentences, 7);
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.summarizer.max_input_chars,
            config.summarizer.max_input_chars
        );
    }

    #[test]
    fn test_save_and_from_file_round_trip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("transcript-summarizer.toml");

        let mut config = Config::default();
        config.summarizer.strategy = ScoringStrategy::FrequencySum;
        config.summarizer.num_sentences = 4;
        config.service.request_sentences = 9;
        config.save(path.to_str().unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.summarizer.strategy, ScoringStrategy::FrequencySum);
        assert_eq!(loaded.summarizer.num_sentences, 4);
        assert_eq!(loaded.service.request_sentences, 9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.service.request_sentences = 0;
        assert!(config.validate().is_err());
    }
}
