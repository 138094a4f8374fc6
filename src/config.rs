// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::classifier::vocabulary::{
    DEFAULT_KEYWORDS, DEFAULT_MANDATORY_PHRASES, DEFAULT_STOPWORDS, to_owned_list,
};
use crate::error::{AnalyzerError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub normalizer: NormalizerConfig,
    pub pipeline: PipelineConfig,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub keywords: Vec<String>,
    pub mandatory_phrases: Vec<String>,
    pub min_keyword_hits: usize,
    pub pages_to_check: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub stopwords: Vec<String>,
    pub spelling: SpellingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SpellingConfig {
    pub enabled: bool,
    /// SymSpell frequency dictionary (`term count` per line); the English list under
    /// `data/` when unset.
    pub dictionary_path: Option<PathBuf>,
    pub max_edit_distance: i64,
}

/// Where text normalization sits relative to bill validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    Disabled,
    BeforeValidation,
    AfterValidation,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub normalization: NormalizationMode,
    pub send_normalized_text: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummarizerConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub template_path: Option<PathBuf>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keywords: to_owned_list(DEFAULT_KEYWORDS),
            mandatory_phrases: to_owned_list(DEFAULT_MANDATORY_PHRASES),
            min_keyword_hits: 3,
            pages_to_check: 3,
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stopwords: to_owned_list(DEFAULT_STOPWORDS),
            spelling: SpellingConfig::default(),
        }
    }
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dictionary_path: None,
            max_edit_distance: 2,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::AfterValidation,
            send_normalized_text: true,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 120,
            template_path: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BILL_ANALYZER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        config.lowercase_word_lists();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    fn lowercase_word_lists(&mut self) {
        for list in [
            &mut self.classifier.keywords,
            &mut self.classifier.mandatory_phrases,
            &mut self.normalizer.stopwords,
        ] {
            for word in list.iter_mut() {
                *word = word.trim().to_lowercase();
            }
            list.retain(|w| !w.is_empty());
        }
    }

    fn validate(&self) -> Result<()> {
        if self.classifier.min_keyword_hits == 0 {
            return Err(AnalyzerError::Config(
                "min_keyword_hits must be greater than 0".to_string(),
            ));
        }

        if self.classifier.pages_to_check == 0 {
            return Err(AnalyzerError::Config(
                "pages_to_check must be greater than 0".to_string(),
            ));
        }

        if !(0..=2).contains(&self.normalizer.spelling.max_edit_distance) {
            return Err(AnalyzerError::Config(
                "max_edit_distance must be between 0 and 2".to_string(),
            ));
        }

        if self.summarizer.model.trim().is_empty() {
            return Err(AnalyzerError::Config("model must not be empty".to_string()));
        }

        Ok(())
    }
}
