// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod classifier;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod summarizer;
pub mod utils;

pub use classifier::BillClassifier;
pub use config::{
    ClassifierConfig, Config, NormalizationMode, NormalizerConfig, PipelineConfig,
    SpellingConfig, SummarizerConfig,
};
pub use error::{AnalyzerError, Outcome, Result};
pub use extractor::{PageSource, PdfExtractor};
pub use models::{AnalysisReport, Classification, ClassificationResult, Document};
pub use normalizer::{SpellCorrector, SymSpellCorrector, TextNormalizer};
pub use pipeline::{BillPipeline, PreparedBill, StageProgress};
pub use summarizer::{GeminiClient, PromptTemplate, TextGenerator};
pub use utils::Validator;
