// file: src/pipeline/orchestrator.rs
// description: coordinates classification, extraction, normalization and summary generation
// reference: one document per request, synchronous up to the model call

use crate::classifier::BillClassifier;
use crate::config::{Config, NormalizationMode, PipelineConfig};
use crate::error::{AnalyzerError, Result};
use crate::extractor::PageSource;
use crate::models::{AnalysisReport, Classification, ClassificationResult, Document};
use crate::normalizer::TextNormalizer;
use crate::summarizer::{PromptTemplate, TextGenerator};
use std::time::Instant;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Everything produced for an accepted bill before the model is called.
#[derive(Debug, Clone)]
pub struct PreparedBill {
    pub report: AnalysisReport,
    pub raw_text: String,
    pub normalized_text: Option<String>,
    pub prompt: String,
}

pub struct BillPipeline {
    classifier: BillClassifier,
    normalizer: TextNormalizer,
    template: PromptTemplate,
    settings: PipelineConfig,
}

impl BillPipeline {
    /// Build every component once; the spelling dictionary is shared by all
    /// documents analyzed through this pipeline.
    pub fn new(config: &Config) -> Result<Self> {
        let normalizer = if config.pipeline.normalization == NormalizationMode::Disabled {
            TextNormalizer::default()
        } else {
            TextNormalizer::from_config(&config.normalizer)?
        };

        let template = match &config.summarizer.template_path {
            Some(path) => PromptTemplate::from_path(path)?,
            None => PromptTemplate::new(),
        };

        Ok(Self::with_parts(
            BillClassifier::new(&config.classifier),
            normalizer,
            template,
            config.pipeline.clone(),
        ))
    }

    pub fn with_parts(
        classifier: BillClassifier,
        normalizer: TextNormalizer,
        template: PromptTemplate,
        settings: PipelineConfig,
    ) -> Self {
        Self {
            classifier,
            normalizer,
            template,
            settings,
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Classify the leading pages, turning empty documents and rejections into errors.
    pub fn validate(&self, source: &impl PageSource) -> Result<ClassificationResult> {
        if source.page_count() == 0 {
            return Err(AnalyzerError::EmptyDocument);
        }

        match self.classifier.classify_source(source) {
            Classification::EmptyDocument => Err(AnalyzerError::EmptyDocument),
            Classification::Evaluated(result) if result.accepted => Ok(result),
            Classification::Evaluated(result) => Err(AnalyzerError::ClassificationRejected {
                keyword_hits: result.keyword_hit_count,
                required: self.classifier.min_keyword_hits(),
            }),
        }
    }

    pub fn prepare(&self, source: &impl PageSource) -> Result<PreparedBill> {
        let request_id = Uuid::new_v4();
        let span = info_span!("analysis", request_id = %request_id);
        let _guard = span.enter();

        let total_pages = source.page_count();
        if total_pages == 0 {
            warn!("Document has no pages");
            return Err(AnalyzerError::EmptyDocument);
        }
        info!("Total pages detected: {}", total_pages);

        let mut raw_text = None;
        let mut normalized_text = None;

        let classification = if self.settings.normalization == NormalizationMode::BeforeValidation
        {
            // every page is extracted once and the classifier reads the copies
            let document = Document::from_source(source);
            let text = document.full_text();
            normalized_text = Some(self.normalize(&text));
            raw_text = Some(text);
            self.validate(&document)?
        } else {
            self.validate(source)?
        };
        info!(
            "Valid government bill detected ({} keyword hits, mandatory phrase: {})",
            classification.keyword_hit_count, classification.mandatory_phrase_matched
        );

        let raw_text = raw_text.unwrap_or_else(|| source.full_text());
        if raw_text.trim().is_empty() {
            warn!("No extractable text across {} pages", total_pages);
            return Err(AnalyzerError::ExtractionFailed);
        }
        info!("Full text extracted ({} chars)", raw_text.len());

        if self.settings.normalization == NormalizationMode::AfterValidation {
            normalized_text = Some(self.normalize(&raw_text));
        }

        let prompt_text = match &normalized_text {
            Some(text) if self.settings.send_normalized_text => text.as_str(),
            _ => raw_text.as_str(),
        };
        let prompt = self.template.render(prompt_text);

        let mut report = AnalysisReport::new(
            request_id,
            total_pages,
            Classification::Evaluated(classification),
        );
        report.normalized_chars = normalized_text.as_ref().map(String::len);
        report.prompt_chars = prompt.len();

        Ok(PreparedBill {
            report,
            raw_text,
            normalized_text,
            prompt,
        })
    }

    /// Run the whole pipeline and ask `generator` for the summary.
    pub async fn analyze<G: TextGenerator>(
        &self,
        source: &impl PageSource,
        generator: &G,
    ) -> Result<AnalysisReport> {
        let prepared = self.prepare(source)?;
        self.summarize(prepared, generator).await
    }

    pub async fn summarize<G: TextGenerator>(
        &self,
        prepared: PreparedBill,
        generator: &G,
    ) -> Result<AnalysisReport> {
        let PreparedBill {
            mut report, prompt, ..
        } = prepared;

        let span = info_span!("summary", request_id = %report.request_id);
        let summary = generator.generate(&prompt).instrument(span).await?;

        report.summary = Some(summary);
        Ok(report)
    }

    fn normalize(&self, text: &str) -> String {
        let start = Instant::now();
        let normalized = self.normalizer.normalize(text);
        debug!(
            "Normalization finished in {:.2}s ({} -> {} chars)",
            start.elapsed().as_secs_f64(),
            text.len(),
            normalized.len()
        );
        normalized
    }
}
