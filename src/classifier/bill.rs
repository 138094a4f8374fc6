// file: src/classifier/bill.rs
// description: keyword and mandatory-phrase heuristic deciding whether text is a bill
// reference: configurable substring-based classification

use crate::config::ClassifierConfig;
use crate::extractor::PageSource;
use crate::models::{Classification, ClassificationResult};
use tracing::debug;

pub struct BillClassifier {
    keywords: Vec<String>,
    mandatory_phrases: Vec<String>,
    min_keyword_hits: usize,
    pages_to_check: usize,
}

impl BillClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            keywords: config.keywords.clone(),
            mandatory_phrases: config.mandatory_phrases.clone(),
            min_keyword_hits: config.min_keyword_hits,
            pages_to_check: config.pages_to_check,
        }
    }

    pub fn min_keyword_hits(&self) -> usize {
        self.min_keyword_hits
    }

    /// Classify a document given as page texts. Only the leading pages up to
    /// the configured bound are inspected.
    pub fn classify<S: AsRef<str>>(&self, pages: &[S]) -> Classification {
        if pages.is_empty() {
            return Classification::EmptyDocument;
        }

        let buffer: String = pages
            .iter()
            .take(self.pages_to_check)
            .map(|page| page.as_ref().to_lowercase())
            .collect();

        Classification::Evaluated(self.evaluate(&buffer))
    }

    /// Same as [`classify`](Self::classify) but pulls text lazily, so pages past
    /// the bound are never extracted.
    pub fn classify_source(&self, source: &impl PageSource) -> Classification {
        if source.page_count() == 0 {
            return Classification::EmptyDocument;
        }

        Classification::Evaluated(self.evaluate(&self.check_buffer(source)))
    }

    fn check_buffer(&self, source: &impl PageSource) -> String {
        let limit = self.pages_to_check.min(source.page_count());
        (0..limit)
            .map(|index| source.page_text(index).to_lowercase())
            .collect()
    }

    /// Score an already lowercased check buffer.
    pub fn evaluate(&self, buffer: &str) -> ClassificationResult {
        let matched_keywords: Vec<String> = self
            .keywords
            .iter()
            .filter(|keyword| buffer.contains(keyword.as_str()))
            .cloned()
            .collect();

        let matched_phrases: Vec<String> = self
            .mandatory_phrases
            .iter()
            .filter(|phrase| buffer.contains(phrase.as_str()))
            .cloned()
            .collect();

        let keyword_hit_count = matched_keywords.len();
        let mandatory_phrase_matched = !matched_phrases.is_empty();
        let accepted = keyword_hit_count >= self.min_keyword_hits || mandatory_phrase_matched;

        debug!(
            "Classified {} chars: {} keyword hits, mandatory phrase {}, accepted {}",
            buffer.len(),
            keyword_hit_count,
            mandatory_phrase_matched,
            accepted
        );

        ClassificationResult {
            keyword_hit_count,
            mandatory_phrase_matched,
            accepted,
            matched_keywords,
            matched_phrases,
        }
    }
}

impl Default for BillClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
