// file: src/models/classification.rs
// description: bill classification results
// reference: keyword-threshold heuristic over the check buffer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub keyword_hit_count: usize,
    pub mandatory_phrase_matched: bool,
    pub accepted: bool,
    pub matched_keywords: Vec<String>,
    pub matched_phrases: Vec<String>,
}

/// Outcome of classifying a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// The document has no pages; nothing was inspected.
    EmptyDocument,
    Evaluated(ClassificationResult),
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Evaluated(result) if result.accepted)
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            Classification::EmptyDocument => None,
            Classification::Evaluated(result) => Some(result),
        }
    }
}
