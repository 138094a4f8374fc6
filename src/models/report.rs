// file: src/models/report.rs
// description: serializable summary of one analysis request
// reference: internal data structures

use crate::models::Classification;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub document_sha256: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub total_pages: usize,
    pub classification: Classification,
    pub normalized_chars: Option<usize>,
    pub prompt_chars: usize,
    pub summary: Option<String>,
}

impl AnalysisReport {
    pub fn new(request_id: Uuid, total_pages: usize, classification: Classification) -> Self {
        Self {
            request_id,
            document_sha256: None,
            analyzed_at: Utc::now(),
            total_pages,
            classification,
            normalized_chars: None,
            prompt_chars: 0,
            summary: None,
        }
    }

    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassificationResult;

    #[test]
    fn test_report_json() {
        let mut report = AnalysisReport::new(
            Uuid::new_v4(),
            5,
            Classification::Evaluated(ClassificationResult {
                keyword_hit_count: 3,
                accepted: true,
                ..Default::default()
            }),
        );
        report.summary = Some("Title: Online Gaming Bill".to_string());

        let json: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
        assert_eq!(json["total_pages"], 5);
        assert_eq!(json["classification"]["status"], "evaluated");
        assert_eq!(json["summary"], "Title: Online Gaming Bill");
    }
}
