// file: src/summarizer/prompt.rs
// description: instructional prompt template wrapped around bill text
// reference: placeholder substitution template

use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::Path;

pub const BILL_TEXT_PLACEHOLDER: &str = "{bill_text}";

const DEFAULT_TEMPLATE: &str = "\
You are a legal and public policy expert.

Analyze the following Government Bill and provide:

1. Title of the Bill
2. Simple Summary (easy for common people)
3. Objective of the Bill
4. Industry-wise Impact
5. Key Provisions
6. Impact Assessment (short term, medium term and long term)
7. Positives and Negatives
8. Risks and Opportunities

Bill Content:
{bill_text}
";

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn with_custom_template(template: String) -> Result<Self> {
        if !template.contains(BILL_TEXT_PLACEHOLDER) {
            return Err(AnalyzerError::Validation(format!(
                "Prompt template must contain {}",
                BILL_TEXT_PLACEHOLDER
            )));
        }
        Ok(Self { template })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path)?;
        Self::with_custom_template(template)
    }

    pub fn render(&self, bill_text: &str) -> String {
        self.template.replace(BILL_TEXT_PLACEHOLDER, bill_text)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new()
    }
}
