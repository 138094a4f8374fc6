// file: src/utils/validation.rs
// description: input validation for uploaded documents and credentials
// reference: input validation patterns

use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::Path;

/// Upper bound on an uploaded document, in bytes.
pub const MAX_DOCUMENT_BYTES: u64 = 200 * 1_048_576;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| {
            AnalyzerError::Validation(format!("Cannot read {}: {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(AnalyzerError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_DOCUMENT_BYTES {
            return Err(AnalyzerError::Validation(format!(
                "File too large ({} bytes): {}",
                metadata.len(),
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_pdf_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
            _ => Err(AnalyzerError::Validation(format!(
                "File is not a PDF: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_pdf(path: &Path) -> Result<()> {
        Self::validate_pdf_extension(path)?;
        Self::validate_file_path(path)
    }

    /// Returns the trimmed key, rejecting missing or blank credentials.
    pub fn validate_api_key(api_key: Option<&str>) -> Result<String> {
        match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(AnalyzerError::Validation(
                "Please provide your Gemini API key to proceed".to_string(),
            )),
        }
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_pdf() {
        let temp = TempDir::new().unwrap();
        let pdf = temp.path().join("bill.PDF");
        fs::write(&pdf, b"%PDF-1.7").unwrap();

        assert!(Validator::validate_pdf(&pdf).is_ok());
        assert!(Validator::validate_pdf(&temp.path().join("missing.pdf")).is_err());
        assert!(Validator::validate_pdf(temp.path()).is_err());
    }

    #[test]
    fn test_validate_pdf_extension() {
        assert!(Validator::validate_pdf_extension(Path::new("bill.pdf")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("bill.docx")).is_err());
        assert!(Validator::validate_pdf_extension(Path::new("bill")).is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert_eq!(
            Validator::validate_api_key(Some("  abc123 ")).unwrap(),
            "abc123"
        );
        assert!(Validator::validate_api_key(Some("   ")).is_err());
        assert!(Validator::validate_api_key(None).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("₹₹₹₹", 2), "₹₹...");
    }
}
