// file: src/extractor/pdf.rs
// description: pdf page text extraction backed by lopdf
// reference: https://docs.rs/lopdf

use crate::error::{AnalyzerError, Result};
use crate::extractor::PageSource;
use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct PdfExtractor {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PdfExtractor {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document =
            Document::load_mem(bytes).map_err(|e| AnalyzerError::Pdf(e.to_string()))?;
        // get_pages is keyed by 1-based page number in document order
        let page_numbers = document.get_pages().keys().copied().collect();

        Ok(Self {
            document,
            page_numbers,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl PageSource for PdfExtractor {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> String {
        let Some(&page_number) = self.page_numbers.get(index) else {
            return String::new();
        };

        match self.document.extract_text(&[page_number]) {
            Ok(text) if text.trim().is_empty() => String::new(),
            Ok(text) => text,
            Err(e) => {
                debug!("No extractable text on page {}: {}", page_number, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::BillClassifier;
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Object, Stream, dictionary};

    /// One page per entry; `None` leaves the page without a content stream.
    fn create_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids: Vec<Object> = Vec::new();
        for text in pages {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            };
            if let Some(text) = text {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![100.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
                page.set("Contents", content_id);
            }
            page_ids.push(doc.add_object(page).into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => pages.len() as i64,
                "Resources" => resources_id,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn create_test_pdf(num_pages: u32) -> Vec<u8> {
        let texts: Vec<String> = (1..=num_pages).map(|i| format!("Page {}", i)).collect();
        let pages: Vec<Option<&str>> = texts.iter().map(|t| Some(t.as_str())).collect();
        create_pdf(&pages)
    }

    #[test]
    fn test_page_count() {
        let extractor = PdfExtractor::from_bytes(&create_test_pdf(4)).unwrap();
        assert_eq!(extractor.page_count(), 4);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let extractor = PdfExtractor::from_bytes(&create_test_pdf(1)).unwrap();
        assert_eq!(extractor.page_text(3), "");
    }

    #[test]
    fn test_invalid_bytes_rejected() {
        let result = PdfExtractor::from_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(AnalyzerError::Pdf(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = PdfExtractor::from_path(Path::new("/nonexistent/bill.pdf"));
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }

    #[test]
    fn test_page_text_extracted() {
        let extractor = PdfExtractor::from_bytes(&create_test_pdf(2)).unwrap();

        assert!(extractor.page_text(0).contains("Page 1"));
        assert!(extractor.page_text(1).contains("Page 2"));
        assert!(!extractor.page_text(0).contains("Page 2"));
    }

    #[test]
    fn test_page_without_content_is_empty() {
        let bytes = create_pdf(&[None, Some("A bill introduced in Parliament by the Minister")]);
        let extractor = PdfExtractor::from_bytes(&bytes).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert_eq!(extractor.page_text(0), "");
        assert!(extractor.full_text().contains("A bill introduced"));

        let classification = BillClassifier::default().classify_source(&extractor);
        let result = classification.result().unwrap();
        assert_eq!(result.keyword_hit_count, 3);
        assert!(result.accepted);
    }
}
