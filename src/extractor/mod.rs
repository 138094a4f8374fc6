// file: src/extractor/mod.rs
// description: page text extraction module exports
// reference: internal module structure

pub mod pdf;

pub use pdf::PdfExtractor;

/// Per-page text provider. Pages whose text cannot be extracted yield an
/// empty string rather than an error.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page_text(&self, index: usize) -> String;

    /// Concatenated page texts, each non-empty page followed by a newline.
    fn full_text(&self) -> String {
        let mut text = String::new();
        for index in 0..self.page_count() {
            let page = self.page_text(index);
            if !page.is_empty() {
                text.push_str(&page);
                text.push('\n');
            }
        }
        text
    }
}
