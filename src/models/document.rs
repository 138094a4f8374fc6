// file: src/models/document.rs
// description: in-memory bill document held for the duration of one request
// reference: internal data structures

use crate::extractor::PageSource;
use sha2::{Digest, Sha256};

/// Ordered page texts of one uploaded document. Pages without extractable
/// text are stored as empty strings.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<String>,
}

impl Document {
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Materialize every page of `source`.
    pub fn from_source(source: &impl PageSource) -> Self {
        Self::from_pages((0..source.page_count()).map(|i| source.page_text(i)))
    }
}

impl PageSource for Document {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> String {
        self.pages.get(index).cloned().unwrap_or_default()
    }
}

pub fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
