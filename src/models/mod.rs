// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod classification;
pub mod document;
pub mod report;

pub use classification::{Classification, ClassificationResult};
pub use document::Document;
pub use report::AnalysisReport;
