// file: src/classifier/mod.rs
// description: bill classification module exports
// reference: internal module structure

pub mod bill;
pub mod vocabulary;

pub use bill::BillClassifier;
