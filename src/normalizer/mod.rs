// file: src/normalizer/mod.rs
// description: text normalization module exports
// reference: internal module structure

pub mod patterns;
pub mod spelling;
pub mod text;

pub use spelling::{SpellCorrector, SymSpellCorrector};
pub use text::TextNormalizer;
