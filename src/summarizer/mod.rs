// file: src/summarizer/mod.rs
// description: prompt assembly and generative model client exports
// reference: internal module structure

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::PromptTemplate;

use crate::error::Result;
use std::future::Future;

/// A generative language service answering one prompt with one text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
