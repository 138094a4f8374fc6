// file: src/normalizer/text.rs
// description: deterministic cleaning of extracted bill text into a token stream
// reference: lowercase, strip urls and tags, drop punctuation and stopwords, spell-correct

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::normalizer::patterns::{HTML_TAG, NON_ALPHANUMERIC, URL};
use crate::normalizer::spelling::{SpellCorrector, SymSpellCorrector};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct TextNormalizer {
    stopwords: HashSet<String>,
    corrector: Option<Arc<dyn SpellCorrector>>,
}

impl TextNormalizer {
    pub fn new<I, S>(stopwords: I, corrector: Option<Arc<dyn SpellCorrector>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            corrector,
        }
    }

    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let corrector = SymSpellCorrector::from_config(&config.spelling)?;
        Ok(Self::new(config.stopwords.iter().cloned(), corrector))
    }

    pub fn normalize(&self, content: &str) -> String {
        let cleaned = self.clean(content);
        let tokens = self.tokens(&cleaned);

        let normalized = match &self.corrector {
            Some(corrector) => self.correct_tokens(corrector.as_ref(), &tokens),
            None => tokens.join(" "),
        };

        debug!(
            "Normalized {} chars into {} tokens",
            content.len(),
            tokens.len()
        );

        normalized
    }

    /// Case folding, url and tag stripping and punctuation removal.
    pub fn clean(&self, content: &str) -> String {
        let lowered = content.to_lowercase();
        let without_urls = URL.replace_all(&lowered, "");
        let without_tags = HTML_TAG.replace_all(&without_urls, "");
        NON_ALPHANUMERIC
            .replace_all(&without_tags, " ")
            .into_owned()
    }

    /// Whitespace tokens of cleaned text with stopwords removed.
    pub fn tokens<'a>(&self, cleaned: &'a str) -> Vec<&'a str> {
        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .collect()
    }

    fn correct_tokens(&self, corrector: &dyn SpellCorrector, tokens: &[&str]) -> String {
        let mut memo: HashMap<&str, String> = HashMap::new();
        let mut corrected = Vec::with_capacity(tokens.len());

        for &token in tokens {
            let replacement = memo
                .entry(token)
                .or_insert_with(|| corrector.correct(token).unwrap_or_else(|| token.to_string()));
            corrected.push(replacement.clone());
        }

        corrected.join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedCorrection;

    // Corrects a fixed misspelling, leaves everything else alone.
    impl SpellCorrector for FixedCorrection {
        fn correct(&self, token: &str) -> Option<String> {
            (token == "goverment").then(|| "government".to_string())
        }
    }

    struct CountingCorrector(AtomicUsize);

    impl SpellCorrector for CountingCorrector {
        fn correct(&self, _token: &str) -> Option<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    fn stopword_normalizer(stopwords: &[&str]) -> TextNormalizer {
        TextNormalizer::new(stopwords.iter().copied(), None)
    }

    #[test]
    fn test_stopwords_removed() {
        let normalizer = stopword_normalizer(&["the", "is"]);
        assert_eq!(normalizer.normalize("the bill is"), "bill");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t "), "");
    }

    #[test]
    fn test_urls_and_tags_stripped() {
        let normalizer = TextNormalizer::default();
        let text = "See <a href='x'>the Bill</a> at https://sansad.in/bills and www.prsindia.org today";
        assert_eq!(normalizer.normalize(text), "see the bill at and today");
    }

    #[test]
    fn test_punctuation_replaced_by_space() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("Section 4(1)(b): Online-Gaming, prohibited!"),
            "section 4 1 b online gaming prohibited"
        );
    }

    #[test]
    fn test_output_alphabet() {
        let normalizer = TextNormalizer::default();
        let text = "Ünïcödé — “quotes” ₹5,000 crore\u{00a0}é\tTAB <tag> ok_done";
        let output = normalizer.normalize(text);

        assert!(
            output
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
        );
        assert!(!output.contains("  "));
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let normalizer = stopword_normalizer(&["of", "the"]);
        let once = normalizer.tokens(&normalizer.clean(
            "THE Promotion & Regulation of <i>Online</i> Gaming Bill, 2025 (www.x.in)",
        ))
        .join(" ");
        let twice = normalizer.tokens(&normalizer.clean(&once)).join(" ");

        assert_eq!(once, "promotion regulation online gaming bill 2025");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_spelling_correction_applied_per_token() {
        let normalizer = TextNormalizer::new(["the"], Some(Arc::new(FixedCorrection)));
        assert_eq!(
            normalizer.normalize("The goverment bill"),
            "government bill"
        );
    }

    #[test]
    fn test_repeated_tokens_corrected_once_per_call() {
        let corrector = Arc::new(CountingCorrector(AtomicUsize::new(0)));
        let normalizer = TextNormalizer::new(Vec::<String>::new(), Some(corrector.clone()));

        normalizer.normalize("bill bill bill act act");
        assert_eq!(corrector.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_symspell_backed_normalizer() {
        let corrector = SymSpellCorrector::from_dictionary("bill 100\nparliament 90\n", 2);
        let normalizer = TextNormalizer::new(["the", "is"], Some(Arc::new(corrector)));

        assert_eq!(normalizer.normalize("the bill is"), "bill");
        assert_eq!(normalizer.normalize("Parliment"), "parliament");
    }
}
