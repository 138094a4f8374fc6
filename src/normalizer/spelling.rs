// file: src/normalizer/spelling.rs
// description: dictionary-based per-token spelling correction using symspell
// reference: https://docs.rs/symspell

use crate::config::SpellingConfig;
use crate::error::{AnalyzerError, Result};
use crate::normalizer::patterns::is_numeric;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use symspell::{AsciiStringStrategy, SymSpell, Verbosity};
use tracing::{debug, info, warn};

/// Where the SymSpell English frequency list (`frequency_dictionary_en_82_765.txt`)
/// is looked up when no dictionary path is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "data/frequency_dictionary_en_82_765.txt";

/// Legislative and Indian administrative terms missing from general English
/// frequency lists. Loaded after the main dictionary so they are kept as-is.
pub const BILL_TERMS: &str = include_str!("../../data/bill_terms.txt");

static DEFAULT_CORRECTOR: OnceLock<Option<Arc<SymSpellCorrector>>> = OnceLock::new();

/// Context-free correction of a single lowercase token.
pub trait SpellCorrector: Send + Sync {
    /// Most probable in-dictionary replacement, or `None` to keep the token.
    fn correct(&self, token: &str) -> Option<String>;
}

pub struct SymSpellCorrector {
    symspell: SymSpell<AsciiStringStrategy>,
    max_edit_distance: i64,
    longest_word: usize,
    entries: usize,
}

impl SymSpellCorrector {
    /// Build from dictionary text. Entries containing anything other than
    /// lowercase ascii letters and digits are skipped so corrections never
    /// reintroduce characters the cleaning steps removed.
    pub fn from_dictionary(dictionary: &str, max_edit_distance: i64) -> Self {
        let mut corrector = Self {
            symspell: SymSpell::default(),
            max_edit_distance,
            longest_word: 0,
            entries: 0,
        };
        corrector.load(dictionary);

        debug!(
            "SymSpell initialized with {} entries (longest word {})",
            corrector.entries, corrector.longest_word
        );
        corrector
    }

    /// Load extra entries on top of the current dictionary.
    pub fn with_supplement(mut self, dictionary: &str) -> Self {
        let before = self.entries;
        self.load(dictionary);
        debug!("Added {} supplementary entries", self.entries - before);
        self
    }

    fn load(&mut self, dictionary: &str) {
        for line in dictionary.lines() {
            let mut fields = line.split_whitespace();
            let (Some(term), Some(count)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(count) = count.parse::<i64>() else {
                continue;
            };
            if !term
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                continue;
            }

            // symspell panics on malformed counts, so only hand it checked lines
            self.symspell
                .load_dictionary_line(&format!("{} {}", term, count), 0, 1, " ");
            self.longest_word = self.longest_word.max(term.len());
            self.entries += 1;
        }
    }

    pub fn from_path(path: &Path, max_edit_distance: i64) -> Result<Self> {
        let dictionary = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!(
                "Cannot read spelling dictionary {}: {}",
                path.display(),
                e
            ))
        })?;

        let corrector = Self::from_dictionary(&dictionary, max_edit_distance);
        if corrector.entries == 0 {
            return Err(AnalyzerError::Config(format!(
                "Spelling dictionary {} has no usable entries",
                path.display()
            )));
        }

        info!(
            "Loaded spelling dictionary {} ({} entries)",
            path.display(),
            corrector.entries
        );
        Ok(corrector)
    }

    /// English list at [`DEFAULT_DICTIONARY_PATH`] plus [`BILL_TERMS`], or `None`
    /// when the list is not installed. Without a real frequency list every
    /// unknown word would be rewritten, so correction is skipped instead.
    pub fn default_dictionary(max_edit_distance: i64) -> Option<Self> {
        let path = Path::new(DEFAULT_DICTIONARY_PATH);
        if !path.is_file() {
            warn!(
                "Spelling dictionary {} not found, spelling correction skipped",
                path.display()
            );
            return None;
        }

        match Self::from_path(path, max_edit_distance) {
            Ok(corrector) => Some(corrector.with_supplement(BILL_TERMS)),
            Err(e) => {
                warn!("{}, spelling correction skipped", e);
                None
            }
        }
    }

    /// Process-wide instance over the default dictionary, resolved on first use.
    pub fn shared_default() -> Option<Arc<SymSpellCorrector>> {
        DEFAULT_CORRECTOR
            .get_or_init(|| Self::default_dictionary(2).map(Arc::new))
            .clone()
    }

    /// Resolve the corrector a config asks for; `None` when correction is
    /// disabled or no default dictionary is installed. A configured path that
    /// cannot be loaded is an error.
    pub fn from_config(config: &SpellingConfig) -> Result<Option<Arc<dyn SpellCorrector>>> {
        if !config.enabled {
            return Ok(None);
        }

        let corrector = match &config.dictionary_path {
            Some(path) => {
                let corrector = Self::from_path(path, config.max_edit_distance)?
                    .with_supplement(BILL_TERMS);
                Some(Arc::new(corrector) as Arc<dyn SpellCorrector>)
            }
            None if config.max_edit_distance == 2 => {
                Self::shared_default().map(|c| c as Arc<dyn SpellCorrector>)
            }
            None => Self::default_dictionary(config.max_edit_distance)
                .map(|c| Arc::new(c) as Arc<dyn SpellCorrector>),
        };

        Ok(corrector)
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    fn should_check(&self, token: &str) -> bool {
        !token.is_empty() && !is_numeric(token) && token.len() <= self.longest_word + 3
    }
}

impl SpellCorrector for SymSpellCorrector {
    fn correct(&self, token: &str) -> Option<String> {
        if !self.should_check(token) {
            return None;
        }

        self.symspell
            .lookup(token, Verbosity::Top, self.max_edit_distance)
            .into_iter()
            .next()
            .map(|suggestion| suggestion.term)
    }
}
