// file: src/classifier/vocabulary.rs
// description: built-in keyword, mandatory phrase and stopword lists
// reference: introduced-bill vocabulary of the indian parliament

/// Domain vocabulary counted towards the keyword threshold.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // core bill indicators
    "bill",
    "introduce a bill",
    "leave to introduce",
    "i introduce the bill",
    "motion was adopted",
    // parliamentary terms
    "parliament",
    "lok sabha",
    "rajya sabha",
    "hon. chairperson",
    "hon chairperson",
    "house",
    // government and authority
    "government",
    "minister",
    "ministry",
    "authority",
    "regulatory",
    "oversight",
    // legal and policy language
    "regulate",
    "prohibit",
    "public interest",
    "legal framework",
    "national-level",
    "jurisdiction",
    // digital and sectoral
    "online gaming",
    "digital technologies",
    "computer resource",
    "mobile device",
    "internet",
    "financial systems",
    "public order",
    "public health",
    "security and sovereignty",
];

/// Phrases whose presence alone accepts a document.
pub const DEFAULT_MANDATORY_PHRASES: &[&str] = &[
    "introduce a bill",
    "leave be granted to introduce",
    "i introduce the bill",
    "motion was adopted",
    "statement of objects and reasons",
    "be it enacted",
];

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "he",
    "in", "is", "it", "its", "of", "on", "or", "that", "the", "their", "there", "these", "they",
    "this", "to", "was", "were", "which", "will", "with",
];

pub fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
