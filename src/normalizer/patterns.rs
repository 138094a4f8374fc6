// file: src/normalizer/patterns.rs
// description: compiled regex patterns for text cleaning
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref URL: Regex = Regex::new(
        r"http\S+|www\S+"
    ).expect("URL regex is valid");

    pub static ref HTML_TAG: Regex = Regex::new(
        r"<.*?>"
    ).expect("HTML_TAG regex is valid");

    // anything that is not a lowercase ascii letter, digit or whitespace
    pub static ref NON_ALPHANUMERIC: Regex = Regex::new(
        r"[^a-z0-9\s]"
    ).expect("NON_ALPHANUMERIC regex is valid");
}

pub fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}
