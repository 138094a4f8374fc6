// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored outcome formatting

use crate::error::{AnalyzerError, Outcome};
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    colored::control::set_override(colored_output);
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_step(step: usize, total: usize, msg: &str) -> String {
    format!("{} {}", format!("[{}/{}]", step, total).cyan().bold(), msg)
}

/// Banner for a failed analysis; document rejections are warnings, the rest errors.
pub fn format_failure(err: &AnalyzerError) -> String {
    let message = match err.outcome() {
        Outcome::NoPages => "The uploaded PDF has no pages.".to_string(),
        Outcome::ExtractionFailed => "Failed to extract text from the PDF.".to_string(),
        Outcome::NotABill | Outcome::UpstreamFailure | Outcome::InvalidInput => err.to_string(),
    };

    if err.is_document_rejection() {
        format_warning(&message)
    } else {
        format_error(&message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_banner_text() {
        let banner = format_failure(&AnalyzerError::EmptyDocument);
        assert!(banner.contains("no pages"));

        let banner = format_failure(&AnalyzerError::ClassificationRejected {
            keyword_hits: 1,
            required: 3,
        });
        assert!(banner.contains("does not appear to be a government bill"));

        let banner = format_failure(&AnalyzerError::UpstreamService("quota".to_string()));
        assert!(banner.contains("quota"));
    }

    #[test]
    fn test_step_contains_counter() {
        assert!(format_step(2, 4, "Normalizing").contains("[2/4]"));
    }
}
