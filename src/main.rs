// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use bill_analyzer::models::document::compute_hash;
use bill_analyzer::utils::logging::{format_failure, format_info, format_success};
use bill_analyzer::{
    AnalyzerError, BillPipeline, Config, GeminiClient, NormalizationMode, PageSource,
    PdfExtractor, PromptTemplate, StageProgress, Validator,
};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "bill_analyzer")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Validate and summarize government bill PDFs with Gemini", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a PDF looks like a government bill
    Validate {
        pdf: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print the normalized text of an accepted bill
    Normalize { pdf: PathBuf },

    /// Print the prompt that would be sent to Gemini
    Prompt {
        pdf: PathBuf,

        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },

    /// Validate, normalize and summarize a bill
    Analyze {
        pdf: PathBuf,

        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    bill_analyzer::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let result = match cli.command {
        Commands::Validate { pdf, json } => {
            cmd_validate(&config, &pdf, json, &mut io::stdout().lock())
        }
        Commands::Normalize { pdf } => cmd_normalize(&config, &pdf),
        Commands::Prompt { pdf, template } => cmd_prompt(&config, &pdf, template.as_deref()),
        Commands::Analyze {
            pdf,
            api_key,
            template,
            json,
            pretty,
        } => {
            let options = AnalyzeOptions {
                api_key,
                template,
                json,
                pretty,
                colored: cli.color,
            };
            cmd_analyze(&config, &pdf, options).await
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<AnalyzerError>() {
            Some(analyzer_err) if analyzer_err.is_document_rejection() => {
                eprintln!("{}", format_failure(analyzer_err));
                Ok(ExitCode::from(2))
            }
            _ => Err(err),
        },
    }
}

struct AnalyzeOptions {
    api_key: Option<String>,
    template: Option<PathBuf>,
    json: bool,
    pretty: bool,
    colored: bool,
}

fn open_pdf(path: &Path) -> Result<(PdfExtractor, String)> {
    Validator::validate_pdf(path)?;
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let extractor = PdfExtractor::from_bytes(&bytes)?;
    Ok((extractor, compute_hash(&bytes)))
}

fn build_pipeline(config: &Config, template: Option<&Path>) -> Result<BillPipeline> {
    let pipeline = BillPipeline::new(config).context("Failed to build pipeline")?;
    Ok(match template {
        Some(path) => pipeline.with_template(PromptTemplate::from_path(path)?),
        None => pipeline,
    })
}

fn cmd_validate(config: &Config, pdf: &Path, json: bool, out: &mut impl Write) -> Result<()> {
    let (extractor, hash) = open_pdf(pdf)?;
    let pipeline = build_pipeline(config, None)?;

    // nothing is reported until the document has pages and passes
    let result = pipeline.validate(&extractor)?;

    if json {
        let output = serde_json::json!({
            "document_sha256": hash,
            "total_pages": extractor.page_count(),
            "classification": result,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(
            out,
            "{}",
            format_success(&format!("Total Pages Detected: {}", extractor.page_count()))
        )?;
        writeln!(out, "{}", format_success("Valid Government Bill detected."))?;
        writeln!(
            out,
            "{}",
            format_info(&format!(
                "Keyword hits: {} ({})",
                result.keyword_hit_count,
                result.matched_keywords.join(", ")
            ))
        )?;
        if result.mandatory_phrase_matched {
            writeln!(
                out,
                "{}",
                format_info(&format!(
                    "Mandatory phrases: {}",
                    result.matched_phrases.join(", ")
                ))
            )?;
        }
    }

    Ok(())
}

fn cmd_normalize(config: &Config, pdf: &Path) -> Result<()> {
    let mut config = config.clone();
    if config.pipeline.normalization == NormalizationMode::Disabled {
        config.pipeline.normalization = NormalizationMode::AfterValidation;
    }

    let (extractor, _) = open_pdf(pdf)?;
    let prepared = build_pipeline(&config, None)?.prepare(&extractor)?;

    println!("{}", prepared.normalized_text.unwrap_or_default());
    Ok(())
}

fn cmd_prompt(config: &Config, pdf: &Path, template: Option<&Path>) -> Result<()> {
    let (extractor, _) = open_pdf(pdf)?;
    let prepared = build_pipeline(config, template)?.prepare(&extractor)?;

    println!("{}", prepared.prompt);
    Ok(())
}

async fn cmd_analyze(config: &Config, pdf: &Path, options: AnalyzeOptions) -> Result<()> {
    let api_key = Validator::validate_api_key(
        options
            .api_key
            .as_deref()
            .or(config.summarizer.api_key.as_deref()),
    )?;

    let mut progress = StageProgress::new(4, !options.json, options.colored);

    progress.advance("Loading PDF");
    let (extractor, hash) = open_pdf(pdf)?;
    let pipeline = build_pipeline(config, options.template.as_deref())?;

    progress.advance("Validating bill");
    let mut prepared = pipeline.prepare(&extractor)?;
    prepared.report.document_sha256 = Some(hash);

    if !options.json {
        println!(
            "{}",
            format_success(&format!(
                "Total Pages Detected: {}",
                prepared.report.total_pages
            ))
        );
        println!("{}", format_success("Valid Government Bill detected."));
    }

    progress.advance("Preparing prompt");
    if !options.json {
        let message = match &prepared.normalized_text {
            Some(text) => format!(
                "Full text extracted and normalized ({} -> {} chars): {}",
                prepared.raw_text.len(),
                text.len(),
                Validator::truncate_text(text, 80)
            ),
            None => format!("Full text extracted ({} chars)", prepared.raw_text.len()),
        };
        println!("{}", format_info(&message));
    }

    progress.advance("Generating summary");
    let client = GeminiClient::from_config(&config.summarizer, api_key)?;
    let spinner = progress.spinner("Generating summary using Gemini AI...");
    let result = pipeline.summarize(prepared, &client).await;
    spinner.finish_and_clear();
    let report = result?;

    info!(
        "Analysis complete in {:.2}s",
        progress.elapsed().as_secs_f64()
    );

    if options.json {
        println!("{}", report.to_json(options.pretty)?);
    } else {
        println!("\nAI Generated Summary\n{}\n", "=".repeat(80));
        println!("{}", report.summary.as_deref().unwrap_or_default());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, dictionary};
    use tempfile::TempDir;

    fn write_pdf_without_pages(dir: &TempDir) -> PathBuf {
        let mut doc = lopdf::Document::with_version("1.7");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0i64,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.path().join("empty.pdf");
        doc.save(&path).unwrap();
        path
    }

    #[test]
    fn test_validate_reports_nothing_for_pageless_pdf() {
        let dir = TempDir::new().unwrap();
        let pdf = write_pdf_without_pages(&dir);
        let mut out = Vec::new();

        let err = cmd_validate(&Config::default_config(), &pdf, false, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::EmptyDocument)
        ));
        assert!(out.is_empty());
    }
}
