mod cli;
mod config;
mod engine;
mod error;
mod preview;
mod report;
mod types;

use crate::error::ToptierError;
use crate::types::preview::{GeneratedArticle, SocialPost};
use crate::types::record::{is_huggingface_model_url, Category, ModelRecord};
use clap::Parser;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_record(path: &Path) -> Result<ModelRecord, ToptierError> {
    let content = std::fs::read_to_string(path)?;
    ModelRecord::from_json(&content)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ToptierError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn resolve_category(raw: Option<&str>, record: &ModelRecord) -> Result<Category, ToptierError> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(engine::classify(record)),
    }
}

fn run() -> Result<i32, ToptierError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let cwd = std::env::current_dir()?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let scoring = config::load_scoring_config(&cwd, cli.config.as_deref())?;
            let record = read_record(&cmd.record)?;
            let category = resolve_category(cmd.category.as_deref(), &record)?;
            let scores = engine::score_standard(
                &record,
                category,
                cmd.quality,
                cmd.speed,
                cmd.freedom,
                &scoring,
            )?;
            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&record, category, &scores, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let record = read_record(&cmd.record)?;
            println!("{}", engine::classify(&record));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tags(cmd) => {
            let record = read_record(&cmd.record)?;
            for tag in engine::assign_tags(&record) {
                println!("{} {} {}", tag.color_hex, tag.tag_name, tag.description);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Preview(cmd) => {
            let scoring = config::load_scoring_config(&cwd, cli.config.as_deref())?;
            let record = read_record(&cmd.record)?;
            let category = cmd
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?;
            let article = cmd
                .article
                .as_deref()
                .map(read_json::<GeneratedArticle>)
                .transpose()?;
            let social = cmd
                .social
                .as_deref()
                .map(read_json::<SocialPost>)
                .transpose()?;

            let session = preview::build_preview(
                record,
                category,
                article,
                social,
                &scoring,
                chrono::Utc::now(),
            )?;
            let path = preview::write_preview(&cmd.out, &session)?;
            println!(
                "preview {}: {} ({:.2}/100, {} Tier)",
                session.preview_id,
                session.model_data.display_name,
                session.scores_data.overall_score,
                session.scores_data.tier
            );
            println!("preview file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Methodology => {
            let scoring = config::load_scoring_config(&cwd, cli.config.as_deref())?;
            print!("{}", engine::methodology(&scoring));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ValidateUrl(cmd) => {
            if !is_huggingface_model_url(&cmd.url) {
                return Err(ToptierError::InvalidUrl(cmd.url));
            }
            println!("ok: {}", cmd.url);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
