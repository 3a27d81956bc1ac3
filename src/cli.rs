use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "toptier",
    version,
    about = "Score, tier and package previews of hosted AI models"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Scoring config file (defaults to toptier.toml layers)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a scraped model record
    Score(ScoreCommand),
    /// Print the category a record classifies into
    Classify(RecordCommand),
    /// Print the display tags for a record
    Tags(RecordCommand),
    /// Build a preview package from a record and generated content
    Preview(PreviewCommand),
    /// Print the scoring methodology in effect
    Methodology,
    /// Check that a URL points at a Hugging Face model page
    ValidateUrl(ValidateUrlCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct RecordCommand {
    /// Model record JSON file
    pub record: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Model record JSON file
    pub record: PathBuf,
    /// Category name; classified from the record when omitted
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub quality: Option<f64>,
    #[arg(long)]
    pub speed: Option<f64>,
    #[arg(long)]
    pub freedom: Option<f64>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PreviewCommand {
    /// Model record JSON file
    pub record: PathBuf,
    /// Generated article JSON file
    #[arg(long)]
    pub article: Option<PathBuf>,
    /// Generated social post JSON file
    #[arg(long)]
    pub social: Option<PathBuf>,
    #[arg(long)]
    pub category: Option<String>,
    /// Directory receiving previews/<id>.json
    #[arg(long, default_value = "data")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct ValidateUrlCommand {
    pub url: String,
}
