pub mod json;
pub mod md;

use crate::error::ToptierError;
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::ScoresResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    record: &ModelRecord,
    category: Category,
    scores: &ScoresResult,
    format: OutputFormat,
) -> Result<String, ToptierError> {
    match format {
        OutputFormat::Json => json::to_json(scores).map_err(ToptierError::Json),
        OutputFormat::Md => Ok(md::to_markdown(record, category, scores)),
    }
}
