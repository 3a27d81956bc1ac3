use crate::engine;
use crate::error::{Result, ToptierError};
use crate::types::preview::{GeneratedArticle, PreviewSession, PublishStatus, SocialPost};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{ScoringConfig, SuppliedScores};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const PREVIEW_DIR: &str = "previews";
const PREVIEW_ID_LEN: usize = 8;

/// Classifies and scores the record, then bundles it with the generated
/// content. Article scores are used as supplied scores.
pub fn build_preview(
    record: ModelRecord,
    category: Option<Category>,
    article: Option<GeneratedArticle>,
    social: Option<SocialPost>,
    config: &ScoringConfig,
    created_at: DateTime<Utc>,
) -> Result<PreviewSession> {
    record.validate()?;
    let category = category.unwrap_or_else(|| engine::classify(&record));

    let article = article
        .map(|mut article| {
            article.validate()?;
            if article.slug.as_deref().map_or(true, |slug| slug.trim().is_empty()) {
                article.slug = Some(slugify(&record.display_name));
            }
            Ok::<_, ToptierError>(article)
        })
        .transpose()?;
    let social = social
        .map(|mut post| {
            post.validate()?;
            post.character_count = post.content.chars().count();
            Ok::<_, ToptierError>(post)
        })
        .transpose()?;

    let supplied = article
        .as_ref()
        .map(|article| {
            SuppliedScores::standard(
                article.quality_score,
                article.speed_score,
                article.freedom_score,
            )
        })
        .unwrap_or_default();
    let scores = engine::score(&record, category, &supplied, config)?;

    let preview_id = preview_id(&record, created_at);
    tracing::info!(
        %preview_id,
        model = %record.model_name,
        %category,
        overall_score = scores.overall_score,
        tier = %scores.tier,
        "built preview"
    );

    Ok(PreviewSession {
        preview_id,
        images: record.images.clone(),
        model_data: record,
        article_data: article,
        linkedin_data: social,
        scores_data: scores,
        category,
        created_at,
        publish_status: PublishStatus::Draft,
    })
}

pub fn write_preview(out_dir: &Path, session: &PreviewSession) -> Result<PathBuf> {
    let dir = out_dir.join(PREVIEW_DIR);
    fs::create_dir_all(&dir).map_err(ToptierError::Io)?;
    let out_path = dir.join(format!("{}.json", session.preview_id));
    let json = serde_json::to_string_pretty(session)?;
    fs::write(&out_path, json).map_err(ToptierError::Io)?;
    Ok(out_path)
}

pub fn preview_id(record: &ModelRecord, created_at: DateTime<Utc>) -> String {
    let source = record
        .huggingface_url
        .as_deref()
        .unwrap_or(record.model_name.as_str());
    let digest = Sha256::digest(format!("{source}|{}", created_at.to_rfc3339()).as_bytes());
    let hex = format!("{digest:x}");
    hex[..PREVIEW_ID_LEN].to_string()
}

pub fn slugify(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "-")
}
