use crate::error::{Result, ToptierError};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{Score, ScoresResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_EXCERPT_CHARS: usize = 250;
pub const MAX_SOCIAL_CHARS: usize = 3000;
pub const MAX_HASHTAGS: usize = 5;

fn default_read_time() -> u32 {
    5
}

fn default_author() -> String {
    "TopTierModels AI".to_string()
}

/// Article produced by the generative collaborator. Its scores, when
/// present, take precedence over the heuristic calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default = "default_read_time")]
    pub read_time_minutes: u32,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub seo_keywords: Vec<String>,
    #[serde(default)]
    pub quality_score: Option<Score>,
    #[serde(default)]
    pub speed_score: Option<Score>,
    #[serde(default)]
    pub freedom_score: Option<Score>,
    #[serde(default)]
    pub safetensors: Option<bool>,
    #[serde(default)]
    pub model_size: Option<String>,
    #[serde(default)]
    pub tensor_types: Vec<String>,
}

impl GeneratedArticle {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ToptierError::InvalidArticle(
                "title must not be empty".to_string(),
            ));
        }
        let excerpt_chars = self.excerpt.chars().count();
        if excerpt_chars > MAX_EXCERPT_CHARS {
            return Err(ToptierError::InvalidArticle(format!(
                "excerpt is {excerpt_chars} characters (max {MAX_EXCERPT_CHARS})"
            )));
        }
        Ok(())
    }
}

/// Social post produced by the generative collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub content: String,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub character_count: usize,
}

impl SocialPost {
    pub fn validate(&self) -> Result<()> {
        let chars = self.content.chars().count();
        if chars > MAX_SOCIAL_CHARS {
            return Err(ToptierError::InvalidArticle(format!(
                "social post is {chars} characters (max {MAX_SOCIAL_CHARS})"
            )));
        }
        if self.hashtags.len() > MAX_HASHTAGS {
            return Err(ToptierError::InvalidArticle(format!(
                "social post has {} hashtags (max {MAX_HASHTAGS})",
                self.hashtags.len()
            )));
        }
        Ok(())
    }
}

/// Sessions are always written as drafts; the publisher flips the stored
/// status once the record is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
}

/// Everything the preview UI and publisher need for one model.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSession {
    pub preview_id: String,
    pub model_data: ModelRecord,
    pub article_data: Option<GeneratedArticle>,
    pub linkedin_data: Option<SocialPost>,
    pub scores_data: ScoresResult,
    pub category: Category,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub publish_status: PublishStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_defaults_fill_optional_fields() {
        let article: GeneratedArticle =
            serde_json::from_str(r#"{"title": "Photon", "content": "body"}"#)
                .expect("article should parse");
        assert_eq!(article.read_time_minutes, 5);
        assert_eq!(article.author, "TopTierModels AI");
        assert_eq!(article.quality_score, None);
        assert!(article.validate().is_ok());
    }

    #[test]
    fn long_excerpt_is_rejected() {
        let article: GeneratedArticle = serde_json::from_str(&format!(
            r#"{{"title": "Photon", "content": "body", "excerpt": "{}"}}"#,
            "x".repeat(MAX_EXCERPT_CHARS + 1)
        ))
        .expect("article should parse");
        assert!(matches!(
            article.validate(),
            Err(ToptierError::InvalidArticle(_))
        ));
    }

    #[test]
    fn social_post_limits() {
        let mut post = SocialPost {
            content: "Meet Photon".to_string(),
            hook: None,
            key_points: vec![],
            call_to_action: None,
            hashtags: vec!["#ai".to_string(); 5],
            character_count: 0,
        };
        assert!(post.validate().is_ok());

        post.hashtags.push("#more".to_string());
        assert!(post.validate().is_err());

        post.hashtags.truncate(1);
        post.content = "y".repeat(MAX_SOCIAL_CHARS + 1);
        assert!(post.validate().is_err());
    }
}
