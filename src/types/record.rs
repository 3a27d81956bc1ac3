use crate::error::{Result, ToptierError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use url::Url;

pub const HUGGINGFACE_DOMAIN: &str = "huggingface.co";

/// Facts scraped from one model page. Optional text stays `None` when the
/// page did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub huggingface_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub readme_content: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub model_metadata: Map<String, Value>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub safetensors: Option<bool>,
    #[serde(default)]
    pub model_size: Option<String>,
    #[serde(default)]
    pub tensor_types: Vec<String>,
}

impl ModelRecord {
    #[cfg(test)]
    pub fn new(model_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let record: ModelRecord = serde_json::from_str(content)?;
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model_name.trim().is_empty() {
            return Err(ToptierError::InvalidRecord(
                "model_name must not be empty".to_string(),
            ));
        }
        if self.display_name.trim().is_empty() {
            return Err(ToptierError::InvalidRecord(
                "display_name must not be empty".to_string(),
            ));
        }
        if let Some(url) = &self.huggingface_url {
            if !is_huggingface_model_url(url) {
                return Err(ToptierError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }

    pub fn has_source_url(&self) -> bool {
        self.huggingface_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn readme_lower(&self) -> String {
        lower_or_empty(self.readme_content.as_deref())
    }

    pub fn description_lower(&self) -> String {
        lower_or_empty(self.description.as_deref())
    }

    pub fn license_lower(&self) -> String {
        lower_or_empty(self.license.as_deref())
    }

    pub fn name_lower(&self) -> String {
        self.model_name.to_lowercase()
    }

    pub fn tags_lower(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn lower_or_empty(value: Option<&str>) -> String {
    value.map(str::to_lowercase).unwrap_or_default()
}

/// Model pages live at `/model` or `/org/model` on the hub.
pub fn is_huggingface_model_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    if parsed.host_str() != Some(HUGGINGFACE_DOMAIN) {
        return false;
    }
    let segments = parsed
        .path_segments()
        .map(|segments| segments.filter(|part| !part.is_empty()).count())
        .unwrap_or(0);
    (1..=2).contains(&segments)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    #[serde(rename = "Text Generation")]
    TextGeneration,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Natural Language Processing")]
    Nlp,
    #[serde(rename = "Multimodal Models")]
    Multimodal,
    #[serde(rename = "Audio Processing")]
    Audio,
    #[serde(rename = "Video Generation")]
    Video,
    #[serde(rename = "Reinforcement Learning")]
    ReinforcementLearning,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::ImageGeneration,
        Category::TextGeneration,
        Category::ComputerVision,
        Category::Nlp,
        Category::Multimodal,
        Category::Audio,
        Category::Video,
        Category::ReinforcementLearning,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageGeneration => "Image Generation",
            Self::TextGeneration => "Text Generation",
            Self::ComputerVision => "Computer Vision",
            Self::Nlp => "Natural Language Processing",
            Self::Multimodal => "Multimodal Models",
            Self::Audio => "Audio Processing",
            Self::Video => "Video Generation",
            Self::ReinforcementLearning => "Reinforcement Learning",
            Self::Other => "Other",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ImageGeneration => "image-generation",
            Self::TextGeneration => "text-generation",
            Self::ComputerVision => "computer-vision",
            Self::Nlp => "nlp",
            Self::Multimodal => "multimodal",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::ReinforcementLearning => "reinforcement-learning",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ToptierError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| {
                category.as_str().to_lowercase() == normalized || category.key() == normalized
            })
            .ok_or_else(|| ToptierError::UnknownCategory(value.to_string()))
    }
}
