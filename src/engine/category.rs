use super::rules::contains_any;
use crate::types::record::{Category, ModelRecord};

/// Checked in order; the first category with a keyword hit wins.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::ImageGeneration,
        &[
            "text-to-image",
            "image-generation",
            "diffusion",
            "stable-diffusion",
            "sdxl",
            "dall-e",
            "midjourney",
            "image generation",
            "z-image",
            "flux",
            "imagen",
            "kandinsky",
            "pixart",
            "image-to-image",
        ],
    ),
    (
        Category::TextGeneration,
        &[
            "text-generation",
            "llm",
            "language-model",
            "gpt",
            "llama",
            "mistral",
            "chat",
            "instruct",
            "causal-lm",
        ],
    ),
    (
        Category::ComputerVision,
        &[
            "image-classification",
            "object-detection",
            "segmentation",
            "yolo",
            "vision",
            "cnn",
            "resnet",
            "vit",
        ],
    ),
    (
        Category::Nlp,
        &[
            "text-classification",
            "ner",
            "pos",
            "sentiment",
            "question-answering",
            "summarization",
            "translation",
        ],
    ),
    (
        Category::Multimodal,
        &[
            "multimodal",
            "vision-language",
            "clip",
            "image-text",
            "visual-question-answering",
        ],
    ),
    (
        Category::Audio,
        &[
            "audio", "speech", "asr", "tts", "whisper", "music", "voice", "sound",
        ],
    ),
    (
        Category::Video,
        &["video", "video-generation", "video-to-video"],
    ),
    (
        Category::ReinforcementLearning,
        &["reinforcement-learning", "rl", "reward-model", "ppo", "dqn"],
    ),
];

pub fn classify(record: &ModelRecord) -> Category {
    let text = format!(
        "{} {} {}",
        record.tags_lower(),
        record.description_lower(),
        record.name_lower()
    );
    let category = CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other);
    tracing::debug!(model = %record.model_name, %category, "classified");
    category
}
