use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToptierError {
    #[error("invalid model record: {0}")]
    InvalidRecord(String),

    #[error("not a hugging face model url: {0}")]
    InvalidUrl(String),

    #[error("invalid article: {0}")]
    InvalidArticle(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("factor '{factor}' is not part of the {scheme} scheme")]
    UnknownFactor { factor: String, scheme: String },

    #[error("{factor} score out of range: {value} (expected 0-100)")]
    ScoreOutOfRange { factor: String, value: f64 },

    #[error("unable to resolve {0} score")]
    UnresolvedScore(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToptierError {
    /// Errors caused by the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord(_)
                | Self::InvalidUrl(_)
                | Self::InvalidArticle(_)
                | Self::UnknownCategory(_)
                | Self::UnknownFactor { .. }
                | Self::ScoreOutOfRange { .. }
                | Self::UnresolvedScore(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ToptierError>;
