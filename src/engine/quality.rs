use super::rules::{Field, Rule, RuleKind, RuleSet, ScoringContext};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{Factor, Score};

const TEXT: &[Field] = &[Field::Readme, Field::Description];

pub const QUALITY_KEYWORDS: &[&str] = &[
    "state-of-the-art",
    "sota",
    "best",
    "high-quality",
    "photorealistic",
    "accurate",
    "precise",
    "excellent",
    "superior",
    "outperforms",
];

pub const BENCHMARK_KEYWORDS: &[&str] = &[
    "benchmark",
    "evaluation",
    "score",
    "fid",
    "accuracy",
    "bleu",
];

pub static QUALITY_RULES: RuleSet = RuleSet {
    factor: Factor::Quality,
    base: 60.0,
    rules: &[
        Rule {
            id: "quality.keywords",
            kind: RuleKind::CountCapped {
                fields: TEXT,
                keywords: QUALITY_KEYWORDS,
                weight: 4.0,
                cap: Some(20.0),
            },
        },
        Rule {
            id: "quality.benchmarks",
            kind: RuleKind::CountCapped {
                fields: TEXT,
                keywords: BENCHMARK_KEYWORDS,
                weight: 3.0,
                cap: Some(10.0),
            },
        },
    ],
};

/// Output quality: accuracy, realism, coherence.
pub fn quality_score(record: &ModelRecord, category: Category) -> Score {
    QUALITY_RULES.evaluate(&ScoringContext::new(record, category))
}
