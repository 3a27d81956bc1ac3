use super::rules::{Field, Rule, RuleKind, RuleSet, ScoringContext};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{Factor, Score};

const TEXT: &[Field] = &[Field::Readme, Field::Name];

pub const SPEED_KEYWORDS: &[&str] = &[
    "turbo", "fast", "quick", "efficient", "lite", "mini", "tiny", "small",
];

pub const OPTIMIZATION_KEYWORDS: &[&str] = &[
    "optimized",
    "quantized",
    "distilled",
    "pruned",
    "onnx",
    "tensorrt",
];

pub const LATENCY_KEYWORDS: &[&str] = &[
    "sub-second",
    "real-time",
    "instant",
    "low-latency",
    "ms",
];

pub static SPEED_RULES: RuleSet = RuleSet {
    factor: Factor::Speed,
    base: 60.0,
    rules: &[
        Rule {
            id: "speed.keywords",
            kind: RuleKind::CountCapped {
                fields: TEXT,
                keywords: SPEED_KEYWORDS,
                weight: 8.0,
                cap: None,
            },
        },
        Rule {
            id: "speed.optimization",
            kind: RuleKind::CountCapped {
                fields: TEXT,
                keywords: OPTIMIZATION_KEYWORDS,
                weight: 5.0,
                cap: None,
            },
        },
        Rule {
            id: "speed.latency",
            kind: RuleKind::CountCapped {
                fields: TEXT,
                keywords: LATENCY_KEYWORDS,
                weight: 6.0,
                cap: None,
            },
        },
    ],
};

/// Inference speed and efficiency as seen by the user.
pub fn speed_score(record: &ModelRecord, category: Category) -> Score {
    SPEED_RULES.evaluate(&ScoringContext::new(record, category))
}
