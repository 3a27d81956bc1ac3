//! Rule tables for the five-factor scheme (performance, usability,
//! innovation, adoption, production). Selected with `scheme = "legacy"`.

use super::rules::{Condition, Field, KeywordGroup, Rule, RuleKind, RuleSet};
use crate::types::record::Category;
use crate::types::scoring::Factor;

pub static PERFORMANCE_RULES: RuleSet = RuleSet {
    factor: Factor::Performance,
    base: 55.0,
    rules: &[
        Rule {
            id: "performance.claims",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme, Field::Description],
                keywords: &[
                    "state-of-the-art",
                    "sota",
                    "outperforms",
                    "leaderboard",
                    "record",
                ],
                weight: 5.0,
                cap: Some(25.0),
            },
        },
        Rule {
            id: "performance.results",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme],
                keywords: &["results", "benchmark", "mmlu", "accuracy", "win rate"],
                weight: 4.0,
                cap: Some(12.0),
            },
        },
    ],
};

pub static USABILITY_RULES: RuleSet = RuleSet {
    factor: Factor::Usability,
    base: 50.0,
    rules: &[
        Rule {
            id: "usability.docs",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme],
                keywords: &[
                    "usage",
                    "example",
                    "quickstart",
                    "pip install",
                    "tutorial",
                    "pipeline(",
                ],
                weight: 6.0,
                cap: Some(30.0),
            },
        },
        Rule {
            id: "usability.described",
            kind: RuleKind::Flat {
                condition: Condition::HasText(Field::Description),
                bonus: 10.0,
            },
        },
    ],
};

pub static INNOVATION_RULES: RuleSet = RuleSet {
    factor: Factor::Innovation,
    base: 50.0,
    rules: &[
        Rule {
            id: "innovation.novelty",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme, Field::Description],
                keywords: &[
                    "novel",
                    "first",
                    "introduces",
                    "new architecture",
                    "breakthrough",
                    "pioneering",
                ],
                weight: 6.0,
                cap: Some(30.0),
            },
        },
        Rule {
            id: "innovation.frontier_category",
            kind: RuleKind::Flat {
                condition: Condition::CategoryIn(&[Category::Multimodal, Category::Video]),
                bonus: 10.0,
            },
        },
    ],
};

pub static ADOPTION_RULES: RuleSet = RuleSet {
    factor: Factor::Adoption,
    base: 50.0,
    rules: &[
        Rule {
            id: "adoption.community",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme],
                keywords: &[
                    "community",
                    "popular",
                    "widely used",
                    "downloads",
                    "trending",
                    "fine-tuned",
                ],
                weight: 5.0,
                cap: Some(25.0),
            },
        },
        Rule {
            id: "adoption.ecosystem",
            kind: RuleKind::Flat {
                condition: Condition::AnyKeyword {
                    fields: &[Field::Tags],
                    keywords: &["transformers", "diffusers", "gguf"],
                },
                bonus: 10.0,
            },
        },
    ],
};

pub static PRODUCTION_RULES: RuleSet = RuleSet {
    factor: Factor::Production,
    base: 50.0,
    rules: &[
        Rule {
            id: "production.license",
            kind: RuleKind::FirstMatch {
                fields: &[Field::License],
                groups: &[
                    KeywordGroup {
                        name: "permissive",
                        keywords: &["mit", "apache", "bsd"],
                        bonus: 25.0,
                    },
                    KeywordGroup {
                        name: "weak-copyleft",
                        keywords: &["lgpl", "mpl"],
                        bonus: 15.0,
                    },
                    KeywordGroup {
                        name: "copyleft",
                        keywords: &["gpl", "agpl"],
                        bonus: 5.0,
                    },
                ],
            },
        },
        Rule {
            id: "production.deployment",
            kind: RuleKind::CountCapped {
                fields: &[Field::Readme],
                keywords: &[
                    "production",
                    "deploy",
                    "docker",
                    "scalable",
                    "inference endpoint",
                ],
                weight: 5.0,
                cap: Some(20.0),
            },
        },
    ],
};
