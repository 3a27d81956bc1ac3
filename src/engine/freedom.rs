use super::rules::{Condition, Field, KeywordGroup, Rule, RuleKind, RuleSet, ScoringContext};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{Factor, Score};

const LICENSE: &[Field] = &[Field::License];

pub const PERMISSIVE_LICENSES: &[&str] = &["mit", "apache", "bsd", "unlicense", "cc0", "wtfpl"];
pub const SEMI_PERMISSIVE_LICENSES: &[&str] = &["cc-by", "lgpl", "mpl"];
pub const RESTRICTIVE_LICENSES: &[&str] = &["gpl", "agpl", "cc-by-nc", "non-commercial"];

// The license tiers are separate rules, so an "lgpl" license earns both the
// semi-permissive and the restrictive bonus.
pub static FREEDOM_RULES: RuleSet = RuleSet {
    factor: Factor::Freedom,
    base: 50.0,
    rules: &[
        Rule {
            id: "freedom.permissive",
            kind: RuleKind::FirstMatch {
                fields: LICENSE,
                groups: &[KeywordGroup {
                    name: "permissive",
                    keywords: PERMISSIVE_LICENSES,
                    bonus: 30.0,
                }],
            },
        },
        Rule {
            id: "freedom.semi_permissive",
            kind: RuleKind::FirstMatch {
                fields: LICENSE,
                groups: &[KeywordGroup {
                    name: "semi-permissive",
                    keywords: SEMI_PERMISSIVE_LICENSES,
                    bonus: 20.0,
                }],
            },
        },
        Rule {
            id: "freedom.restrictive",
            kind: RuleKind::FirstMatch {
                fields: LICENSE,
                groups: &[KeywordGroup {
                    name: "restrictive",
                    keywords: RESTRICTIVE_LICENSES,
                    bonus: 10.0,
                }],
            },
        },
        Rule {
            id: "freedom.open_weights",
            kind: RuleKind::Flat {
                condition: Condition::Any(&[
                    Condition::AnyKeyword {
                        fields: &[Field::Tags],
                        keywords: &["open"],
                    },
                    Condition::AnyKeyword {
                        fields: &[Field::Readme],
                        keywords: &["weights"],
                    },
                ]),
                bonus: 10.0,
            },
        },
        Rule {
            id: "freedom.hosted",
            kind: RuleKind::Flat {
                condition: Condition::SourceUrlPresent,
                bonus: 10.0,
            },
        },
    ],
};

/// Licensing openness, cost and deployment flexibility.
pub fn freedom_score(record: &ModelRecord, category: Category) -> Score {
    FREEDOM_RULES.evaluate(&ScoringContext::new(record, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn licensed(license: &str) -> ModelRecord {
        let mut record = ModelRecord::new("org/model", "Model");
        record.license = Some(license.to_string());
        record
    }

    #[test]
    fn rule_table_is_pinned() {
        assert_eq!(FREEDOM_RULES.base, 50.0);
        let ids: Vec<_> = FREEDOM_RULES.rules.iter().map(|rule| rule.id).collect();
        assert_eq!(
            ids,
            vec![
                "freedom.permissive",
                "freedom.semi_permissive",
                "freedom.restrictive",
                "freedom.open_weights",
                "freedom.hosted",
            ]
        );
        assert_eq!(
            PERMISSIVE_LICENSES,
            &["mit", "apache", "bsd", "unlicense", "cc0", "wtfpl"]
        );
        assert_eq!(SEMI_PERMISSIVE_LICENSES, &["cc-by", "lgpl", "mpl"]);
        assert_eq!(
            RESTRICTIVE_LICENSES,
            &["gpl", "agpl", "cc-by-nc", "non-commercial"]
        );
    }

    #[test]
    fn unknown_license_keeps_base_score() {
        let record = ModelRecord::new("org/model", "Model");
        assert_eq!(freedom_score(&record, Category::Other), 50.0);
    }

    #[test]
    fn license_tiers() {
        assert_eq!(freedom_score(&licensed("MIT"), Category::Other), 80.0);
        assert_eq!(freedom_score(&licensed("apache-2.0"), Category::Other), 80.0);
        assert_eq!(freedom_score(&licensed("gpl-3.0"), Category::Other), 60.0);
        assert_eq!(freedom_score(&licensed("openrail"), Category::Other), 50.0);
    }

    #[test]
    fn overlapping_license_tiers_stack() {
        // lgpl: semi-permissive (+20) and restrictive via "gpl" (+10)
        assert_eq!(freedom_score(&licensed("lgpl-2.1"), Category::Other), 80.0);
        // cc-by-nc-4.0: semi-permissive via "cc-by" (+20) and restrictive (+10)
        assert_eq!(
            freedom_score(&licensed("cc-by-nc-4.0"), Category::Other),
            80.0
        );
    }

    #[test]
    fn open_signals_and_hosting_add_flat_bonuses() {
        let mut record = licensed("mit");
        record.tags = vec!["Open-Source".to_string()];
        record.huggingface_url = Some("https://huggingface.co/org/model".to_string());
        assert_eq!(freedom_score(&record, Category::Other), 100.0);

        let mut record = ModelRecord::new("org/model", "Model");
        record.readme_content = Some("Download the weights here".to_string());
        assert_eq!(freedom_score(&record, Category::Other), 60.0);
    }
}
