//! Rule tables for the score calculators.
//!
//! Every calculator is a base score plus an ordered list of [`Rule`]s. Rules
//! are plain data so tables can be inspected and tested without running the
//! summation.

use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{Factor, Score, MAX_SCORE, MIN_SCORE};

/// Record fields a rule can search. Text is lowercased; missing text is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Readme,
    Description,
    Name,
    License,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    SourceUrlPresent,
    HasText(Field),
    AnyKeyword {
        fields: &'static [Field],
        keywords: &'static [&'static str],
    },
    CategoryIn(&'static [Category]),
    Any(&'static [Condition]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub bonus: Score,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Keywords present × weight, limited to `cap` when set.
    CountCapped {
        fields: &'static [Field],
        keywords: &'static [&'static str],
        weight: Score,
        cap: Option<Score>,
    },
    /// Only the first group with any keyword present contributes.
    FirstMatch {
        fields: &'static [Field],
        groups: &'static [KeywordGroup],
    },
    Flat { condition: Condition, bonus: Score },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub id: &'static str,
    pub kind: RuleKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSet {
    pub factor: Factor,
    pub base: Score,
    pub rules: &'static [Rule],
}

/// What a single evaluation sees: the record plus its category.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub record: &'a ModelRecord,
    pub category: Category,
}

impl<'a> ScoringContext<'a> {
    pub fn new(record: &'a ModelRecord, category: Category) -> Self {
        Self { record, category }
    }

    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Readme => self.record.readme_lower(),
            Field::Description => self.record.description_lower(),
            Field::Name => self.record.name_lower(),
            Field::License => self.record.license_lower(),
            Field::Tags => self.record.tags_lower(),
        }
    }

    /// Fields are joined without a separator.
    pub fn search_text(&self, fields: &[Field]) -> String {
        fields.iter().map(|field| self.field_text(*field)).collect()
    }
}

pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

impl Condition {
    pub fn holds(&self, ctx: &ScoringContext<'_>) -> bool {
        match self {
            Self::SourceUrlPresent => ctx.record.has_source_url(),
            Self::HasText(field) => !ctx.field_text(*field).trim().is_empty(),
            Self::AnyKeyword { fields, keywords } => {
                contains_any(&ctx.search_text(fields), keywords)
            }
            Self::CategoryIn(categories) => categories.contains(&ctx.category),
            Self::Any(conditions) => conditions.iter().any(|condition| condition.holds(ctx)),
        }
    }
}

impl Rule {
    pub fn contribution(&self, ctx: &ScoringContext<'_>) -> Score {
        match self.kind {
            RuleKind::CountCapped {
                fields,
                keywords,
                weight,
                cap,
            } => {
                let matches = count_matches(&ctx.search_text(fields), keywords) as Score;
                let raw = matches * weight;
                cap.map_or(raw, |cap| raw.min(cap))
            }
            RuleKind::FirstMatch { fields, groups } => {
                let text = ctx.search_text(fields);
                groups
                    .iter()
                    .find(|group| contains_any(&text, group.keywords))
                    .map_or(0.0, |group| {
                        tracing::trace!(
                            rule = self.id,
                            group = group.name,
                            "keyword group matched"
                        );
                        group.bonus
                    })
            }
            RuleKind::Flat { condition, bonus } => {
                if condition.holds(ctx) {
                    bonus
                } else {
                    0.0
                }
            }
        }
    }
}

impl RuleSet {
    pub fn evaluate(&self, ctx: &ScoringContext<'_>) -> Score {
        let mut score = self.base;
        for rule in self.rules {
            let delta = rule.contribution(ctx);
            if delta != 0.0 {
                tracing::trace!(factor = %self.factor, rule = rule.id, delta, "rule matched");
            }
            score += delta;
        }
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}
