pub mod category;
pub mod freedom;
pub mod legacy;
pub mod quality;
pub mod rules;
pub mod speed;
pub mod tags;

use crate::error::{Result, ToptierError};
use crate::types::record::{Category, ModelRecord};
use crate::types::scoring::{
    round2, Factor, FactorScore, Score, ScoresResult, ScoringConfig, SuppliedScores, MAX_SCORE,
    MIN_SCORE,
};
use rules::{RuleSet, ScoringContext};
use serde_json::Map;

pub use category::classify;
pub use tags::assign_tags;

pub const BENCHMARK_KEYS: &[&str] = &[
    "accuracy",
    "f1",
    "bleu",
    "rouge",
    "perplexity",
    "fid",
    "inception_score",
    "clip_score",
];

pub fn rules_for(factor: Factor) -> &'static RuleSet {
    match factor {
        Factor::Quality => &quality::QUALITY_RULES,
        Factor::Speed => &speed::SPEED_RULES,
        Factor::Freedom => &freedom::FREEDOM_RULES,
        Factor::Performance => &legacy::PERFORMANCE_RULES,
        Factor::Usability => &legacy::USABILITY_RULES,
        Factor::Innovation => &legacy::INNOVATION_RULES,
        Factor::Adoption => &legacy::ADOPTION_RULES,
        Factor::Production => &legacy::PRODUCTION_RULES,
    }
}

/// Heuristic score for one factor.
pub fn calculate(factor: Factor, record: &ModelRecord, category: Category) -> Score {
    match factor {
        Factor::Quality => quality::quality_score(record, category),
        Factor::Speed => speed::speed_score(record, category),
        Factor::Freedom => freedom::freedom_score(record, category),
        _ => rules_for(factor).evaluate(&ScoringContext::new(record, category)),
    }
}

/// Scores one model. Supplied values win over the heuristic calculators; the
/// overall score is the weighted sum of the resolved factors.
pub fn score(
    record: &ModelRecord,
    category: Category,
    supplied: &SuppliedScores,
    config: &ScoringConfig,
) -> Result<ScoresResult> {
    record.validate()?;
    let scheme = config.scheme;
    if let Some(foreign) = supplied
        .factors()
        .find(|factor| !scheme.factors().contains(factor))
    {
        return Err(ToptierError::UnknownFactor {
            factor: foreign.to_string(),
            scheme: scheme.to_string(),
        });
    }

    let mut factor_scores = Vec::with_capacity(scheme.factors().len());
    let mut overall = 0.0;
    for &factor in scheme.factors() {
        let value = resolve(factor, supplied.get(factor), record, category)?;
        let weight = config
            .weights
            .get(factor)
            .ok_or_else(|| ToptierError::ConfigParse(format!("weights.{factor} is missing")))?;
        overall += value * weight;
        factor_scores.push(FactorScore {
            factor,
            score: round2(value),
        });
    }

    let overall_score = round2(overall).clamp(MIN_SCORE, MAX_SCORE);
    // Tier follows the rounded score so the published value and tier agree;
    // an unrounded 89.996 is shown as 90.0 and is tier S.
    let tier = config.thresholds.tier_for(overall_score);
    tracing::debug!(
        model = %record.model_name,
        %category,
        %scheme,
        overall_score,
        %tier,
        supplied = !supplied.is_empty(),
        "scored model"
    );

    Ok(ScoresResult {
        scheme,
        overall_score,
        tier,
        factor_scores,
        tags: assign_tags(record),
        benchmarks: extract_benchmarks(record),
        scoring_methodology: methodology(config),
    })
}

/// Shorthand for the three standard factors.
pub fn score_standard(
    record: &ModelRecord,
    category: Category,
    quality: Option<Score>,
    speed: Option<Score>,
    freedom: Option<Score>,
    config: &ScoringConfig,
) -> Result<ScoresResult> {
    score(
        record,
        category,
        &SuppliedScores::standard(quality, speed, freedom),
        config,
    )
}

fn resolve(
    factor: Factor,
    supplied: Option<Score>,
    record: &ModelRecord,
    category: Category,
) -> Result<Score> {
    let value = match supplied {
        Some(value) => {
            tracing::debug!(%factor, value, "using supplied score");
            value
        }
        None => calculate(factor, record, category),
    };
    if !value.is_finite() {
        return Err(ToptierError::UnresolvedScore(factor.to_string()));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ToptierError::ScoreOutOfRange {
            factor: factor.to_string(),
            value,
        });
    }
    Ok(value)
}

pub fn extract_benchmarks(record: &ModelRecord) -> Map<String, serde_json::Value> {
    BENCHMARK_KEYS
        .iter()
        .filter_map(|key| {
            record
                .model_metadata
                .get(*key)
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}

pub fn methodology(config: &ScoringConfig) -> String {
    let formula = config
        .weights
        .entries()
        .iter()
        .map(|(factor, weight)| format!("({} × {})", factor.label(), weight))
        .collect::<Vec<_>>()
        .join(" + ");

    let mut output = format!("Overall Score = {formula}\n\n");
    for factor in config.scheme.factors() {
        output.push_str(&format!(
            "{} Score (0-100): {}\n",
            factor.label(),
            factor_summary(*factor)
        ));
    }

    output.push_str("\nVisual Tags indicate accessibility:\n");
    output.push_str("- Open Source (green): Full source available\n");
    output.push_str("- Open Weights (light green): Model weights downloadable\n");
    output.push_str("- Free (blue): No cost to use\n");
    output.push_str("- Freemium (light blue): Free tier with paid options\n");
    output.push_str("- Closed/Paid (red): Requires payment\n");

    output.push_str("\nTier Assignment:\n");
    let entries = config.thresholds.entries();
    for (index, (tier, threshold)) in entries.iter().enumerate() {
        let upper = if index == 0 {
            MAX_SCORE
        } else {
            entries[index - 1].1 - 1.0
        };
        output.push_str(&format!(
            "- {} Tier: {}-{} ({})\n",
            tier,
            threshold,
            upper,
            tier.label()
        ));
    }
    output
}

fn factor_summary(factor: Factor) -> &'static str {
    match factor {
        Factor::Quality => "Output quality, accuracy, realism, coherence",
        Factor::Speed => "Inference speed, efficiency, time-to-result",
        Factor::Freedom => "Licensing openness, cost, deployment flexibility",
        Factor::Performance => "Benchmark results and claimed capability",
        Factor::Usability => "Documentation and ease of getting started",
        Factor::Innovation => "Novelty of approach or architecture",
        Factor::Adoption => "Community traction and ecosystem support",
        Factor::Production => "Readiness for deployment, including license terms",
    }
}
