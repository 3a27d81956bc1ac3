use crate::error::{Result, ToptierError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

/// One component of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Quality,
    Speed,
    Freedom,
    Performance,
    Usability,
    Innovation,
    Adoption,
    Production,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Speed => "speed",
            Self::Freedom => "freedom",
            Self::Performance => "performance",
            Self::Usability => "usability",
            Self::Innovation => "innovation",
            Self::Adoption => "adoption",
            Self::Production => "production",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quality => "Quality",
            Self::Speed => "Speed",
            Self::Freedom => "Freedom",
            Self::Performance => "Performance",
            Self::Usability => "Usability",
            Self::Innovation => "Innovation",
            Self::Adoption => "Adoption",
            Self::Production => "Production",
        }
    }

    pub fn record_key(&self) -> String {
        format!("{}_score", self.as_str())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Factor {
    type Err = ToptierError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "speed" => Ok(Self::Speed),
            "freedom" => Ok(Self::Freedom),
            "performance" => Ok(Self::Performance),
            "usability" => Ok(Self::Usability),
            "innovation" => Ok(Self::Innovation),
            "adoption" => Ok(Self::Adoption),
            "production" => Ok(Self::Production),
            _ => Err(ToptierError::ConfigParse(format!("unknown factor: {value}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// quality / speed / freedom
    #[default]
    Standard,
    /// performance / usability / innovation / adoption / production
    Legacy,
}

impl Scheme {
    pub fn factors(&self) -> &'static [Factor] {
        match self {
            Self::Standard => &[Factor::Quality, Factor::Speed, Factor::Freedom],
            Self::Legacy => &[
                Factor::Performance,
                Factor::Usability,
                Factor::Innovation,
                Factor::Adoption,
                Factor::Production,
            ],
        }
    }

    pub fn default_weights(&self) -> Weights {
        let entries = match self {
            Self::Standard => vec![
                (Factor::Quality, 0.333),
                (Factor::Speed, 0.333),
                (Factor::Freedom, 0.334),
            ],
            Self::Legacy => vec![
                (Factor::Performance, 0.30),
                (Factor::Usability, 0.25),
                (Factor::Innovation, 0.20),
                (Factor::Adoption, 0.15),
                (Factor::Production, 0.10),
            ],
        };
        Weights { entries }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter tier. Variants are declared worst to best so `Ord` follows quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::S => "Exceptional",
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Adequate",
            Self::D => "Limited",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ToptierError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ToptierError::ConfigParse(format!("unknown tier: {value}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    entries: Vec<(Factor, Score)>,
}

impl Weights {
    pub fn new(entries: Vec<(Factor, Score)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, factor: Factor) -> Option<Score> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == factor)
            .map(|(_, weight)| *weight)
    }

    pub fn entries(&self) -> &[(Factor, Score)] {
        &self.entries
    }

    pub fn sum(&self) -> Score {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    pub fn validate(&self, scheme: Scheme) -> Result<()> {
        for (factor, weight) in &self.entries {
            if !scheme.factors().contains(factor) {
                return Err(ToptierError::ConfigParse(format!(
                    "weights contain factor '{factor}' which the {scheme} scheme does not use"
                )));
            }
            if !(0.0..=1.0).contains(weight) {
                return Err(ToptierError::ConfigParse(format!(
                    "weights.{factor} must be between 0.0 and 1.0"
                )));
            }
        }
        if let Some(missing) = scheme
            .factors()
            .iter()
            .find(|factor| self.get(**factor).is_none())
        {
            return Err(ToptierError::ConfigParse(format!(
                "weights.{missing} is missing"
            )));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(ToptierError::ConfigParse(format!(
                "weights must sum to 1.0 (found {sum:.3})"
            )));
        }
        Ok(())
    }
}

/// Ordered high to low; the last entry must be zero so every score has a tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierThresholds {
    entries: [(Tier, Score); 5],
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            entries: [
                (Tier::S, 90.0),
                (Tier::A, 80.0),
                (Tier::B, 70.0),
                (Tier::C, 60.0),
                (Tier::D, 0.0),
            ],
        }
    }
}

impl TierThresholds {
    pub fn new(s: Score, a: Score, b: Score, c: Score, d: Score) -> Result<Self> {
        let thresholds = Self {
            entries: [
                (Tier::S, s),
                (Tier::A, a),
                (Tier::B, b),
                (Tier::C, c),
                (Tier::D, d),
            ],
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn entries(&self) -> &[(Tier, Score); 5] {
        &self.entries
    }

    pub fn threshold(&self, tier: Tier) -> Score {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == tier)
            .map(|(_, threshold)| *threshold)
            .unwrap_or(MIN_SCORE)
    }

    pub fn tier_for(&self, score: Score) -> Tier {
        self.entries
            .iter()
            .find(|(_, threshold)| score >= *threshold)
            .map(|(tier, _)| *tier)
            .unwrap_or(Tier::D)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((tier, threshold)) = self
            .entries
            .iter()
            .find(|(_, threshold)| !threshold.is_finite())
        {
            return Err(ToptierError::ConfigParse(format!(
                "tiers.{tier} must be a finite number (found {threshold})"
            )));
        }
        for pair in self.entries.windows(2) {
            let (upper, upper_threshold) = pair[0];
            let (lower, lower_threshold) = pair[1];
            if upper_threshold <= lower_threshold {
                return Err(ToptierError::ConfigParse(format!(
                    "tiers.{upper} ({upper_threshold}) must be above tiers.{lower} ({lower_threshold})"
                )));
            }
        }
        if self.entries[0].1 > MAX_SCORE {
            return Err(ToptierError::ConfigParse(
                "tiers.S must not exceed 100".to_string(),
            ));
        }
        if self.entries[4].1 != MIN_SCORE {
            return Err(ToptierError::ConfigParse(
                "tiers.D must be 0 so every score maps to a tier".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolved once at startup and handed to the engine by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub scheme: Scheme,
    pub weights: Weights,
    pub thresholds: TierThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::for_scheme(Scheme::Standard)
    }
}

impl ScoringConfig {
    pub fn for_scheme(scheme: Scheme) -> Self {
        Self {
            scheme,
            weights: scheme.default_weights(),
            thresholds: TierThresholds::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate(self.scheme)?;
        self.thresholds.validate()
    }
}

/// Scores handed in by an upstream generator. Absent factors fall back to the
/// heuristic calculators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuppliedScores {
    entries: Vec<(Factor, Score)>,
}

impl SuppliedScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard(quality: Option<Score>, speed: Option<Score>, freedom: Option<Score>) -> Self {
        let mut supplied = Self::new();
        for (factor, value) in [
            (Factor::Quality, quality),
            (Factor::Speed, speed),
            (Factor::Freedom, freedom),
        ] {
            if let Some(value) = value {
                supplied = supplied.with(factor, value);
            }
        }
        supplied
    }

    pub fn with(mut self, factor: Factor, value: Score) -> Self {
        self.entries.retain(|(candidate, _)| *candidate != factor);
        self.entries.push((factor, value));
        self
    }

    pub fn get(&self, factor: Factor) -> Option<Score> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == factor)
            .map(|(_, value)| *value)
    }

    pub fn factors(&self) -> impl Iterator<Item = Factor> + '_ {
        self.entries.iter().map(|(factor, _)| *factor)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTag {
    pub tag_name: String,
    pub color_hex: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    OpenSource,
    OpenWeights,
    Free,
    Freemium,
    ClosedPaid,
}

impl TagKind {
    pub fn tag(&self) -> DisplayTag {
        let (name, color, description) = match self {
            Self::OpenSource => ("Open Source", "#28a745", "Full source code available"),
            Self::OpenWeights => (
                "Open Weights",
                "#7ed957",
                "Model weights available for download",
            ),
            Self::Free => ("Free", "#007bff", "Free to use without cost"),
            Self::Freemium => ("Freemium", "#66b2ff", "Free tier with paid options"),
            Self::ClosedPaid => (
                "Closed / Paid",
                "#dc3545",
                "Requires payment or restricted access",
            ),
        };
        DisplayTag {
            tag_name: name.to_string(),
            color_hex: color.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    pub factor: Factor,
    pub score: Score,
}

/// Output of one evaluation. Serializes to the flat record the publisher
/// stores (`overall_score`, `tier`, one `<factor>_score` per factor, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoresResult {
    pub scheme: Scheme,
    pub overall_score: Score,
    pub tier: Tier,
    pub factor_scores: Vec<FactorScore>,
    pub tags: Vec<DisplayTag>,
    pub benchmarks: Map<String, Value>,
    pub scoring_methodology: String,
}

impl ScoresResult {
    pub fn score(&self, factor: Factor) -> Option<Score> {
        self.factor_scores
            .iter()
            .find(|entry| entry.factor == factor)
            .map(|entry| entry.score)
    }
}

#[cfg(test)]
impl ScoresResult {
    pub fn quality_score(&self) -> Option<Score> {
        self.score(Factor::Quality)
    }

    pub fn speed_score(&self) -> Option<Score> {
        self.score(Factor::Speed)
    }

    pub fn freedom_score(&self) -> Option<Score> {
        self.score(Factor::Freedom)
    }
}

impl Serialize for ScoresResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + self.factor_scores.len()))?;
        map.serialize_entry("overall_score", &self.overall_score)?;
        map.serialize_entry("tier", &self.tier)?;
        for entry in &self.factor_scores {
            map.serialize_entry(&entry.factor.record_key(), &entry.score)?;
        }
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("benchmarks", &self.benchmarks)?;
        map.serialize_entry("scoring_methodology", &self.scoring_methodology)?;
        map.end()
    }
}

/// Rounds half away from zero to two decimals.
pub fn round2(value: Score) -> Score {
    (value * 100.0).round() / 100.0
}
