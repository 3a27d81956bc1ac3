use crate::error::{Result, ToptierError};
use crate::types::scoring::{Factor, Scheme, ScoringConfig, Tier, TierThresholds, Weights};
use serde::Deserialize;
use std::collections::BTreeMap;

/// On-disk shape of `toptier.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToptierConfig {
    pub scoring: Option<SchemeSection>,
    pub weights: Option<BTreeMap<String, f64>>,
    pub tiers: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeSection {
    #[serde(default)]
    pub scheme: Scheme,
}

impl ToptierConfig {
    pub fn scheme(&self) -> Scheme {
        self.scoring
            .as_ref()
            .map(|section| section.scheme)
            .unwrap_or_default()
    }

    /// Weights not named in the file keep the scheme's defaults.
    pub fn weights(&self) -> Result<Weights> {
        let scheme = self.scheme();
        let defaults = scheme.default_weights();
        let Some(overrides) = &self.weights else {
            return Ok(defaults);
        };

        let mut parsed = BTreeMap::new();
        for (key, weight) in overrides {
            let factor: Factor = key.parse().map_err(|_| {
                ToptierError::ConfigParse(format!("weights contains unknown key: {key}"))
            })?;
            parsed.insert(factor, *weight);
        }

        let mut entries = Vec::new();
        for factor in scheme.factors() {
            let weight = parsed
                .remove(factor)
                .or_else(|| defaults.get(*factor))
                .unwrap_or_default();
            entries.push((*factor, weight));
        }
        // leftovers belong to another scheme and fail validation
        entries.extend(parsed);
        Ok(Weights::new(entries))
    }

    pub fn thresholds(&self) -> Result<TierThresholds> {
        let defaults = TierThresholds::default();
        let Some(overrides) = &self.tiers else {
            return Ok(defaults);
        };

        let mut values = BTreeMap::new();
        for (key, threshold) in overrides {
            let tier: Tier = key.parse().map_err(|_| {
                ToptierError::ConfigParse(format!("tiers contains unknown key: {key}"))
            })?;
            values.insert(tier, *threshold);
        }
        let lookup = |tier: Tier| {
            values
                .get(&tier)
                .copied()
                .unwrap_or_else(|| defaults.threshold(tier))
        };
        TierThresholds::new(
            lookup(Tier::S),
            lookup(Tier::A),
            lookup(Tier::B),
            lookup(Tier::C),
            lookup(Tier::D),
        )
    }

    pub fn resolve(&self) -> Result<ScoringConfig> {
        let config = ScoringConfig {
            scheme: self.scheme(),
            weights: self.weights()?,
            thresholds: self.thresholds()?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_standard_defaults() {
        let cfg: ToptierConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(
            cfg.resolve().expect("defaults should validate"),
            ScoringConfig::default()
        );
    }

    #[test]
    fn weight_overrides_must_still_sum_to_one() {
        let cfg: ToptierConfig = toml::from_str(
            r#"
[weights]
quality = 0.5
"#,
        )
        .expect("config should parse");
        let err = cfg.resolve().expect_err("0.5 + 0.333 + 0.334 is not 1.0");
        assert!(err.to_string().contains("must sum to 1.0"));

        let cfg: ToptierConfig = toml::from_str(
            r#"
[weights]
quality = 0.5
speed = 0.25
freedom = 0.25
"#,
        )
        .expect("config should parse");
        let resolved = cfg.resolve().expect("balanced weights should validate");
        assert_eq!(resolved.weights.get(Factor::Quality), Some(0.5));
    }

    #[test]
    fn unknown_weight_key_is_rejected() {
        let cfg: ToptierConfig = toml::from_str(
            r#"
[weights]
vibes = 1.0
"#,
        )
        .expect("config should parse");
        let err = cfg.resolve().expect_err("vibes is not a factor");
        assert!(err.to_string().contains("unknown key: vibes"));
    }

    #[test]
    fn legacy_factor_weight_is_rejected_for_standard_scheme() {
        let cfg: ToptierConfig = toml::from_str(
            r#"
[weights]
adoption = 0.1
"#,
        )
        .expect("config should parse");
        assert!(cfg.resolve().is_err());
    }

    #[test]
    fn legacy_scheme_uses_its_own_weight_table() {
        let cfg: ToptierConfig = toml::from_str(
            r#"
[scoring]
scheme = "legacy"
"#,
        )
        .expect("config should parse");
        let resolved = cfg.resolve().expect("legacy defaults should validate");
        assert_eq!(resolved.scheme, Scheme::Legacy);
        assert_eq!(resolved.weights.get(Factor::Performance), Some(0.30));
        assert_eq!(resolved.weights.get(Factor::Quality), None);
    }

    #[test]
    fn tier_overrides_are_validated() {
        let cfg: ToptierConfig = toml::from_str(
            r#"
[tiers]
S = 95
A = 85
"#,
        )
        .expect("config should parse");
        let resolved = cfg.resolve().expect("descending thresholds should validate");
        assert_eq!(resolved.thresholds.tier_for(90.0), Tier::A);

        let cfg: ToptierConfig = toml::from_str(
            r#"
[tiers]
B = 85
"#,
        )
        .expect("config should parse");
        assert!(cfg.resolve().is_err());
    }

    #[test]
    fn non_finite_tier_thresholds_are_rejected() {
        for raw in ["[tiers]\nS = nan\n", "[tiers]\nC = inf\n"] {
            let cfg: ToptierConfig = toml::from_str(raw).expect("config should parse");
            let err = cfg.resolve().expect_err("non-finite threshold should fail");
            assert!(err.to_string().contains("must be a finite number"), "{raw}");
        }
    }
}
