use serde::{Deserialize, Serialize};

use super::super::domain::NeedsCategory;

/// Highest total score the four dimensions can add up to.
pub const MAX_TOTAL_SCORE: u8 = 20;

/// Per-capita income ceilings kept for admin settings.
///
/// Financial scoring uses its own fixed bands and does not read these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialThresholds {
    pub very_low: f64,
    pub low: f64,
    pub moderate: f64,
}

impl Default for FinancialThresholds {
    fn default() -> Self {
        Self {
            very_low: 500.0,
            low: 1000.0,
            moderate: 2000.0,
        }
    }
}

/// Inclusive band of total scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: u8) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Total-score bands per category. Category 1 is tested before category 2; category 3
/// is the fallback and its band is only checked by [`AssessmentConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRanges {
    pub category_1: ScoreRange,
    pub category_2: ScoreRange,
    pub category_3: ScoreRange,
}

impl ScoringRanges {
    pub fn range_for(&self, category: NeedsCategory) -> ScoreRange {
        match category {
            NeedsCategory::Category1 => self.category_1,
            NeedsCategory::Category2 => self.category_2,
            NeedsCategory::Category3 => self.category_3,
        }
    }
}

impl Default for ScoringRanges {
    fn default() -> Self {
        Self {
            category_1: ScoreRange::new(15, 20),
            category_2: ScoreRange::new(8, 14),
            category_3: ScoreRange::new(0, 7),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DependentWeights {
    pub spouse: f64,
    pub elderly_parent: f64,
    pub child: f64,
    pub disabled_member: f64,
    pub unmarried_daughter: f64,
}

impl Default for DependentWeights {
    fn default() -> Self {
        Self {
            spouse: 1.0,
            elderly_parent: 1.5,
            child: 1.0,
            disabled_member: 2.0,
            unmarried_daughter: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialStatusWeights {
    pub widow: f64,
    pub orphan: f64,
    pub disabled: f64,
    pub female_headed: f64,
    pub poor_housing: f64,
}

impl SocialStatusWeights {
    pub const fn zero() -> Self {
        Self {
            widow: 0.0,
            orphan: 0.0,
            disabled: 0.0,
            female_headed: 0.0,
            poor_housing: 0.0,
        }
    }
}

impl Default for SocialStatusWeights {
    fn default() -> Self {
        Self {
            widow: 2.0,
            orphan: 2.0,
            disabled: 1.5,
            female_headed: 2.0,
            poor_housing: 1.5,
        }
    }
}

/// Thresholds and weights applied by the engine, editable through admin settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub financial_thresholds: FinancialThresholds,
    #[serde(default)]
    pub scoring_ranges: ScoringRanges,
    #[serde(default)]
    pub dependent_weights: DependentWeights,
    #[serde(default)]
    pub social_status_weights: SocialStatusWeights,
}

/// Partial settings update. Each present section replaces the current one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_thresholds: Option<FinancialThresholds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_ranges: Option<ScoringRanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_weights: Option<DependentWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_status_weights: Option<SocialStatusWeights>,
}

impl AssessmentConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.financial_thresholds.is_none()
            && self.scoring_ranges.is_none()
            && self.dependent_weights.is_none()
            && self.social_status_weights.is_none()
    }
}

/// Problems that make a configuration unsafe to categorize with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("{category} range is inverted ({min} > {max})")]
    InvertedRange {
        category: &'static str,
        min: u8,
        max: u8,
    },
    #[error("{category} range ends at {max}, beyond the maximum total score of 20")]
    RangeOutOfDomain { category: &'static str, max: u8 },
    #[error("total score {score} is covered by both {first} and {second}")]
    OverlappingRanges {
        score: u8,
        first: &'static str,
        second: &'static str,
    },
    #[error("total score {score} is not covered by any category range")]
    UncoveredScore { score: u8 },
    #[error("financial threshold {name} must be a positive number (found {value})")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("financial thresholds must be strictly ascending (very_low < low < moderate)")]
    ThresholdsNotAscending,
    #[error("weight {name} must be a finite, non-negative number (found {value})")]
    InvalidWeight { name: &'static str, value: f64 },
}

impl AssessmentConfig {
    /// Shallow merge: sections present in `patch` replace the current ones.
    pub fn merged(&self, patch: &AssessmentConfigPatch) -> Self {
        Self {
            financial_thresholds: patch
                .financial_thresholds
                .unwrap_or(self.financial_thresholds),
            scoring_ranges: patch.scoring_ranges.unwrap_or(self.scoring_ranges),
            dependent_weights: patch.dependent_weights.unwrap_or(self.dependent_weights),
            social_status_weights: patch
                .social_status_weights
                .unwrap_or(self.social_status_weights),
        }
    }

    /// Checks that the category ranges partition `0..=20` and that every threshold and
    /// weight is usable. The engine itself accepts any configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.validate_ranges()?;
        self.validate_thresholds()?;
        self.validate_weights()
    }

    fn validate_ranges(&self) -> Result<(), ConfigValidationError> {
        for category in NeedsCategory::ALL {
            let range = self.scoring_ranges.range_for(category);
            if range.min > range.max {
                return Err(ConfigValidationError::InvertedRange {
                    category: category.label(),
                    min: range.min,
                    max: range.max,
                });
            }
            if range.max > MAX_TOTAL_SCORE {
                return Err(ConfigValidationError::RangeOutOfDomain {
                    category: category.label(),
                    max: range.max,
                });
            }
        }

        for score in 0..=MAX_TOTAL_SCORE {
            let mut covering = NeedsCategory::ALL
                .into_iter()
                .filter(|category| self.scoring_ranges.range_for(*category).contains(score));

            match (covering.next(), covering.next()) {
                (None, _) => return Err(ConfigValidationError::UncoveredScore { score }),
                (Some(first), Some(second)) => {
                    return Err(ConfigValidationError::OverlappingRanges {
                        score,
                        first: first.label(),
                        second: second.label(),
                    })
                }
                (Some(_), None) => {}
            }
        }

        Ok(())
    }

    fn validate_thresholds(&self) -> Result<(), ConfigValidationError> {
        let thresholds = &self.financial_thresholds;
        for (name, value) in [
            ("very_low", thresholds.very_low),
            ("low", thresholds.low),
            ("moderate", thresholds.moderate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigValidationError::InvalidThreshold { name, value });
            }
        }

        if thresholds.very_low < thresholds.low && thresholds.low < thresholds.moderate {
            Ok(())
        } else {
            Err(ConfigValidationError::ThresholdsNotAscending)
        }
    }

    fn validate_weights(&self) -> Result<(), ConfigValidationError> {
        let dependents = &self.dependent_weights;
        let social = &self.social_status_weights;
        let weights = [
            ("spouse", dependents.spouse),
            ("elderly_parent", dependents.elderly_parent),
            ("child", dependents.child),
            ("disabled_member", dependents.disabled_member),
            ("unmarried_daughter", dependents.unmarried_daughter),
            ("widow", social.widow),
            ("orphan", social.orphan),
            ("disabled", social.disabled),
            ("female_headed", social.female_headed),
            ("poor_housing", social.poor_housing),
        ];

        match weights
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, value)) => Err(ConfigValidationError::InvalidWeight { name, value }),
            None => Ok(()),
        }
    }
}
