mod category;
mod config;
mod rules;

pub use category::eligible_facilities;
pub use config::{
    AssessmentConfig, AssessmentConfigPatch, ConfigValidationError, DependentWeights,
    FinancialThresholds, ScoreRange, ScoringRanges, SocialStatusWeights, MAX_TOTAL_SCORE,
};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::{
    AssessmentInput, AssessmentScores, CategoryColor, FamilyMember, HouseholdFinancials,
    HousingCondition, NeedsCategory, OfficerReport,
};
use super::validation::{validate_assessment_data, ValidationReport};

/// Deterministic scorer turning survey data into a needs category.
///
/// The engine owns its configuration. Build one per request (or share it read-only)
/// instead of mutating a process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: AssessmentConfig,
}

impl AssessmentEngine {
    /// Accepts any configuration as-is; see [`AssessmentConfig::validate`] for the
    /// partition checks applied to admin updates.
    pub fn new(config: AssessmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> AssessmentConfig {
        self.config
    }

    /// Merge `patch` into the current configuration. The merged configuration must pass
    /// validation, otherwise the engine keeps its previous settings.
    pub fn update_config(
        &mut self,
        patch: &AssessmentConfigPatch,
    ) -> Result<&AssessmentConfig, ConfigValidationError> {
        let merged = self.config.merged(patch);
        merged.validate()?;
        self.config = merged;
        Ok(&self.config)
    }

    pub fn financial_score(&self, financials: &HouseholdFinancials) -> u8 {
        rules::score_financial(financials).score
    }

    pub fn dependents_score(&self, members: &[FamilyMember]) -> u8 {
        rules::score_dependents(members, &self.config.dependent_weights).score
    }

    pub fn social_status_score(
        &self,
        members: &[FamilyMember],
        housing: HousingCondition,
        is_widow_headed: bool,
    ) -> u8 {
        rules::score_social_status(
            members,
            housing,
            is_widow_headed,
            &self.config.social_status_weights,
        )
        .score
    }

    pub fn officer_score(&self, report: &OfficerReport) -> u8 {
        rules::score_officer(report).score
    }

    pub fn determine_category(&self, total_score: u8) -> (NeedsCategory, CategoryColor) {
        category::determine_category(total_score, &self.config.scoring_ranges)
    }

    pub fn validate(&self, input: &AssessmentInput) -> ValidationReport {
        validate_assessment_data(input)
    }

    pub fn calculate_assessment(&self, input: &AssessmentInput) -> AssessmentScores {
        self.calculate_assessment_at(input, Utc::now())
    }

    /// Same as [`calculate_assessment`](Self::calculate_assessment) with an explicit clock.
    pub fn calculate_assessment_at(
        &self,
        input: &AssessmentInput,
        calculated_at: DateTime<Utc>,
    ) -> AssessmentScores {
        let financial = rules::score_financial(&input.financials);
        let dependents =
            rules::score_dependents(&input.family_members, &self.config.dependent_weights);
        let social = rules::score_social_status(
            &input.family_members,
            input.housing_condition,
            input.is_widow_headed,
            &self.config.social_status_weights,
        );
        let officer = rules::score_officer(&input.officer_report);

        let total_score = financial.score + dependents.score + social.score + officer.score;
        let (category, category_color) = self.determine_category(total_score);

        debug!(
            financial = financial.score,
            dependents = dependents.score,
            social_status = social.score,
            officer = officer.score,
            total_score,
            category = category.label(),
            "household assessed"
        );

        AssessmentScores {
            financial_score: financial.score,
            dependents_score: dependents.score,
            social_status_score: social.score,
            officer_score: officer.score,
            total_score,
            category,
            category_color,
            per_capita_income: input.financials.per_capita_income(),
            components: vec![financial, dependents, social, officer],
            calculated_at,
        }
    }
}
