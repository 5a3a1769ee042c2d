use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use super::domain::{SurveyId, SurveyRecord, SurveySubmission};
use super::repository::{RepositoryError, SurveyRepository};
use crate::workflows::assessment::{
    eligible_facilities, AssessmentConfig, AssessmentConfigPatch, AssessmentEngine,
    AssessmentInput, AssessmentScores, ConfigValidationError, NeedsCategory, ValidationReport,
};

/// Service composing validation, the assessment engine, and survey storage.
///
/// Admin settings live behind a lock; every call scores with an engine built from a
/// snapshot of them, so a settings change never alters a calculation already running.
pub struct SurveyAssessmentService<R> {
    repository: Arc<R>,
    config: RwLock<AssessmentConfig>,
}

static SURVEY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_survey_id() -> SurveyId {
    let id = SURVEY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SurveyId(format!("survey-{id:06}"))
}

fn facilities_for(category: NeedsCategory) -> Vec<String> {
    eligible_facilities(category)
        .iter()
        .map(|facility| facility.to_string())
        .collect()
}

impl<R> SurveyAssessmentService<R>
where
    R: SurveyRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AssessmentConfig) -> Self {
        Self {
            repository,
            config: RwLock::new(config),
        }
    }

    /// Current admin settings.
    pub fn config(&self) -> AssessmentConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Engine bound to a snapshot of the current settings.
    pub fn engine(&self) -> AssessmentEngine {
        AssessmentEngine::new(self.config())
    }

    /// Merge an admin settings patch; rejected patches leave the settings untouched.
    pub fn update_config(
        &self,
        patch: &AssessmentConfigPatch,
    ) -> Result<AssessmentConfig, SurveyServiceError> {
        if patch.is_empty() {
            debug!("empty assessment settings patch ignored");
            return Ok(self.config());
        }

        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut engine = AssessmentEngine::new(*guard);

        match engine.update_config(patch) {
            Ok(updated) => {
                *guard = *updated;
                info!(
                    category_1 = ?guard.scoring_ranges.category_1,
                    category_2 = ?guard.scoring_ranges.category_2,
                    "assessment settings updated"
                );
                Ok(*guard)
            }
            Err(err) => {
                warn!(error = %err, "assessment settings patch rejected");
                Err(err.into())
            }
        }
    }

    /// Score a household without storing anything. Validation is not applied.
    pub fn assess(&self, input: &AssessmentInput) -> AssessmentScores {
        self.engine().calculate_assessment(input)
    }

    pub fn validate(&self, input: &AssessmentInput) -> ValidationReport {
        self.engine().validate(input)
    }

    /// Validate, score, and store a field survey.
    pub fn submit(&self, submission: SurveySubmission) -> Result<SurveyRecord, SurveyServiceError> {
        let engine = self.engine();

        let report = engine.validate(&submission.household);
        if !report.is_valid {
            warn!(
                beneficiary = %submission.beneficiary_name,
                errors = report.errors.len(),
                "survey rejected by validation"
            );
            return Err(SurveyServiceError::Validation(report));
        }

        let assessment = engine.calculate_assessment(&submission.household);
        let record = SurveyRecord {
            survey_id: next_survey_id(),
            eligible_facilities: facilities_for(assessment.category),
            submission,
            assessment,
            revision: 1,
        };

        let stored = self.repository.insert(record)?;
        info!(
            survey_id = %stored.survey_id.0,
            total_score = stored.assessment.total_score,
            category = stored.assessment.category.label(),
            "survey assessed"
        );
        Ok(stored)
    }

    /// Re-score a stored survey with the current settings.
    pub fn reassess(&self, survey_id: &SurveyId) -> Result<SurveyRecord, SurveyServiceError> {
        let mut record = self
            .repository
            .fetch(survey_id)?
            .ok_or(RepositoryError::NotFound)?;

        let previous = record.assessment.category;
        let expected_revision = record.revision;
        let assessment = self
            .engine()
            .calculate_assessment(&record.submission.household);

        record.eligible_facilities = facilities_for(assessment.category);
        record.assessment = assessment;
        record.revision += 1;

        self.repository
            .update(record.clone(), expected_revision)
            .map_err(|err| {
                if matches!(err, RepositoryError::Conflict) {
                    warn!(
                        survey_id = %survey_id.0,
                        expected_revision,
                        "survey changed during reassessment"
                    );
                }
                err
            })?;

        info!(
            survey_id = %survey_id.0,
            revision = record.revision,
            from = previous.label(),
            to = record.assessment.category.label(),
            "survey reassessed"
        );
        Ok(record)
    }

    pub fn get(&self, survey_id: &SurveyId) -> Result<SurveyRecord, SurveyServiceError> {
        let record = self
            .repository
            .fetch(survey_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error("survey failed validation: {}", .0.errors.join("; "))]
    Validation(ValidationReport),
    #[error(transparent)]
    Config(#[from] ConfigValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
