use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::assessment::{AssessmentInput, AssessmentScores};

/// Identifier wrapper for stored field surveys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurveyId(pub String);

/// Field survey as submitted by the visiting officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySubmission {
    pub beneficiary_name: String,
    pub field_officer: String,
    pub visited_on: NaiveDate,
    pub household: AssessmentInput,
}

/// Stored survey together with the assessment derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub survey_id: SurveyId,
    pub submission: SurveySubmission,
    pub assessment: AssessmentScores,
    pub eligible_facilities: Vec<String>,
    /// Starts at 1 and increases with every reassessment.
    pub revision: u32,
}

impl SurveyRecord {
    pub fn status_view(&self) -> SurveyStatusView {
        let assessment = &self.assessment;
        SurveyStatusView {
            survey_id: self.survey_id.clone(),
            beneficiary_name: self.submission.beneficiary_name.clone(),
            category: assessment.category.label(),
            category_number: assessment.category.number(),
            category_color: assessment.category_color.label(),
            total_score: assessment.total_score,
            financial_score: assessment.financial_score,
            dependents_score: assessment.dependents_score,
            social_status_score: assessment.social_status_score,
            officer_score: assessment.officer_score,
            eligible_facilities: self.eligible_facilities.clone(),
            revision: self.revision,
            calculated_at: assessment.calculated_at,
        }
    }
}

/// Public payload describing where a surveyed household stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyStatusView {
    pub survey_id: SurveyId,
    pub beneficiary_name: String,
    pub category: &'static str,
    pub category_number: u8,
    pub category_color: &'static str,
    pub total_score: u8,
    pub financial_score: u8,
    pub dependents_score: u8,
    pub social_status_score: u8,
    pub officer_score: u8,
    pub eligible_facilities: Vec<String>,
    pub revision: u32,
    pub calculated_at: DateTime<Utc>,
}
