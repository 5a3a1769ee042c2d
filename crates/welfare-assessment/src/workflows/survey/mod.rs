//! Field survey intake: validate the household, score it, and keep the derived assessment
//! next to the survey so eligibility screens can read the category back.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{SurveyId, SurveyRecord, SurveyStatusView, SurveySubmission};
pub use repository::{RepositoryError, SurveyRepository};
pub use router::assessment_router;
pub use service::{SurveyAssessmentService, SurveyServiceError};
