use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::assessment::{
    AssessmentConfig, AssessmentInput, FamilyMember, HouseholdFinancials, HousingCondition,
    MaritalStatus, OfficerReport,
};
use crate::workflows::survey::domain::{SurveyId, SurveyRecord, SurveySubmission};
use crate::workflows::survey::repository::{RepositoryError, SurveyRepository};
use crate::workflows::survey::{assessment_router, SurveyAssessmentService};

pub(super) fn household() -> AssessmentInput {
    AssessmentInput {
        financials: HouseholdFinancials {
            total_income: 6_000.0,
            total_expenses: 4_000.0,
            family_size: 5,
        },
        family_members: vec![
            FamilyMember {
                name: "Parveen Akhtar".to_string(),
                age: 41,
                relationship: "Head (widow)".to_string(),
                marital_status: MaritalStatus::Widowed,
                monthly_income: 6_000.0,
                has_disability: false,
                is_dependent: false,
            },
            FamilyMember {
                name: "Usman".to_string(),
                age: 14,
                relationship: "Son".to_string(),
                marital_status: MaritalStatus::Single,
                monthly_income: 0.0,
                has_disability: true,
                is_dependent: true,
            },
            FamilyMember {
                name: "Amna".to_string(),
                age: 19,
                relationship: "Daughter".to_string(),
                marital_status: MaritalStatus::Single,
                monthly_income: 0.0,
                has_disability: false,
                is_dependent: true,
            },
        ],
        housing_condition: HousingCondition::Poor,
        officer_report: OfficerReport {
            officer_score: 4.0,
            remarks: Some("Rented single room, roof leaks".to_string()),
        },
        is_widow_headed: true,
    }
}

pub(super) fn submission() -> SurveySubmission {
    SurveySubmission {
        beneficiary_name: "Parveen Akhtar".to_string(),
        field_officer: "Officer Rehman".to_string(),
        visited_on: NaiveDate::from_ymd_opt(2025, 3, 12).expect("valid date"),
        household: household(),
    }
}

pub(super) fn invalid_submission() -> SurveySubmission {
    let mut submission = submission();
    submission.household.financials.family_size = 0;
    submission.household.officer_report.officer_score = 8.0;
    submission
}

pub(super) fn build_service() -> (
    SurveyAssessmentService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SurveyAssessmentService::new(repository.clone(), AssessmentConfig::default());
    (service, repository)
}

pub(super) fn router_with_service(service: SurveyAssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<SurveyId, SurveyRecord>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl SurveyRepository for MemoryRepository {
    fn insert(&self, record: SurveyRecord) -> Result<SurveyRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.survey_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.survey_id.clone(), record.clone());
        Ok(record)
    }

    fn update(
        &self,
        record: SurveyRecord,
        expected_revision: u32,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&record.survey_id) {
            Some(existing) if existing.revision != expected_revision => {
                Err(RepositoryError::Conflict)
            }
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SurveyId) -> Result<Option<SurveyRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Memory store that lets another writer bump the stored revision right after every read.
#[derive(Default)]
pub(super) struct RacingRepository {
    inner: MemoryRepository,
}

impl SurveyRepository for RacingRepository {
    fn insert(&self, record: SurveyRecord) -> Result<SurveyRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(
        &self,
        record: SurveyRecord,
        expected_revision: u32,
    ) -> Result<(), RepositoryError> {
        self.inner.update(record, expected_revision)
    }

    fn fetch(&self, id: &SurveyId) -> Result<Option<SurveyRecord>, RepositoryError> {
        let fetched = self.inner.fetch(id)?;
        if let Some(record) = &fetched {
            let mut concurrent = record.clone();
            concurrent.revision += 1;
            self.inner.update(concurrent, record.revision)?;
        }
        Ok(fetched)
    }
}

pub(super) struct ConflictRepository;

impl SurveyRepository for ConflictRepository {
    fn insert(&self, _record: SurveyRecord) -> Result<SurveyRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SurveyRecord, _expected: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &SurveyId) -> Result<Option<SurveyRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl SurveyRepository for UnavailableRepository {
    fn insert(&self, _record: SurveyRecord) -> Result<SurveyRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("document store offline".to_string()))
    }

    fn update(&self, _record: SurveyRecord, _expected: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("document store offline".to_string()))
    }

    fn fetch(&self, _id: &SurveyId) -> Result<Option<SurveyRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("document store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
