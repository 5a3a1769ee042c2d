use super::domain::{SurveyId, SurveyRecord};

/// Storage abstraction so the survey service can run against any document store.
pub trait SurveyRepository: Send + Sync {
    fn insert(&self, record: SurveyRecord) -> Result<SurveyRecord, RepositoryError>;
    /// Replace a stored record only while its stored revision still equals
    /// `expected_revision`; a stale write fails with [`RepositoryError::Conflict`].
    fn update(
        &self,
        record: SurveyRecord,
        expected_revision: u32,
    ) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SurveyId) -> Result<Option<SurveyRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists or was modified concurrently")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
