use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use welfare_assessment::workflows::assessment::AssessmentConfig;
use welfare_assessment::workflows::survey::{
    RepositoryError, SurveyId, SurveyRecord, SurveyRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Survey store used until the document database adapter is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemorySurveyRepository {
    records: Arc<Mutex<HashMap<SurveyId, SurveyRecord>>>,
}

impl InMemorySurveyRepository {
    fn records(&self) -> Result<MutexGuard<'_, HashMap<SurveyId, SurveyRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("survey store lock poisoned".to_string()))
    }
}

impl SurveyRepository for InMemorySurveyRepository {
    fn insert(&self, record: SurveyRecord) -> Result<SurveyRecord, RepositoryError> {
        let mut guard = self.records()?;
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
        let mut guard = self.records()?;
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
        let guard = self.records()?;
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn default_assessment_config() -> AssessmentConfig {
    AssessmentConfig::default()
}
