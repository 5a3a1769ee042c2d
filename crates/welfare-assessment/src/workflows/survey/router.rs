use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{SurveyId, SurveySubmission};
use super::repository::{RepositoryError, SurveyRepository};
use super::service::{SurveyAssessmentService, SurveyServiceError};
use crate::workflows::assessment::{
    eligible_facilities, AssessmentConfigPatch, AssessmentInput, NeedsCategory,
};

/// Router builder exposing stateless scoring, admin settings, and survey intake.
pub fn assessment_router<R>(service: Arc<SurveyAssessmentService<R>>) -> Router
where
    R: SurveyRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments/calculate", post(calculate_handler::<R>))
        .route("/api/v1/assessments/validate", post(validate_handler::<R>))
        .route(
            "/api/v1/assessments/config",
            get(config_handler::<R>).patch(update_config_handler::<R>),
        )
        .route(
            "/api/v1/assessments/facilities/:category",
            get(facilities_handler),
        )
        .route("/api/v1/surveys", post(submit_handler::<R>))
        .route("/api/v1/surveys/:survey_id", get(status_handler::<R>))
        .route(
            "/api/v1/surveys/:survey_id/reassess",
            post(reassess_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn calculate_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    axum::Json(input): axum::Json<AssessmentInput>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    let scores = service.assess(&input);
    (StatusCode::OK, axum::Json(scores)).into_response()
}

pub(crate) async fn validate_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    axum::Json(input): axum::Json<AssessmentInput>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    let report = service.validate(&input);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn config_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.config())).into_response()
}

pub(crate) async fn update_config_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    axum::Json(patch): axum::Json<AssessmentConfigPatch>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    match service.update_config(&patch) {
        Ok(config) => (StatusCode::OK, axum::Json(config)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn facilities_handler(Path(category): Path<String>) -> Response {
    match NeedsCategory::parse(&category) {
        Some(category) => {
            let payload = json!({
                "category": category.label(),
                "category_color": category.color().label(),
                "eligible_facilities": eligible_facilities(category),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown category '{category}'"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    axum::Json(submission): axum::Json<SurveySubmission>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    Path(survey_id): Path<String>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    match service.get(&SurveyId(survey_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reassess_handler<R>(
    State(service): State<Arc<SurveyAssessmentService<R>>>,
    Path(survey_id): Path<String>,
) -> Response
where
    R: SurveyRepository + 'static,
{
    match service.reassess(&SurveyId(survey_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SurveyServiceError) -> Response {
    match error {
        SurveyServiceError::Validation(report) => {
            let payload = json!({
                "error": "survey failed validation",
                "errors": report.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        SurveyServiceError::Config(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        SurveyServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({
                "error": "survey already exists or was modified concurrently",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        SurveyServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "survey not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
