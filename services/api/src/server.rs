use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySurveyRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use welfare_assessment::config::AppConfig;
use welfare_assessment::error::AppError;
use welfare_assessment::telemetry;
use welfare_assessment::workflows::survey::SurveyAssessmentService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySurveyRepository::default());
    let survey_service = Arc::new(SurveyAssessmentService::new(
        repository,
        config.assessment,
    ));

    let app = with_assessment_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "beneficiary assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
