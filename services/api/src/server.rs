use crate::cli::ServeArgs;
use crate::infra::{AppState, ScoringState};
use crate::routes::{assessment_routes, with_operational_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use wellbeing::config::AppConfig;
use wellbeing::error::AppError;
use wellbeing::telemetry;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let scoring_defaults = config.scoring.scoring_config();
    let scoring_state = ScoringState::bat12(scoring_defaults);

    let app = with_operational_routes(assessment_routes(scoring_state))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cutoffs = ?config.scoring.cutoffs,
        require_complete = config.scoring.require_complete,
        "wellbeing assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
