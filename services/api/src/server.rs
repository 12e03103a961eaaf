use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::with_roster_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gate_access::config::AppConfig;
use gate_access::error::AppError;
use gate_access::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.roster.take() {
        config.roster.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (roster, source) = load_roster(config.roster.path.clone())?;
    info!(
        vehicles = roster.len(),
        source = source.label(),
        "gate roster ready"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_roster_routes(Arc::new(roster))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "gate access service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
