use crate::cli::ServeArgs;
use crate::infra::{build_mapper, AppState, InMemoryAnswersRepository};
use crate::routes::with_form_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use visa_forms::config::AppConfig;
use visa_forms::error::AppError;
use visa_forms::forms::FormService;
use visa_forms::telemetry;

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

    let mapper = build_mapper(config.forms.template_fields.as_deref())?;
    let repository = Arc::new(InMemoryAnswersRepository::default());
    let form_service = Arc::new(FormService::new(repository, Arc::new(mapper)));

    let app = with_form_routes(form_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "visa forms service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
