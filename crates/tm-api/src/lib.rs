use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
    http::{Method, Request},
    middleware,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use tm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook, LoggingConfig};
use tm_common::{MatchingConfig, MatchingEngine};

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{health, matches};

const SHUTDOWN_DRAIN_GRACE: Duration = Duration::from_millis(200);
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "tm-api", about = "HTTP API for the talent matching engine")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "TM_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "TM_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "TM_CORS_ORIGINS must list explicit origins".into(),
            ));
        }
        if cli.max_body_bytes == 0 {
            return Err(ApiError::BadRequest("TM_MAX_BODY_BYTES must be positive".into()));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
            max_body_bytes: cli.max_body_bytes,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 3001,
            cors_origins: vec!["http://localhost:3000".into()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Dependencies handed to every handler; built once in `run` or `test_state`.
pub struct AppState {
    pub config: AppConfig,
    pub engine: Arc<MatchingEngine>,
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

async fn attach_request_id_context(req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    error::with_request_id(request_id, next.run(req)).await
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let body_limit = state.config.max_body_bytes;

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    let api_routes = Router::new()
        .route("/matches", post(matches::find_matches))
        .route("/config", get(matches::config));

    Router::new()
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(attach_request_id_context))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid,
        ))
        .layer(cors)
        .with_state(state)
}

/// State with default matching configuration and caching off.
pub fn test_state() -> SharedState {
    Arc::new(AppState {
        config: AppConfig::for_tests(),
        engine: Arc::new(MatchingEngine::new(MatchingConfig::uncached())),
        readiness: Arc::new(AtomicBool::new(true)),
    })
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();

    let logging = LoggingConfig::from_env(env!("CARGO_PKG_NAME"));
    init_tracing_subscriber(&logging);
    install_tracing_panic_hook(&logging);

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;
    let matching = MatchingConfig::from_env();

    info!(
        weights = ?matching.weights,
        missing_factor_policy = ?matching.missing_factor_policy,
        cache_capacity = matching.cache_capacity,
        "matching configured"
    );

    let engine = MatchingEngine::try_new(matching)
        .map_err(|err| ApiError::Internal(format!("invalid matching config: {err}")))?;

    let state = Arc::new(AppState {
        config: config.clone(),
        engine: Arc::new(engine),
        readiness: Arc::new(AtomicBool::new(true)),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state.clone());

    info!(%addr, process_id = tm_common::run_id::process(), "tm-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.readiness.store(false, Ordering::SeqCst);
    info!("shutdown requested; readiness off");

    // Load balancers need a moment to observe /readyz failing.
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}
