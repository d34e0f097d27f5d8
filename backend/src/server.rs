//! # Server Setup
//!
//! Tracing initialization, application state, router construction and the
//! HTTP listener.

// region: --- Imports
use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers;
use crate::middleware::{log_requests, mw_req_stamp::request_id, stamp_req};
use crate::services::TokenService;
use crate::soroban::{Ledger, StellarNetwork};
// endregion: --- Imports

// region: --- AppState
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub token: Arc<TokenService>,
}

impl AppState {
    pub fn new(config: Config, ledger: Arc<dyn Ledger>) -> Self {
        let config = Arc::new(config);
        let token = Arc::new(TokenService::new(ledger, Arc::clone(&config)));
        Self { config, token }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Initialize tracing, wire the live network and serve until shutdown.
///
/// # Errors
///
/// Fails when the configuration does not validate or the bind address is taken.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    init_tracing();

    info!("TOKEN CONSOLE BACKEND STARTING");
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Network: {:?} ({})", config.network(), config.network_passphrase);
    info!("Horizon: {}", config.horizon_url);
    info!("Soroban RPC: {}", config.soroban_rpc_url);
    info!("Token contract: {}", config.contract_id);

    let ledger: Arc<dyn Ledger> = Arc::new(StellarNetwork::from_config(&config)?);
    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(config, ledger));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Router with every route and middleware layer.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::HeaderName::from_static("x-request-id")]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/network", get(handlers::get_network))
        .route("/api/accounts/{account_id}", get(handlers::get_account))
        .route("/api/transactions/build", post(handlers::build_transaction))
        .route("/api/transactions/submit", post(handlers::submit_transaction))
        .route("/api/transactions/{hash}", get(handlers::get_transaction_status))
        .route("/api/contract/call", post(handlers::call_contract_function))
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id(request),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        // Outermost so the ID exists before the span and the logger run.
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

fn log_server_info() {
    info!(" NETWORK:");
    info!("   • GET  /api/network");
    info!("   • GET  /api/accounts/{{account_id}}");
    info!(" TRANSACTIONS:");
    info!("   • POST /api/transactions/build");
    info!("   • POST /api/transactions/submit");
    info!("   • GET  /api/transactions/{{hash}}");
    info!(" CONTRACT:");
    info!("   • POST /api/contract/call");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
