//! # Poker Trivia API
//!
//! Serves trivia questions over HTTP from a static, deduplicated dataset
//! loaded once at startup:
//!
//! - `GET /` — service metadata and endpoint map
//! - `GET /trivia/daily` — one question per calendar day, seeded by date
//! - `GET /trivia/random` — a uniformly random question
//! - `GET /trivia/search?q=...` — case-insensitive substring search
//!
//!
//!
//! # Design
//!
//! - The question store is read-only after startup, so request handling
//!   needs no locks and never blocks on I/O
//! - The daily draw and the random draw use independent generators: a
//!   date-seeded ChaCha8 instance per daily call, the thread RNG for random
//! - Per-client, per-route rate limiting and CORS sit at the edge; the
//!   store and selectors know nothing about HTTP
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run
//! `````
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! `````
use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware::from_fn_with_state,
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod daily;
pub mod error;
pub mod limit;
pub mod routes;
pub mod state;
pub mod store;

use limit::rate_limit;
use routes::{daily_handler, random_handler, root_handler, search_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origins())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/trivia/daily", get(daily_handler))
        .route("/trivia/random", get(random_handler))
        .route("/trivia/search", get(search_handler))
        .layer(from_fn_with_state(state.clone(), rate_limit))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            error!("Cannot start without a question store: {e}");
            std::process::exit(1);
        }
    };

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
