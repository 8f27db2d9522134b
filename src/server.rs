//! HTTP server setup and middleware.

use std::time::Duration;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::AppConfig;
use crate::database::Storage;
use crate::logging::OpTimer;
use crate::{AppState, log_banner, log_init_step, log_success};

/// Service version (from Cargo.toml).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create the application with all routes and middleware.
///
/// Runs the idempotent storage initializer before any route is served.
pub async fn create_app(config: AppConfig) -> anyhow::Result<Router> {
    let overall_timer = OpTimer::new("server", "create_app");

    log_banner!(
        format!("NeuroCare Voice API v{VERSION}"),
        format!("Database: {}", config.database.path)
    );

    // [1/2] Ensure the schema exists
    let step_timer = OpTimer::new("server", "storage");
    let storage = Storage::new(&config.database.path);
    storage.init().await?;
    log_init_step!(
        1,
        2,
        "Storage",
        format!("🗄️  SQLite at {}", config.database.path)
    );
    step_timer.finish();

    let state = AppState { storage };

    // [2/2] Build the router with middleware
    let step_timer = OpTimer::new("server", "router");
    let app = api::create_router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    log_init_step!(2, 2, "Router", "🌐 Routes + middleware configured");
    step_timer.finish();

    overall_timer.finish();
    log_success!("NeuroCare Voice API server created successfully");

    Ok(app)
}
