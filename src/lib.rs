//! NeuroCare Voice API
//!
//! A small HTTP service with two endpoints backed by a single SQLite store:
//!
//! - **Emergency alerts**: `POST /api/emergency` appends an alert row for a
//!   user and returns a fixed acknowledgement.
//! - **Voice assistant**: `POST /voice-assistant` accepts a text utterance,
//!   derives a canned or echoed reply via a keyword check, and logs both
//!   sides of the exchange.
//!
//! Both stores are append-only logs; nothing reads them back. Handlers are
//! stateless and each storage operation opens its own scoped connection.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading (defaults, file, environment)
//! - [`domain`]: Language and speaker sum types
//! - [`database`]: SQLite connection factory and insert operations
//! - [`api`]: HTTP endpoints and error mapping
//! - [`server`]: Router assembly and middleware
//! - [`logging`]: Operation timers and startup log macros
//!
//! # Example
//!
//! ```rust,ignore
//! use neurocare_api::{config::AppConfig, server::create_app};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let app = create_app(config).await?;
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod database;
pub mod domain;
pub mod logging;
pub mod server;

use database::Storage;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SQLite connection factory.
    pub storage: Storage,
}
