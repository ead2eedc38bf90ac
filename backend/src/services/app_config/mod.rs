//! # Client Configuration Service
//!
//! Serves the runtime configuration of the single-page application. The
//! frontend fetches it once on start and falls back to its defaults when it
//! is unavailable.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

use common::config::CONFIG_PATH;

/// Registers `GET /app-config.json`.
///
/// The handler reads the `ClientConfig` stored as application data.
pub fn configure_routes() -> Scope {
    scope(CONFIG_PATH).route("", get().to(get::process))
}
