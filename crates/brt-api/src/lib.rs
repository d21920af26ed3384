//! API layer for the BRT billing service
//!
//! HTTP handlers for call records, subscribers and CDRs, mounted under
//! `/api` by [`configure_routes`].

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod dto;
pub mod handlers;
pub mod state;

use actix_web::{error::Error, web};
use brt_core::AppError;
use tracing::warn;

pub use dto::PaginationParams;
pub use handlers::{configure_calls, configure_cdr, configure_health, configure_subscribers};
pub use state::AppState;

fn payload_error(kind: &str, err: impl std::fmt::Display) -> Error {
    warn!("Rejected {}: {}", kind, err);
    AppError::InvalidPayload(err.to_string()).into()
}

/// Extractor settings that turn malformed bodies, paths and queries into
/// the standard JSON error envelope
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(64 * 1024)
            .error_handler(|err, _req| payload_error("JSON body", err)),
    )
    .app_data(web::QueryConfig::default().error_handler(|err, _req| payload_error("query", err)))
    .app_data(web::PathConfig::default().error_handler(|err, _req| payload_error("path", err)));
}

/// Mount every API route under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(configure_extractors)
            .configure(configure_health)
            .configure(configure_calls)
            .configure(configure_subscribers)
            .configure(configure_cdr),
    );
}
