//! # Health Check Handler
//!
//! Liveness endpoint for load balancers and deployment tooling. It only
//! proves that the process can answer HTTP requests.

use tracing::{debug, instrument};

use crate::utils::constant::HEALTH_MESSAGE;

/// Health check endpoint that returns `200 OK` with a fixed plain-text body.
///
/// Performs no dependency checks; there is nothing else to be unhealthy.
#[instrument]
pub async fn health_check() -> &'static str {
    debug!("Health check endpoint accessed");
    HEALTH_MESSAGE
}
