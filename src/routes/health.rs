//! Health check endpoint for container orchestration.
//!
//! A liveness probe that returns 200 OK whenever the process can respond to
//! HTTP. Used by Kubernetes, ECS, systemd, and load balancers.

/// Health check handler.
///
/// Returns a bare "ok" body. This only verifies the process is serving;
/// there is no deeper dependency to check.
pub async fn health() -> &'static str {
    "ok"
}
