//! HTTP server startup and lifecycle.
//!
//! The server runs plain HTTP (TLS termination is left to the deployment's
//! reverse proxy or load balancer) and includes:
//! - Graceful shutdown on SIGTERM/SIGINT with connection draining

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
