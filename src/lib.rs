//! Greeter - a minimal containerized HTTP greeting service.
//!
//! One endpoint serving a fixed greeting, plus a liveness probe. The crate is
//! split into a library so integration tests can build the router directly.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
