//! HTTP server module.
//!
//! Binds the plain HTTP listener, runs the axum serve loop, and stops it
//! gracefully on SIGTERM/SIGINT so a redeploy drains in-flight requests.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
