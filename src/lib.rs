//! cicd-probe: a single-route HTTP service for checking that a container
//! image was built, pushed and deployed.
//!
//! `GET /` answers with a fixed plaintext message; every other path is a 404.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::StartupError;
pub use routes::create_router;
