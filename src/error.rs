//! Process-level error type.
//!
//! The route handlers cannot fail, so the only errors in this crate are the
//! ones that stop the process from starting: a bad configuration file or a
//! listener that cannot be bound.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
