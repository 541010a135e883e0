//! HTTP listener startup.
//!
//! Binding and serving are split so callers can bind first, read back the
//! local address, and then hand the listener to the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Bind a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "Listening");
    }
    Ok(listener)
}

/// Serve `app` on `listener` until `signal` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, signal: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTP server described by `config`.
///
/// Blocks until SIGINT or SIGTERM is received.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    let listener = bind(addr).await?;
    serve(listener, app, shutdown::shutdown_signal()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        match bind(addr).await {
            Err(ServerError::Bind { addr: failed, source }) => {
                assert_eq!(failed, addr);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_start_server_rejects_invalid_host() {
        let mut config = AppConfig::default();
        config.http.host = "not-an-ip".to_string();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address(_)));
    }

    #[tokio::test]
    async fn test_serve_returns_after_signal() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, Router::new(), async {
            let _ = rx.await;
        }));
        tx.send(()).unwrap();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}
