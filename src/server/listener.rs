use tokio::net::TcpListener;
use tracing::info;

use anyhow::Context;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::{Router, StaticFileStore};

/// Binds the listener and serves until the task is cancelled.
///
/// A bind failure is fatal and propagates to the caller before any
/// connection is accepted.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("Could not listen on {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    let router = Router::new(StaticFileStore::new(cfg.web_root.clone()));
    serve(listener, router).await
}

/// The accept loop.
///
/// Connections are handled strictly one at a time: the next accept only
/// happens once the current connection has fully completed. Accept
/// failures and per-connection errors are logged and never stop the
/// loop.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(error = %e, "Accept failed");
                continue;
            }
        };
        info!(peer = %peer, "New connection");

        let conn = Connection::new(socket);
        if let Err(e) = conn.serve(&router).await {
            tracing::error!(peer = %peer, error = %e, "Connection error");
        }
    }
}
