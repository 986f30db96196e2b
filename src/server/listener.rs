use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::DocumentRoot;

const BACKLOG: u32 = 1024;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = Arc::new(DocumentRoot::new(&cfg.doc_root)?);
    let listener = bind(&cfg.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.listen_addr,
        root.path().display()
    );

    serve(listener, root, cfg.read_timeout()).await
}

/// Binds a listener with address reuse enabled.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let socket_addr = tokio::net::lookup_host(addr)
        .await
        .with_context(|| format!("Failed to resolve {addr}"))?
        .next()
        .with_context(|| format!("No address found for {addr}"))?;

    let socket = if socket_addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(socket_addr)
        .with_context(|| format!("Failed to bind {socket_addr}"))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accepts connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    root: Arc<DocumentRoot>,
    read_timeout: Duration,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let root = Arc::clone(&root);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
