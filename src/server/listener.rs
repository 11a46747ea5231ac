use tokio::net::TcpListener;
use tracing::{info, warn};
use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::StaticResponder;

/// Accepts connections forever, dispatching each to its own task.
///
/// The listener is the sole owner of the listening socket; every accepted
/// socket is moved into a spawned task that owns its connection end-to-end,
/// so a failure in one connection never touches another. There are no
/// request timeouts: a stalled client occupies its task indefinitely.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let responder = StaticResponder::new(cfg.document_root.clone());
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, responder);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
