//! HTTP transport: router construction and the server entry point.

use crate::api::{method_not_allowed, url_to_image};
use crate::upstream::ScreenshotClient;
use crate::ProxyConfig;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Build the application router around a shared upstream client.
///
/// One route; the method fallback answers everything that is not a `GET`.
pub fn router(client: Arc<ScreenshotClient>) -> Router {
    Router::new()
        .route("/api/url-to-image", get(url_to_image).fallback(method_not_allowed))
        .with_state(client)
}

/// Bind `host:port` and serve requests until the process is stopped.
pub async fn serve(config: ProxyConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let client = Arc::new(ScreenshotClient::new(config)?);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}", addr);

    axum::serve(listener, router(client)).await?;

    Ok(())
}
