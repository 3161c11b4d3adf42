//! Outbound client for the screenshot-rendering API.
//!
//! One GET per invocation, awaited to completion; no retries, no fan-out.
//! The only timeout is the one configured on the HTTP client itself.

use crate::{Error, ProxyConfig, Result};
use base64::Engine as Base64Engine;
use std::time::Duration;

/// Client for the URL-to-image upstream API.
///
/// Wraps a reqwest client configured from a [`ProxyConfig`]; cheap to share
/// behind an `Arc` across concurrent requests.
pub struct ScreenshotClient {
    http: reqwest::Client,
    config: ProxyConfig,
}

impl ScreenshotClient {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Initialization(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Fetch a JPEG thumbnail of `page_url` from the upstream API.
    ///
    /// Sends the configured `access_key`, the caller-supplied URL and the
    /// fixed render parameters, and reads the full binary body. A non-2xx
    /// upstream answer becomes [`Error::Upstream`] carrying its status.
    pub async fn fetch_thumbnail(&self, page_url: &str) -> Result<Vec<u8>> {
        let width = self.config.thumbnail_width.to_string();

        log::debug!("requesting thumbnail for {}", page_url);

        let resp = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("access_key", self.config.api_key.as_str()),
                ("url", page_url),
                ("response_type", "image"),
                ("thumbnail_width", width.as_str()),
                ("wait_until", self.config.wait_until.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch {}: {}", page_url, e)))?;

        log::info!("upstream responded {} for {}", resp.status(), page_url);

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Upstream error").to_string(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Wrap raw JPEG bytes as an inline `data:` URI.
pub fn jpeg_data_uri(bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/jpeg;base64,{}", b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_once(status: u16, body: &'static [u8]) -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr();
        std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let response = tiny_http::Response::from_data(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_jpeg_data_uri_prefix() {
        let uri = jpeg_data_uri(b"notreallyajpeg");
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(uri, format!("data:image/jpeg;base64,{}", base64::engine::general_purpose::STANDARD.encode(b"notreallyajpeg")));
    }

    #[test]
    fn test_jpeg_data_uri_empty_payload() {
        assert_eq!(jpeg_data_uri(b""), "data:image/jpeg;base64,");
    }

    #[tokio::test]
    async fn test_fetch_thumbnail_returns_body_bytes() {
        let endpoint = serve_once(200, b"\xff\xd8\xff\xe0fakejpeg");

        let client = ScreenshotClient::new(ProxyConfig {
            endpoint,
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .expect("Failed to build client");

        let bytes = client
            .fetch_thumbnail("https://example.com")
            .await
            .expect("Failed to fetch thumbnail");
        assert_eq!(bytes, b"\xff\xd8\xff\xe0fakejpeg");
    }

    #[tokio::test]
    async fn test_fetch_thumbnail_surfaces_upstream_status() {
        let endpoint = serve_once(401, b"");

        let client = ScreenshotClient::new(ProxyConfig {
            endpoint,
            ..Default::default()
        })
        .expect("Failed to build client");

        let err = client.fetch_thumbnail("https://example.com").await.unwrap_err();
        match err {
            Error::Upstream { status, ref reason } => {
                assert_eq!(status, 401);
                assert_eq!(reason, "Unauthorized");
            }
            other => panic!("Expected upstream error, got {:?}", other),
        }
    }
}
