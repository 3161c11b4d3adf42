//! urlsnap
//!
//! A small web-API crate: one HTTP route that proxies a third-party
//! screenshot-rendering service, plus a set of stateless site-content
//! utilities (color conversion, string casing, link classification,
//! button-hierarchy labeling, a mount/unmount callback slot).
//!
//! # Example
//!
//! ```no_run
//! use urlsnap::upstream::ScreenshotClient;
//! use urlsnap::ProxyConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProxyConfig {
//!     api_key: "my-access-key".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = ScreenshotClient::new(config)?;
//! let jpeg = client.fetch_thumbnail("https://example.com").await?;
//! println!("fetched {} bytes", jpeg.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// HTTP surface: validation, error shaping, route handlers
pub mod api;

// Transport: router construction and the server entry point
pub mod server;

// Site content utilities used by UI code
pub mod site;

// Outbound client for the screenshot-rendering API
pub mod upstream;

/// Configuration for the screenshot proxy
///
/// An explicit value injected into the upstream client at startup; nothing
/// in the request path reads ambient process state. The defaults match the
/// upstream service's URL-to-image endpoint and produce a 320px JPEG
/// thumbnail after the target page has fully loaded.
///
/// # Examples
///
/// ```
/// let cfg = urlsnap::ProxyConfig::default();
/// assert_eq!(cfg.thumbnail_width, 320);
/// ```
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream URL-to-image endpoint
    pub endpoint: String,
    /// API key sent as `access_key` on every upstream call
    pub api_key: String,
    /// Width in pixels of the rendered thumbnail
    pub thumbnail_width: u32,
    /// Upstream render barrier; `page_loaded` waits for the full page load
    pub wait_until: String,
    /// Timeout for the outbound request in milliseconds
    pub timeout_ms: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.apiflash.com/v1/urltoimage".to_string(),
            api_key: String::new(),
            thumbnail_width: 320,
            wait_until: "page_loaded".to_string(),
            timeout_ms: 30000,
        }
    }
}

impl ProxyConfig {
    /// Build a config from the process environment.
    ///
    /// An absent `APIFLASH_API_KEY` is not an error here: the upstream API
    /// rejects the unauthenticated call at request time and the failure
    /// surfaces through the normal error path.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("APIFLASH_API_KEY").unwrap_or_default(),
            ..Default::default()
        }
    }
}
