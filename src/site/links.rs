//! Link-type classification.

use crate::{Error, Result};
use url::Url;

/// The site's own domain; links into it are internal navigation.
pub const SITE_DOMAIN: &str = "webstacks.com";

/// How a link should behave when followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBehavior {
    Internal,
    External,
}

impl LinkBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkBehavior::Internal => "internal",
            LinkBehavior::External => "external",
        }
    }
}

impl std::fmt::Display for LinkBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an href as internal or external navigation.
///
/// Anything without an `http` marker (relative paths, anchors, a missing
/// href) is internal. Absolute URLs are matched against [`SITE_DOMAIN`],
/// bare or `www.`-prefixed. An href that looks absolute but does not parse
/// is an error, propagated to the caller rather than swallowed.
pub fn classify(href: Option<&str>) -> Result<LinkBehavior> {
    let href = match href {
        Some(h) if !h.is_empty() && h.contains("http") => h,
        _ => return Ok(LinkBehavior::Internal),
    };

    let url = Url::parse(href)
        .map_err(|e| Error::InvalidInput(format!("unparseable href {:?}: {}", href, e)))?;

    let www = format!("www.{}", SITE_DOMAIN);
    let internal = matches!(url.host_str(), Some(host) if host == SITE_DOMAIN || host == www);

    Ok(if internal {
        LinkBehavior::Internal
    } else {
        LinkBehavior::External
    })
}
