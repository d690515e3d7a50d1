//! Theme configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin the storefront GraphQL endpoint lives on.
    pub store_origin: Url,
    /// Timeout applied to catalog requests.
    pub request_timeout: Duration,
    /// Width requested for product images, pixels.
    pub image_width: u32,
}

impl Config {
    pub fn new(store_origin: Url) -> Self {
        Self {
            store_origin,
            request_timeout: Duration::from_secs(12),
            image_width: 300,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost").expect("static origin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store_origin.as_str(), "http://localhost/");
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert_eq!(config.image_width, 300);
    }
}
