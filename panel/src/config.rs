//! Panel configuration parsed from environment variables.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PUBLISH_PLATFORM: &str = "xhs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub base_url: String,
    pub page_size: u32,
    pub publish_platform: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            publish_platform: DEFAULT_PUBLISH_PLATFORM.to_owned(),
        }
    }
}

impl PanelConfig {
    /// Build typed panel config from environment variables.
    ///
    /// Optional:
    /// - `SOCIAL_API_BASE_URL`: default `http://localhost:8000/api/v1`
    /// - `SOCIAL_PAGE_SIZE`: default 10
    /// - `SOCIAL_PUBLISH_PLATFORM`: default `xhs`
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("SOCIAL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let page_size = match std::env::var("SOCIAL_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw),
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        let publish_platform =
            std::env::var("SOCIAL_PUBLISH_PLATFORM").unwrap_or_else(|_| DEFAULT_PUBLISH_PLATFORM.to_owned());

        Self::new(base_url, page_size, publish_platform)
    }

    /// Build config from explicit values, normalizing the base URL and page size.
    #[must_use]
    pub fn new(base_url: impl Into<String>, page_size: u32, publish_platform: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        Self { base_url, page_size, publish_platform: publish_platform.into() }
    }
}

fn parse_page_size(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
