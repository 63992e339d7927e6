//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into the session. The intent is to avoid reading
//! process-wide environment variables during event handling, which can lead to
//! inconsistent behaviour in test harnesses.

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_VIEWER_BASE_URL};
use crate::validation::validate_viewer_base_url;
use crate::CoreResult;
use roster_types::PageSize;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    page_size: PageSize,
    viewer_base_url: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError::InvalidInput` if the viewer base URL fails
    /// validation.
    pub fn new(page_size: PageSize, viewer_base_url: String) -> CoreResult<Self> {
        validate_viewer_base_url(&viewer_base_url)?;

        Ok(Self {
            page_size,
            viewer_base_url,
        })
    }

    /// Configuration with the built-in defaults: five records per page and
    /// the stock viewer URL.
    pub fn default_config() -> Self {
        Self {
            page_size: PageSize::new(DEFAULT_PAGE_SIZE).expect("default page size is non-zero"),
            viewer_base_url: DEFAULT_VIEWER_BASE_URL.to_string(),
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn viewer_base_url(&self) -> &str {
        &self.viewer_base_url
    }

    /// Build the external viewer URL for a record.
    ///
    /// Selecting a record navigates here; the core only constructs the target
    /// string, it does not perform the navigation.
    pub fn viewer_url_for(&self, record_id: &str) -> String {
        format!("{}?id={}", self.viewer_base_url, record_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_viewer_url_from_record_id() {
        let cfg = CoreConfig::default_config();
        assert_eq!(
            cfg.viewer_url_for("abc-123"),
            "https://myappdata.com?id=abc-123"
        );
    }

    #[test]
    fn default_page_size_is_five() {
        assert_eq!(CoreConfig::default_config().page_size().get(), 5);
    }

    #[test]
    fn rejects_invalid_viewer_url() {
        let page_size = PageSize::new(5).expect("valid page size");
        assert!(CoreConfig::new(page_size, "not-a-url".to_string()).is_err());
    }

    #[test]
    fn accepts_custom_configuration() {
        let page_size = PageSize::new(10).expect("valid page size");
        let cfg = CoreConfig::new(page_size, "https://viewer.example.org/records".to_string())
            .expect("valid configuration");
        assert_eq!(cfg.page_size().get(), 10);
        assert_eq!(
            cfg.viewer_url_for("7"),
            "https://viewer.example.org/records?id=7"
        );
    }
}
