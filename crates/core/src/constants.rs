//! Constants used throughout the roster core crate.

/// Default number of records shown per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Default base URL of the external record viewer.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://myappdata.com";
