//! API Configuration

/// Where the product API lives
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash; empty means same-origin
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL baked in at compile time from `CTRLZ_BACKEND_URL`,
    /// empty if unset
    pub fn from_build_env() -> Self {
        option_env!("CTRLZ_BACKEND_URL").map_or_else(Self::default, Self::new)
    }

    /// Same-origin deployments have no base of their own
    pub const fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Fill an empty base with the page origin (browsers need absolute URLs)
    #[must_use]
    pub fn or_origin(self, origin: &str) -> Self {
        if self.is_same_origin() {
            Self::new(origin)
        } else {
            self
        }
    }
}
