//! Client configuration

/// Default API base URL for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Client configuration for connecting to the reservation API
///
/// | Environment variable  | Default               |
/// |-----------------------|-----------------------|
/// | RESERVA_API_URL       | http://localhost:5001 |
/// | RESERVA_TIMEOUT_SECS  | 30                    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5001")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = std::env::var("RESERVA_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("RESERVA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://api.local").with_timeout(5);
        assert_eq!(config.base_url, "http://api.local");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_from_env() {
        let saved: Vec<_> = ["RESERVA_API_URL", "RESERVA_TIMEOUT_SECS"]
            .into_iter()
            .map(|k| (k, std::env::var(k).ok()))
            .collect();

        // SAFETY: the only test in this crate that touches the environment.
        unsafe {
            std::env::set_var("RESERVA_API_URL", "http://bookings.local:8080");
            std::env::set_var("RESERVA_TIMEOUT_SECS", "5");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://bookings.local:8080");
        assert_eq!(config.timeout, 5);

        // Blank URL and unparsable timeout fall back to the defaults
        unsafe {
            std::env::set_var("RESERVA_API_URL", "  ");
            std::env::set_var("RESERVA_TIMEOUT_SECS", "soon");
        }
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());

        unsafe {
            for (key, value) in saved {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
