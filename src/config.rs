//! Process-wide HTTP configuration.
//!
//! One `HttpConfig` value is shared by every pipeline instance a client
//! creates. It is read-only at call time; per-request knobs live on the
//! pipeline itself.

use std::time::Duration;

/// Configuration shared by all requests issued through one client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// API root prefixed onto relative request targets. Ends in `/`.
    pub api_url: String,

    /// Header key the access token is injected under.
    pub authorization_header: String,

    /// Status code the backend uses for a successful envelope.
    pub success_code: u16,

    /// Status code the backend uses to demand authentication.
    pub unauthorized_code: u16,

    /// Code stamped onto envelopes synthesized from transport failures.
    pub default_error_code: u16,

    /// Request timeout, threaded through to the transport as a hint.
    /// Enforcement is the transport's responsibility.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_url: "/api/".to_string(),
            authorization_header: "Authorization".to_string(),
            success_code: 200,
            unauthorized_code: 401,
            default_error_code: 500,
            timeout: Duration::from_millis(5000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_ends_with_separator() {
        let config = HttpConfig::default();
        assert!(config.api_url.ends_with('/'));
    }

    #[test]
    fn test_default_codes() {
        let config = HttpConfig::default();
        assert_eq!(config.success_code, 200);
        assert_eq!(config.unauthorized_code, 401);
        assert_eq!(config.default_error_code, 500);
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }
}
