//! Endpoint settings and account credentials.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Production endpoint of the depot service.
pub const DEFAULT_ENDPOINT: &str = "https://www.master-auto-glass.co.uk/pdaservice.asmx";

/// XML namespace of the service's request and response elements.
pub const DEFAULT_NAMESPACE: &str = "https://www.master-auto-glass.co.uk/pdaservice.asmx";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotConfig {
    pub endpoint: String,
    pub namespace: String,
    pub timeout: Duration,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DepotConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `SOAPAction` header value for an operation.
    pub fn soap_action(&self, operation: &str) -> String {
        format!("{}/{}", self.namespace.trim_end_matches('/'), operation)
    }
}

/// Account credentials, sent both in the SOAP header and in the body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    #[serde(default)]
    pub user_id: u32,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            user_id: 0,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}
