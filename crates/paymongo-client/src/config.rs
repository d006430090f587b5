//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{PayMongoError, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.paymongo.com/v1";

/// Prefix every public key carries.
pub const PUBLIC_KEY_PREFIX: &str = "pk_";

/// Prefix every secret key carries.
pub const SECRET_KEY_PREFIX: &str = "sk_";

/// Which credential a client authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Public key: restricted, safe to ship to browsers and apps.
    Public,
    /// Secret key: full access, server-side only.
    Secret,
}

impl KeyMode {
    /// Prefix a key of this mode must start with.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Public => PUBLIC_KEY_PREFIX,
            Self::Secret => SECRET_KEY_PREFIX,
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Secret => f.write_str("secret"),
        }
    }
}

/// Settings for a [`PayMongo`](crate::PayMongo) client.
#[derive(Clone)]
pub struct PayMongoConfig {
    /// Public key (`pk_...`).
    pub public_key: Option<String>,
    /// Secret key (`sk_...`). Wins over the public key when both are set.
    pub secret_key: Option<String>,
    /// API base URL (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Per-request timeout. No timeout when `None`.
    pub timeout: Option<Duration>,
}

impl Default for PayMongoConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            secret_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl fmt::Debug for PayMongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayMongoConfig")
            .field("public_key", &self.public_key.as_ref().map(|_| "<redacted>"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PayMongoConfig {
    /// Create a configuration with default values and no keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the public key.
    #[must_use]
    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    /// Set the secret key.
    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pick the credential to authenticate with and check its prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PayMongoError::Config`] when no key is set or the chosen key
    /// lacks its mode's prefix.
    pub fn resolve_key(&self) -> Result<(KeyMode, &str)> {
        let secret = self.secret_key.as_deref().filter(|k| !k.is_empty());
        let public = self.public_key.as_deref().filter(|k| !k.is_empty());

        let (mode, key) = match (secret, public) {
            (Some(key), _) => (KeyMode::Secret, key),
            (None, Some(key)) => (KeyMode::Public, key),
            (None, None) => {
                return Err(PayMongoError::Config(
                    "either a public key or a secret key is required".into(),
                ))
            }
        };

        if !key.starts_with(mode.prefix()) {
            return Err(PayMongoError::Config(format!(
                "{mode} key must start with \"{}\"",
                mode.prefix()
            )));
        }

        Ok((mode, key))
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
