use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::config::{self, ConfigError, RawPolicy};
use crate::exposed_headers::ExposedHeaders;
use std::path::Path;

/// Normalized access-control policy. Immutable once built and safe to share across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    /// Preflight cache lifetime in seconds. `Some(0)` behaves like `None`.
    pub max_age: Option<u64>,
    pub supports_credentials: bool,
}

impl CorsPolicy {
    /// Normalizes a raw mapping: lists are split, `*` becomes the wildcard, header names are
    /// lower-cased and methods upper-cased. Origins are kept verbatim.
    pub fn normalize(raw: RawPolicy) -> Self {
        Self {
            allowed_origins: AllowedOrigins::list(raw.allowed_origins.entries()),
            allowed_methods: AllowedMethods::list(raw.allowed_methods.entries()),
            allowed_headers: AllowedHeaders::list(raw.allowed_headers.entries()),
            exposed_headers: raw
                .exposed_headers
                .map(|list| ExposedHeaders::list(list.entries()))
                .unwrap_or_default(),
            max_age: raw.max_age,
            supports_credentials: raw.supports_credentials,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        config::load_file(path).map(Self::normalize)
    }

    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        config::load_from_env(var).map(Self::normalize)
    }

    /// Max age to advertise, skipping zero.
    pub(crate) fn effective_max_age(&self) -> Option<u64> {
        self.max_age.filter(|seconds| *seconds > 0)
    }
}

impl From<RawPolicy> for CorsPolicy {
    fn from(raw: RawPolicy) -> Self {
        Self::normalize(raw)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
