use crate::allowed_methods::join;
use crate::util::{normalize_lower, normalize_upper};
use indexmap::IndexSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Wildcard: the request header check is skipped and the requested list is echoed.
    Any,
    /// Lower-cased header names in configuration order.
    List(IndexSet<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedHeaders {
    /// Builds a lower-cased allow-list. A `*` entry collapses it to [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|value| value == "*") {
            return Self::Any;
        }
        Self::List(values.iter().map(|value| normalize_lower(value)).collect())
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Returns the first requested header that is not allowed, if any.
    ///
    /// `request_headers` is the raw `Access-Control-Request-Headers` value. Tokens are
    /// lower-cased and trimmed, and empty tokens are ignored. Scanning stops at the
    /// first miss.
    pub fn first_disallowed(&self, request_headers: &str) -> Option<String> {
        let Self::List(allowed) = self else {
            return None;
        };

        normalize_lower(request_headers)
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .find(|token| !allowed.contains(*token))
            .map(str::to_owned)
    }

    pub fn allows_headers(&self, request_headers: &str) -> bool {
        self.first_disallowed(request_headers).is_none()
    }

    /// Value for `Access-Control-Allow-Headers`, `None` when it would be empty.
    pub fn header_value(&self, requested_headers: Option<&str>) -> Option<String> {
        let value = match self {
            Self::Any => requested_headers.map(normalize_upper).unwrap_or_default(),
            Self::List(values) => join(values),
        };
        (!value.is_empty()).then_some(value)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
