use crate::util::normalize_upper;
use indexmap::IndexSet;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethods {
    /// Wildcard: any method passes and the requested method is echoed back.
    Any,
    /// Upper-cased method names in configuration order.
    List(IndexSet<String>),
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedMethods {
    /// Builds an upper-cased allow-list. A `*` entry collapses it to [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|value| value == "*") {
            return Self::Any;
        }
        Self::List(values.iter().map(|value| normalize_upper(value)).collect())
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Membership is exact: a lower-case `put` does not match a configured `PUT`.
    pub fn allows(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.contains(method),
        }
    }

    /// Value for `Access-Control-Allow-Methods` given the preflight's requested method,
    /// `None` when it would be empty.
    pub fn header_value(&self, requested_method: Option<&str>) -> Option<String> {
        let value = match self {
            Self::Any => requested_method.map(normalize_upper).unwrap_or_default(),
            Self::List(values) => join(values),
        };
        (!value.is_empty()).then_some(value)
    }
}

pub(crate) fn join(values: &IndexSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
