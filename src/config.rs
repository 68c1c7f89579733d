use crate::util::split_list;
use serde::{Deserialize, Deserializer, de};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable consulted by [`load_from_env`] callers that have no preference.
pub const DEFAULT_CONFIG_VAR: &str = "CORSCONF";

/// Failures while locating or reading a policy source.
///
/// All of these are fatal: they surface before a policy exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{var}' does not name a CORS configuration file")]
    MissingVariable { var: String },
    #[error("config file '{}' does not exist, is not readable, or is not a file", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing config file '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// An allow-list as written in configuration: either one comma separated string or an
/// already split array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawList {
    Items(Vec<String>),
    Text(String),
}

impl Default for RawList {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl RawList {
    /// Entries of the list. Strings go through the comma splitter, arrays are taken as is.
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Items(items) => items.clone(),
            Self::Text(text) => split_list(text),
        }
    }
}

impl From<&str> for RawList {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawList {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<S: Into<String>> FromIterator<S> for RawList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::Items(iter.into_iter().map(Into::into).collect())
    }
}

/// Un-normalized policy mapping, keyed the way configuration files spell it.
///
/// Missing keys default to empty allow-lists, no exposed headers, no max age and no
/// credentials support.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPolicy {
    pub allowed_headers: RawList,
    pub allowed_methods: RawList,
    pub allowed_origins: RawList,
    #[serde(deserialize_with = "exposed_headers")]
    pub exposed_headers: Option<RawList>,
    #[serde(deserialize_with = "max_age")]
    pub max_age: Option<u64>,
    #[serde(deserialize_with = "flag")]
    pub supports_credentials: bool,
}

impl RawPolicy {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Reads a policy file.
pub fn load_file(path: impl AsRef<Path>) -> Result<RawPolicy, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading CORS policy");

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    RawPolicy::from_toml(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the policy file named by the environment variable `var`.
pub fn load_from_env(var: &str) -> Result<RawPolicy, ConfigError> {
    match std::env::var(var) {
        Ok(path) if !path.trim().is_empty() => load_file(path),
        _ => Err(ConfigError::MissingVariable {
            var: var.to_owned(),
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExposed {
    Flag(bool),
    List(RawList),
}

fn exposed_headers<'de, D>(deserializer: D) -> Result<Option<RawList>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawExposed::deserialize(deserializer)? {
        RawExposed::Flag(false) => Ok(None),
        RawExposed::Flag(true) => Err(de::Error::custom(
            "exposedHeaders must be false or a list of header names",
        )),
        RawExposed::List(list) => Ok(Some(list)),
    }
}

fn max_age<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Bool(false) => Ok(None),
        RawScalar::Bool(true) => Err(de::Error::custom(
            "maxAge must be false or a number of seconds",
        )),
        RawScalar::Int(seconds) => u64::try_from(seconds)
            .map(Some)
            .map_err(|_| de::Error::custom("maxAge must not be negative")),
        RawScalar::Text(text) if text.trim().is_empty() => Ok(None),
        RawScalar::Text(text) => text
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("maxAge '{text}' is not a number of seconds"))),
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Bool(value) => Ok(value),
        RawScalar::Int(value) => Ok(value != 0),
        RawScalar::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(true),
            "" | "0" | "false" | "off" | "no" | "none" => Ok(false),
            other => Err(de::Error::custom(format!(
                "supportsCredentials '{other}' is not a boolean flag"
            ))),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
