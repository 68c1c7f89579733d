use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("list separator pattern is valid"));

/// Splits a comma separated configuration value, swallowing whitespace around
/// each comma and dropping empty fragments.
#[doc(hidden)]
pub fn split_list(value: &str) -> Vec<String> {
    let value = value.trim();
    LIST_SEPARATOR
        .split(value)
        .map(|span| &value[span.start..span.end])
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn normalize_upper(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_uppercase();
        owned
    } else {
        value.to_uppercase()
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
