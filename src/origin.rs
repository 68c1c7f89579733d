use url::Url;

/// `scheme://host` of an absolute URL, without port, path or credentials.
///
/// Returns `None` when the URL cannot be parsed or has no host.
pub(crate) fn scheme_and_host(absolute_url: &str) -> Option<String> {
    let url = Url::parse(absolute_url).ok()?;
    let host = url.host_str()?;
    Some(format!("{}://{}", url.scheme(), host))
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
