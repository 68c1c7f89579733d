use crate::constants::header;
use std::borrow::Cow;

/// Read-only view of an incoming request.
pub trait RequestView {
    fn method(&self) -> &str;

    /// Header value by case-insensitive name.
    fn header(&self, name: &str) -> Option<&str>;

    fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// The request's own absolute URL, used for same-origin detection.
    fn absolute_url(&self) -> Option<Cow<'_, str>>;
}

/// Borrowed plain-data request for hosts that already extracted the CORS inputs.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestView for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_METHOD) {
            self.access_control_request_method
        } else if name.eq_ignore_ascii_case(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            self.access_control_request_headers
        } else {
            None
        }
    }

    fn absolute_url(&self) -> Option<Cow<'_, str>> {
        (!self.url.is_empty()).then_some(Cow::Borrowed(self.url))
    }
}
