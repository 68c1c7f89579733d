use crate::constants::header;
use crate::context::RequestView;
use crate::response::ResponseSink;
use http::{HeaderName, HeaderValue, Request, Response, StatusCode};
use std::borrow::Cow;

impl<B> RequestView for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// Presence ignores encoding: a value that is not visible ASCII still marks the
    /// header as sent, and [`RequestView::header`] reports it as unreadable.
    fn has_header(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }

    /// Server-side requests usually carry an origin-form URI, so the authority falls back
    /// to the `Host` header and the scheme to `http`.
    fn absolute_url(&self) -> Option<Cow<'_, str>> {
        let uri = self.uri();
        if uri.scheme().is_some() && uri.authority().is_some() {
            return Some(Cow::Owned(uri.to_string()));
        }

        let host = self.header(header::HOST)?;
        let scheme = uri.scheme_str().unwrap_or("http");
        Some(Cow::Owned(format!("{scheme}://{host}{}", uri.path())))
    }
}

impl<B> ResponseSink for Response<B>
where
    B: From<String>,
{
    /// Names or values that are not valid HTTP are dropped.
    fn set_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name),
            HeaderValue::from_str(value),
        ) {
            self.headers_mut().insert(name, value);
        }
    }

    fn set_status(&mut self, status: u16) {
        if let Ok(status) = StatusCode::from_u16(status) {
            *self.status_mut() = status;
        }
    }

    fn set_body(&mut self, body: &str) {
        *self.body_mut() = B::from(body.to_owned());
    }
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
