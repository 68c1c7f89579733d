use crate::constants::header;
use crate::context::RequestView;
use crate::policy::CorsPolicy;

/// A single response header produced by the engine.
pub type Header = (&'static str, String);

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// Headers for an accepted preflight, in emission order.
    pub(crate) fn preflight_headers<R>(&self, request: &R) -> Vec<Header>
    where
        R: RequestView + ?Sized,
    {
        let mut headers = Vec::with_capacity(6);
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_origin_header(request));
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_methods_header(request));
        headers.extend(self.build_allowed_headers(request));
        headers.extend(self.build_exposed_headers());
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> Option<Header> {
        self.policy
            .supports_credentials
            .then(|| (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string()))
    }

    /// Always the literal request origin, never `*`.
    pub(crate) fn build_origin_header<R>(&self, request: &R) -> Option<Header>
    where
        R: RequestView + ?Sized,
    {
        request
            .header(header::ORIGIN)
            .map(|origin| (header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()))
    }

    pub(crate) fn build_max_age_header(&self) -> Option<Header> {
        self.policy
            .effective_max_age()
            .map(|seconds| (header::ACCESS_CONTROL_MAX_AGE, seconds.to_string()))
    }

    pub(crate) fn build_methods_header<R>(&self, request: &R) -> Option<Header>
    where
        R: RequestView + ?Sized,
    {
        let requested = request.header(header::ACCESS_CONTROL_REQUEST_METHOD);
        self.policy
            .allowed_methods
            .header_value(requested)
            .map(|value| (header::ACCESS_CONTROL_ALLOW_METHODS, value))
    }

    pub(crate) fn build_allowed_headers<R>(&self, request: &R) -> Option<Header>
    where
        R: RequestView + ?Sized,
    {
        let requested = request.header(header::ACCESS_CONTROL_REQUEST_HEADERS);
        self.policy
            .allowed_headers
            .header_value(requested)
            .map(|value| (header::ACCESS_CONTROL_ALLOW_HEADERS, value))
    }

    pub(crate) fn build_exposed_headers(&self) -> Option<Header> {
        self.policy
            .exposed_headers
            .header_value()
            .map(|value| (header::ACCESS_CONTROL_EXPOSE_HEADERS, value))
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
