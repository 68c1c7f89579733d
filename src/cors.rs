use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::config::ConfigError;
use crate::constants::{header, method};
use crate::context::RequestView;
use crate::header_builder::{Header, HeaderBuilder};
use crate::origin::scheme_and_host;
use crate::policy::CorsPolicy;
use crate::response::ResponseSink;
use crate::result::{CorsDecision, CorsRejection, Flow};
use tracing::{debug, warn};

/// Core CORS engine that evaluates requests against a [`CorsPolicy`].
///
/// Holds no per-request state, so one instance can serve any number of concurrent
/// requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    /// Builds the engine from the policy file named by the environment variable `var`.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        CorsPolicy::from_env(var).map(Self::new)
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// `true` when the `Origin` header equals the request's own `scheme://host`.
    ///
    /// A missing `Origin` or an unparsable request URL is never same-host.
    pub fn is_same_host<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        let Some(origin) = request.header(header::ORIGIN) else {
            return false;
        };
        request
            .absolute_url()
            .and_then(|url| scheme_and_host(&url))
            .is_some_and(|own| own == origin)
    }

    pub fn is_cors_request<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        request.has_header(header::ORIGIN) && !self.is_same_host(request)
    }

    pub fn is_preflight_request<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        self.is_cors_request(request)
            && request.method() == method::OPTIONS
            && request.has_header(header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    /// Origin-level gate only: method and headers are not consulted.
    pub fn is_request_allowed<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        !self.is_cors_request(request) || self.check_origin(request)
    }

    pub fn check_origin<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        match request.header(header::ORIGIN) {
            Some(origin) => self.policy.allowed_origins.allows(origin),
            None => matches!(self.policy.allowed_origins, AllowedOrigins::Any),
        }
    }

    /// Checks the announced preflight method, or the request's own method when no
    /// `Access-Control-Request-Method` header is present.
    ///
    /// An announced method that cannot be read passes only under a wildcard policy.
    pub fn check_method<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        match Self::evaluated_method(request) {
            Some(method) => self.policy.allowed_methods.allows(method),
            None => matches!(self.policy.allowed_methods, AllowedMethods::Any),
        }
    }

    pub fn check_request_headers<R>(&self, request: &R) -> bool
    where
        R: RequestView + ?Sized,
    {
        self.first_disallowed_header(request).is_none()
    }

    /// Runs the origin, method and header checks in that order and reports the first
    /// failure.
    pub fn check<R>(&self, request: &R) -> CorsDecision
    where
        R: RequestView + ?Sized,
    {
        if !self.check_origin(request) {
            return CorsDecision::Rejected(CorsRejection::OriginNotAllowed {
                origin: request.header(header::ORIGIN).map(str::to_owned),
            });
        }

        if !self.check_method(request) {
            return CorsDecision::Rejected(CorsRejection::MethodNotAllowed {
                method: Self::evaluated_method(request)
                    .unwrap_or_default()
                    .to_owned(),
            });
        }

        if let Some(disallowed) = self.first_disallowed_header(request) {
            return CorsDecision::Rejected(CorsRejection::HeaderNotAllowed { header: disallowed });
        }

        CorsDecision::Allowed
    }

    /// Headers an accepted preflight for `request` carries, in emission order.
    pub fn preflight_headers<R>(&self, request: &R) -> Vec<Header>
    where
        R: RequestView + ?Sized,
    {
        HeaderBuilder::new(&self.policy).preflight_headers(request)
    }

    /// Evaluates the request and writes either the preflight headers or the rejection.
    ///
    /// Returns [`Flow::Continue`] for non-CORS requests and accepted requests.
    pub fn handle_preflight_request<R, S>(&self, request: &R, response: &mut S) -> Flow
    where
        R: RequestView + ?Sized,
        S: ResponseSink + ?Sized,
    {
        if !self.is_cors_request(request) {
            return Flow::Continue;
        }

        if let CorsDecision::Rejected(rejection) = self.check(request) {
            Self::reject(&rejection, response);
            return Flow::Stop;
        }

        for (name, value) in self.preflight_headers(request) {
            response.set_header(name, &value);
        }
        Flow::Continue
    }

    /// Full CORS handling for one request.
    ///
    /// Preflights always stop the caller. Actual cross-origin requests continue only when
    /// they pass every check; they receive no success headers.
    pub fn handle<R, S>(&self, request: &R, response: &mut S) -> Flow
    where
        R: RequestView + ?Sized,
        S: ResponseSink + ?Sized,
    {
        if !self.is_cors_request(request) {
            debug!(method = request.method(), "not a CORS request, passing through");
            return Flow::Continue;
        }

        if self.is_preflight_request(request) {
            debug!("handling CORS preflight request");
            self.handle_preflight_request(request, response);
            return Flow::Stop;
        }

        debug!(method = request.method(), "handling actual CORS request");
        match self.check(request) {
            CorsDecision::Allowed => Flow::Continue,
            CorsDecision::Rejected(rejection) => {
                Self::reject(&rejection, response);
                Flow::Stop
            }
        }
    }

    /// `None` when `Access-Control-Request-Method` was sent but cannot be read.
    fn evaluated_method<R>(request: &R) -> Option<&str>
    where
        R: RequestView + ?Sized,
    {
        if request.has_header(header::ACCESS_CONTROL_REQUEST_METHOD) {
            return request.header(header::ACCESS_CONTROL_REQUEST_METHOD);
        }
        Some(request.method())
    }

    /// An unreadable `Access-Control-Request-Headers` value fails a list policy as a
    /// whole and is reported under the header's own name.
    fn first_disallowed_header<R>(&self, request: &R) -> Option<String>
    where
        R: RequestView + ?Sized,
    {
        match request.header(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            Some(requested) => self.policy.allowed_headers.first_disallowed(requested),
            None if request.has_header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                && !matches!(self.policy.allowed_headers, AllowedHeaders::Any) =>
            {
                Some(header::ACCESS_CONTROL_REQUEST_HEADERS.to_ascii_lowercase())
            }
            None => None,
        }
    }

    fn reject<S>(rejection: &CorsRejection, response: &mut S)
    where
        S: ResponseSink + ?Sized,
    {
        match rejection {
            CorsRejection::OriginNotAllowed { origin } => {
                warn!(
                    origin = origin.as_deref().unwrap_or_default(),
                    "CORS origin not allowed"
                );
            }
            CorsRejection::MethodNotAllowed { method } => {
                warn!(method = method.as_str(), "CORS method not allowed");
            }
            CorsRejection::HeaderNotAllowed { header } => {
                warn!(header = header.as_str(), "CORS request header not allowed");
            }
        }
        response.set_status(rejection.status());
        response.set_body(rejection.body());
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
