use simple_cors::constants::method;
use simple_cors::{Cors, CorsPolicy, CorsResponse, Flow, RawList, RawPolicy, RequestContext};

pub const SERVER_URL: &str = "https://api.example/resource";

/// Builds a [`Cors`] the way a configuration file would describe it.
#[derive(Default)]
pub struct CorsBuilder {
    raw: RawPolicy,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, value: impl Into<RawList>) -> Self {
        self.raw.allowed_origins = value.into();
        self
    }

    pub fn methods(mut self, value: impl Into<RawList>) -> Self {
        self.raw.allowed_methods = value.into();
        self
    }

    pub fn headers(mut self, value: impl Into<RawList>) -> Self {
        self.raw.allowed_headers = value.into();
        self
    }

    pub fn exposed_headers(mut self, value: impl Into<RawList>) -> Self {
        self.raw.exposed_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.raw.max_age = Some(seconds);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.raw.supports_credentials = enabled;
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(CorsPolicy::normalize(self.raw))
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn handle(self, cors: &Cors) -> (Flow, CorsResponse) {
        let ctx = RequestContext {
            method: &self.method,
            url: SERVER_URL,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        let mut response = CorsResponse::new();
        let flow = cors.handle(&ctx, &mut response);
        (flow, response)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn handle(self, cors: &Cors) -> (Flow, CorsResponse) {
        let ctx = RequestContext {
            method: method::OPTIONS,
            url: SERVER_URL,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        let mut response = CorsResponse::new();
        let flow = cors.handle(&ctx, &mut response);
        (flow, response)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
