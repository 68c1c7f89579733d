use indexmap::IndexMap;

/// Response headers in the order they were written.
pub type Headers = IndexMap<String, String>;

/// Write-only response the engine emits headers and rejections into.
pub trait ResponseSink {
    fn set_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);

    /// Diagnostic body for rejections. Sinks without a body may ignore it.
    fn set_body(&mut self, _body: &str) {}
}

/// In-memory [`ResponseSink`] for hosts that build their response afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsResponse {
    pub headers: Headers,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl CorsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl ResponseSink for CorsResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            *existing = value.to_owned();
            return;
        }
        self.headers.insert(name.to_owned(), value.to_owned());
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_body(&mut self, body: &str) {
        self.body = Some(body.to_owned());
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
