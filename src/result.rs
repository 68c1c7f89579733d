use crate::constants::{body, status};

/// Outcome of checking a cross-origin request against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Allowed,
    Rejected(CorsRejection),
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// The first policy rule a request violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsRejection {
    OriginNotAllowed { origin: Option<String> },
    MethodNotAllowed { method: String },
    HeaderNotAllowed { header: String },
}

impl CorsRejection {
    pub fn status(&self) -> u16 {
        match self {
            Self::OriginNotAllowed { .. } | Self::HeaderNotAllowed { .. } => status::FORBIDDEN,
            Self::MethodNotAllowed { .. } => status::METHOD_NOT_ALLOWED,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Self::OriginNotAllowed { .. } => body::BAD_ORIGIN,
            Self::MethodNotAllowed { .. } => body::BAD_METHOD,
            Self::HeaderNotAllowed { .. } => body::DISALLOWED_HEADER,
        }
    }
}

/// Whether the caller should go on to run the wrapped application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn should_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}
