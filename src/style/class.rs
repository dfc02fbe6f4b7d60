//! Status class selection.

use axum::http::StatusCode;

/// Hundreds-digit grouping of a status code, used to pick a log style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// Anything below 300 (1xx and 2xx).
    Success,
    /// 3xx.
    Redirect,
    /// 4xx.
    ClientError,
    /// 5xx and above.
    ServerError,
}

impl StatusClass {
    /// Classify a raw status code.
    pub fn from_code(code: u16) -> Self {
        if code < 300 {
            StatusClass::Success
        } else if code < 400 {
            StatusClass::Redirect
        } else if code < 500 {
            StatusClass::ClientError
        } else {
            StatusClass::ServerError
        }
    }
}

impl From<StatusCode> for StatusClass {
    fn from(status: StatusCode) -> Self {
        Self::from_code(status.as_u16())
    }
}
