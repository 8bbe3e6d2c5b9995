//! Start lines of HTTP messages
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{method::Method, status::Status, version::ProtocolVersion};

/// The first line of a request such as `GET /users HTTP/1.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RequestLine {
    pub method: Method,
    /// The request target. It is not validated.
    pub target: String,
    pub version: ProtocolVersion,
}

impl RequestLine {
    pub fn new<T: Into<String>>(method: Method, target: T, version: ProtocolVersion) -> Self {
        Self {
            method,
            target: target.into(),
            version,
        }
    }
}

impl Display for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.method, self.target, self.version)
    }
}

/// The first line of a response such as `HTTP/1.1 404 Not Found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct StatusLine {
    pub version: ProtocolVersion,
    pub status: Status,
}

impl StatusLine {
    pub fn new(version: ProtocolVersion, status: Status) -> Self {
        Self { version, status }
    }
}

impl Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.version, self.status)
    }
}
