//! HTTP status codes
use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LookupError, LookupErrorKind};

mod series;

pub use series::StatusSeries;

macro_rules! status_codes {
    (
        $(
            ($name:ident, $code:literal, $series:ident, $reason:literal);
        )+
    ) => {
        /// A standard HTTP status code.
        ///
        /// This is a closed set; codes outside the catalog cannot be
        /// represented.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Status {
            $(
                #[doc = concat!(stringify!($code), " ", $reason)]
                $name,
            )+
        }

        impl Status {
            /// Every status in ascending code order.
            pub const ALL: &'static [Status] = &[$(Self::$name,)+];

            /// Returns the numeric code.
            pub const fn code(self) -> u16 {
                match self {
                    $(Self::$name => $code,)+
                }
            }

            /// Returns the series the code belongs to.
            pub const fn series(self) -> StatusSeries {
                match self {
                    $(Self::$name => StatusSeries::$series,)+
                }
            }

            /// Returns the reason phrase such as "Not Found".
            pub const fn reason_phrase(self) -> &'static str {
                match self {
                    $(Self::$name => $reason,)+
                }
            }
        }
    };
}

status_codes! {
    (Continue, 100, Informational, "Continue");
    (SwitchingProtocols, 101, Informational, "Switching Protocols");
    (Processing, 102, Informational, "Processing");
    (EarlyHints, 103, Informational, "Early Hints");
    (Ok, 200, Successful, "OK");
    (Created, 201, Successful, "Created");
    (Accepted, 202, Successful, "Accepted");
    (NonAuthoritativeInformation, 203, Successful, "Non-Authoritative Information");
    (NoContent, 204, Successful, "No Content");
    (ResetContent, 205, Successful, "Reset Content");
    (PartialContent, 206, Successful, "Partial Content");
    (MultiStatus, 207, Successful, "Multi-Status");
    (AlreadyReported, 208, Successful, "Already Reported");
    (ImUsed, 226, Successful, "IM Used");
    (MultipleChoices, 300, Redirection, "Multiple Choices");
    (MovedPermanently, 301, Redirection, "Moved Permanently");
    (Found, 302, Redirection, "Found");
    (SeeOther, 303, Redirection, "See Other");
    (NotModified, 304, Redirection, "Not Modified");
    (TemporaryRedirect, 307, Redirection, "Temporary Redirect");
    (PermanentRedirect, 308, Redirection, "Permanent Redirect");
    (BadRequest, 400, ClientError, "Bad Request");
    (Unauthorized, 401, ClientError, "Unauthorized");
    (PaymentRequired, 402, ClientError, "Payment Required");
    (Forbidden, 403, ClientError, "Forbidden");
    (NotFound, 404, ClientError, "Not Found");
    (MethodNotAllowed, 405, ClientError, "Method Not Allowed");
    (NotAcceptable, 406, ClientError, "Not Acceptable");
    (ProxyAuthenticationRequired, 407, ClientError, "Proxy Authentication Required");
    (RequestTimeout, 408, ClientError, "Request Timeout");
    (Conflict, 409, ClientError, "Conflict");
    (Gone, 410, ClientError, "Gone");
    (LengthRequired, 411, ClientError, "Length Required");
    (PreconditionFailed, 412, ClientError, "Precondition Failed");
    (ContentTooLarge, 413, ClientError, "Content Too Large");
    (UriTooLong, 414, ClientError, "URI Too Long");
    (UnsupportedMediaType, 415, ClientError, "Unsupported Media Type");
    (RequestedRangeNotSatisfiable, 416, ClientError, "Requested range not satisfiable");
    (ExpectationFailed, 417, ClientError, "Expectation Failed");
    (ImATeapot, 418, ClientError, "I'm a teapot");
    (MisdirectedRequest, 421, ClientError, "Misdirected Request");
    (UnprocessableEntity, 422, ClientError, "Unprocessable Entity");
    (Locked, 423, ClientError, "Locked");
    (FailedDependency, 424, ClientError, "Failed Dependency");
    (TooEarly, 425, ClientError, "Too Early");
    (UpgradeRequired, 426, ClientError, "Upgrade Required");
    (PreconditionRequired, 428, ClientError, "Precondition Required");
    (TooManyRequests, 429, ClientError, "Too Many Requests");
    (RequestHeaderFieldsTooLarge, 431, ClientError, "Request Header Fields Too Large");
    (UnavailableForLegalReasons, 451, ClientError, "Unavailable For Legal Reasons");
    (InternalServerError, 500, ServerError, "Internal Server Error");
    (NotImplemented, 501, ServerError, "Not Implemented");
    (BadGateway, 502, ServerError, "Bad Gateway");
    (ServiceUnavailable, 503, ServerError, "Service Unavailable");
    (GatewayTimeout, 504, ServerError, "Gateway Timeout");
    (HttpVersionNotSupported, 505, ServerError, "HTTP Version not supported");
    (VariantAlsoNegotiates, 506, ServerError, "Variant Also Negotiates");
    (InsufficientStorage, 507, ServerError, "Insufficient Storage");
    (LoopDetected, 508, ServerError, "Loop Detected");
    (BandwidthLimitExceeded, 509, ServerError, "Bandwidth Limit Exceeded");
    (NotExtended, 510, ServerError, "Not Extended");
    (NetworkAuthenticationRequired, 511, ServerError, "Network Authentication Required");
}

impl Status {
    /// Returns the status with the given code.
    pub fn of(status_code: u16) -> Result<Self, LookupError> {
        Self::resolve(status_code)
            .ok_or_else(|| LookupError::new(LookupErrorKind::Status, status_code.to_string()))
    }

    /// Returns the status with the given code, or `None` for codes not in
    /// the catalog.
    pub fn resolve(status_code: u16) -> Option<Self> {
        let status = Self::ALL
            .iter()
            .copied()
            .find(|status| status.code() == status_code);

        if status.is_none() {
            tracing::trace!(status_code, "no status");
        }

        status
    }

    pub fn is_informational(self) -> bool {
        self.series() == StatusSeries::Informational
    }

    pub fn is_successful(self) -> bool {
        self.series() == StatusSeries::Successful
    }

    pub fn is_redirection(self) -> bool {
        self.series() == StatusSeries::Redirection
    }

    pub fn is_client_error(self) -> bool {
        self.series() == StatusSeries::ClientError
    }

    pub fn is_server_error(self) -> bool {
        self.series() == StatusSeries::ServerError
    }

    /// Returns whether the status is a client or server error.
    pub fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

impl TryFrom<u16> for Status {
    type Error = LookupError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        value.code()
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Status, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u16::deserialize(deserializer)?;
        Self::of(code).map_err(serde::de::Error::custom)
    }
}
