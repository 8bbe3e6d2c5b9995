//! HTTP protocol versions
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LookupError, LookupErrorKind};

/// Protocol version token as it appears in a start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProtocolVersion {
    Http11,
    Http2,
    Http3,
}

impl ProtocolVersion {
    pub const ALL: [ProtocolVersion; 3] = [Self::Http11, Self::Http2, Self::Http3];

    /// Returns the canonical token such as "HTTP/1.1".
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http11 => "HTTP/1.1",
            Self::Http2 => "HTTP/2",
            Self::Http3 => "HTTP/3",
        }
    }

    /// Returns the version for the token.
    ///
    /// Matching is case-sensitive.
    pub fn of(version: &str) -> Result<Self, LookupError> {
        Self::resolve(version)
            .ok_or_else(|| LookupError::new(LookupErrorKind::ProtocolVersion, version))
    }

    pub fn resolve(version: &str) -> Option<Self> {
        let result = Self::ALL.into_iter().find(|item| item.as_str() == version);

        if result.is_none() {
            tracing::trace!(version, "no protocol version");
        }

        result
    }
}

impl Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Serialize for ProtocolVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProtocolVersion {
    fn deserialize<D>(deserializer: D) -> Result<ProtocolVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Self::of(&token).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_of() {
        assert_eq!(ProtocolVersion::of("HTTP/1.1").unwrap(), ProtocolVersion::Http11);
        assert_eq!(ProtocolVersion::of("HTTP/2").unwrap(), ProtocolVersion::Http2);
        assert_eq!(ProtocolVersion::of("HTTP/3").unwrap(), ProtocolVersion::Http3);
        assert_eq!(ProtocolVersion::of("HTTP/1.1").unwrap().to_string(), "HTTP/1.1");
    }

    #[test]
    fn test_version_no_match() {
        assert_eq!(ProtocolVersion::resolve("HTTP/9.9"), None);
        assert_eq!(ProtocolVersion::resolve("http/1.1"), None);
        assert_eq!(ProtocolVersion::resolve("HTTP/1.0"), None);
        assert_eq!(ProtocolVersion::resolve(""), None);

        let error = ProtocolVersion::of("HTTP/9.9").unwrap_err();
        assert_eq!(error.kind(), LookupErrorKind::ProtocolVersion);
        assert_eq!(error.input(), "HTTP/9.9");
    }

    #[test]
    fn test_version_from_str() {
        let version: ProtocolVersion = "HTTP/2".parse().unwrap();
        assert_eq!(version, ProtocolVersion::Http2);
        assert!("HTTP/2.0".parse::<ProtocolVersion>().is_err());
    }
}
