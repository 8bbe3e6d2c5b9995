//! HTTP request methods
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LookupError, LookupErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Self::Get,
        Self::Head,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Connect,
        Self::Options,
        Self::Trace,
        Self::Patch,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Patch => "PATCH",
        }
    }

    /// Returns the method for the token.
    ///
    /// Method names are case-sensitive so "get" does not match.
    pub fn of(method: &str) -> Result<Self, LookupError> {
        Self::resolve(method).ok_or_else(|| LookupError::new(LookupErrorKind::Method, method))
    }

    pub fn resolve(method: &str) -> Option<Self> {
        let result = Self::ALL.into_iter().find(|item| item.as_str() == method);

        if result.is_none() {
            tracing::trace!(method, "no method");
        }

        result
    }

    /// Returns whether the method is read-only by definition.
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options | Self::Trace)
    }

    /// Returns whether repeating the request has the same intended effect.
    pub fn is_idempotent(self) -> bool {
        self.is_safe() || matches!(self, Self::Put | Self::Delete)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Serialize for Method {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D>(deserializer: D) -> Result<Method, D::Error>
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
    fn test_method_of() {
        for method in Method::ALL {
            assert_eq!(Method::of(method.as_str()).unwrap(), method);
        }

        assert_eq!(Method::resolve("get"), None);
        assert_eq!(Method::of("BREW").unwrap_err().kind(), LookupErrorKind::Method);
    }

    #[test]
    fn test_method_properties() {
        assert!(Method::Get.is_safe());
        assert!(Method::Get.is_idempotent());
        assert!(!Method::Put.is_safe());
        assert!(Method::Put.is_idempotent());
        assert!(!Method::Post.is_idempotent());
        assert!(!Method::Patch.is_idempotent());
    }
}
