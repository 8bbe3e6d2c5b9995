//! `Set-Cookie` attributes
use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InvalidArgumentError, InvalidArgumentKind};

mod same_site;

pub use same_site::SameSite;

/// Defaults applied when a [`SetCookie`] is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookieConfig {
    /// Domain attribute, "localhost" by default
    pub domain: String,
    /// Path attribute, "/" by default
    pub path: String,
    /// Max-Age in seconds, 0 by default
    pub max_age: i64,
    pub http_only: bool,
    /// Secure attribute, enabled by default
    pub secure: bool,
    /// SameSite attribute, [`SameSite::None`] by default
    pub same_site: SameSite,
    pub partitioned: bool,
}

impl Default for SetCookieConfig {
    fn default() -> Self {
        Self {
            domain: "localhost".to_string(),
            path: "/".to_string(),
            max_age: 0,
            http_only: false,
            secure: true,
            same_site: SameSite::None,
            partitioned: false,
        }
    }
}

/// Attributes of one cookie sent with a `Set-Cookie` response header.
///
/// Values are immutable. The `with_*` methods return a new value with one
/// attribute replaced and leave the original untouched:
///
/// ```
/// use httpmeta::cookie::SetCookie;
///
/// let original = SetCookie::new("id", "v1").unwrap();
/// let updated = original.with_max_age(5000).with_domain("example.com");
///
/// assert_eq!(original.max_age(), 0);
/// assert_eq!(updated.max_age(), 5000);
/// assert_eq!(updated.domain(), "example.com");
/// ```
///
/// No attribute is validated against the cookie grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCookie {
    #[serde(deserialize_with = "deserialize_name")]
    name: String,
    value: String,
    domain: String,
    path: String,
    expires: DateTime<FixedOffset>,
    max_age: i64,
    http_only: bool,
    secure: bool,
    same_site: SameSite,
    partitioned: bool,
}

impl SetCookie {
    /// Create a cookie with the default attributes.
    ///
    /// The expiry is set to the current local time.
    pub fn new<N, V>(name: N, value: V) -> Result<Self, InvalidArgumentError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self::with_config(name, value, &SetCookieConfig::default())
    }

    /// Create a cookie with attributes taken from the given configuration.
    pub fn with_config<N, V>(
        name: N,
        value: V,
        config: &SetCookieConfig,
    ) -> Result<Self, InvalidArgumentError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();

        if name.is_empty() {
            return Err(InvalidArgumentError::new(InvalidArgumentKind::EmptyName));
        }

        Ok(Self {
            name,
            value: value.into(),
            domain: config.domain.clone(),
            path: config.path.clone(),
            expires: Local::now().fixed_offset(),
            max_age: config.max_age,
            http_only: config.http_only,
            secure: config.secure,
            same_site: config.same_site,
            partitioned: config.partitioned,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn expires(&self) -> DateTime<FixedOffset> {
        self.expires
    }

    /// Returns Max-Age in seconds.
    pub fn max_age(&self) -> i64 {
        self.max_age
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    pub fn partitioned(&self) -> bool {
        self.partitioned
    }

    /// Returns the length of the value in bytes.
    ///
    /// The name is not counted.
    pub fn size(&self) -> usize {
        self.value.len()
    }

    pub fn with_value<S: Into<String>>(&self, value: S) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    pub fn with_domain<S: Into<String>>(&self, domain: S) -> Self {
        Self {
            domain: domain.into(),
            ..self.clone()
        }
    }

    pub fn with_path<S: Into<String>>(&self, path: S) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub fn with_expires(&self, expires: DateTime<FixedOffset>) -> Self {
        Self {
            expires,
            ..self.clone()
        }
    }

    pub fn with_max_age(&self, max_age: i64) -> Self {
        Self {
            max_age,
            ..self.clone()
        }
    }

    pub fn with_http_only(&self, http_only: bool) -> Self {
        Self {
            http_only,
            ..self.clone()
        }
    }

    pub fn with_secure(&self, secure: bool) -> Self {
        Self {
            secure,
            ..self.clone()
        }
    }

    pub fn with_same_site(&self, same_site: SameSite) -> Self {
        Self {
            same_site,
            ..self.clone()
        }
    }

    pub fn with_partitioned(&self, partitioned: bool) -> Self {
        Self {
            partitioned,
            ..self.clone()
        }
    }
}

impl Display for SetCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={}; domain={}; path={}; expires={}; maxAge={}; size={}; \
            httpOnly={}; secure={}; sameSite={}; partitioned={}",
            self.name,
            self.value,
            self.domain,
            self.path,
            self.expires,
            self.max_age,
            self.size(),
            self.http_only,
            self.secure,
            self.same_site,
            self.partitioned
        )
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    if name.is_empty() {
        Err(serde::de::Error::custom(InvalidArgumentError::new(
            InvalidArgumentKind::EmptyName,
        )))
    } else {
        Ok(name)
    }
}
