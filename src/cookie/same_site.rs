use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LookupError, LookupErrorKind};

/// Cross-site sending policy of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl SameSite {
    pub const ALL: [SameSite; 3] = [Self::Lax, Self::Strict, Self::None];

    /// Returns the display form: "Lax", "Strict" or "None".
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lax => "Lax",
            Self::Strict => "Strict",
            Self::None => "None",
        }
    }

    /// Returns the policy for the name, ignoring ASCII case.
    pub fn of(name: &str) -> Result<Self, LookupError> {
        Self::resolve(name).ok_or_else(|| LookupError::new(LookupErrorKind::SameSite, name))
    }

    pub fn resolve(name: &str) -> Option<Self> {
        let result = Self::ALL
            .into_iter()
            .find(|item| item.as_str().eq_ignore_ascii_case(name));

        if result.is_none() {
            tracing::trace!(name, "no same-site policy");
        }

        result
    }
}

impl Display for SameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSite {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Serialize for SameSite {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SameSite {
    fn deserialize<D>(deserializer: D) -> Result<SameSite, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::of(&name).map_err(serde::de::Error::custom)
    }
}
