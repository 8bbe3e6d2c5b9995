//! HTTP headers
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::{InvalidArgumentError, InvalidArgumentKind},
    fields::ValueSet,
};

/// Separator placed between values when a header is rendered.
pub const VALUE_SEPARATOR: &str = ";";

/// A header name paired with one or more values.
///
/// The values form an insertion-ordered set and are rendered as a single
/// string joined by [`VALUE_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeader")]
pub struct Header {
    name: String,
    values: ValueSet,
}

impl Header {
    /// Create a header with a single value.
    pub fn new<N, V>(name: N, value: V) -> Result<Self, InvalidArgumentError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self::with_values(name, [value])
    }

    /// Create a header from a set of values.
    ///
    /// Fails when the name is empty or there are no values.
    pub fn with_values<N, I, V>(name: N, values: I) -> Result<Self, InvalidArgumentError>
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::from_parts(name.into(), values.into_iter().collect())
    }

    fn from_parts(name: String, values: ValueSet) -> Result<Self, InvalidArgumentError> {
        if name.is_empty() {
            return Err(InvalidArgumentError::new(InvalidArgumentKind::EmptyName));
        }

        if values.is_empty() {
            return Err(
                InvalidArgumentError::new(InvalidArgumentKind::EmptyValues).with_snippet(name)
            );
        }

        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ValueSet {
        &self.values
    }

    /// Returns the values joined in insertion order.
    pub fn value(&self) -> String {
        self.values.join(VALUE_SEPARATOR)
    }

    /// Returns whether the name and values conform to the HTTP field grammar.
    ///
    /// Construction does not perform this check.
    pub fn validate(&self) -> Result<(), InvalidArgumentError> {
        let result = crate::parse::validate_field_name(self.name.as_bytes()).and_then(|_| {
            self.values
                .iter()
                .try_for_each(|value| crate::parse::validate_field_value(value.as_bytes()))
        });

        if let Err(error) = &result {
            tracing::debug!(name = %self.name, %error, "header rejected");
        }

        result
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value())
    }
}

#[derive(Deserialize)]
struct RawHeader {
    name: String,
    values: ValueSet,
}

impl TryFrom<RawHeader> for Header {
    type Error = InvalidArgumentError;

    fn try_from(value: RawHeader) -> Result<Self, Self::Error> {
        Self::from_parts(value.name, value.values)
    }
}
