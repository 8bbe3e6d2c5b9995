//! Error representations
use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeneralError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

impl GeneralError {
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(..))
    }

    pub fn as_lookup(&self) -> Option<&LookupError> {
        if let Self::Lookup(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_lookup(self) -> Result<LookupError, Self> {
        if let Self::Lookup(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(..))
    }

    pub fn as_invalid_argument(&self) -> Option<&InvalidArgumentError> {
        if let Self::InvalidArgument(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_invalid_argument(self) -> Result<InvalidArgumentError, Self> {
        if let Self::InvalidArgument(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

/// Error for a value that does not match any constant of a closed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct LookupError {
    kind: LookupErrorKind,
    input: String,
}

impl LookupError {
    pub fn new<S: Into<String>>(kind: LookupErrorKind, input: S) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// Returns the catalog that was searched.
    pub fn kind(&self) -> LookupErrorKind {
        self.kind
    }

    /// Returns the rejected input as text.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no matching {} constant for [{}]", self.kind, self.input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LookupErrorKind {
    StatusSeries,
    Status,
    ProtocolVersion,
    SameSite,
    Method,
}

impl Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::StatusSeries => "status series",
            Self::Status => "status",
            Self::ProtocolVersion => "protocol version",
            Self::SameSite => "same-site",
            Self::Method => "method",
        };

        f.write_str(value)
    }
}

/// Error for a value that violates a construction-time invariant.
#[derive(Debug, thiserror::Error)]
pub struct InvalidArgumentError {
    kind: InvalidArgumentKind,
    snippet: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl InvalidArgumentError {
    pub fn new(kind: InvalidArgumentKind) -> Self {
        Self {
            kind,
            snippet: None,
            source: None,
        }
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.snippet = Some(value.into());
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> InvalidArgumentKind {
        self.kind
    }

    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid argument: {}", self.kind)?;

        if let Some(snippet) = &self.snippet {
            write!(f, " near '{}'", snippet)?;
        }

        Ok(())
    }
}

impl From<InvalidArgumentKind> for InvalidArgumentError {
    fn from(value: InvalidArgumentKind) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidArgumentKind {
    EmptyName,
    EmptyValues,
    InvalidName,
    InvalidValue,
}

impl Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::EmptyName => "empty name",
            Self::EmptyValues => "empty value set",
            Self::InvalidName => "invalid name",
            Self::InvalidValue => "invalid value",
        };

        f.write_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let error = LookupError::new(LookupErrorKind::Status, "999");

        assert_eq!(error.kind(), LookupErrorKind::Status);
        assert_eq!(error.input(), "999");
        assert_eq!(error.to_string(), "no matching status constant for [999]");
    }

    #[test]
    fn test_invalid_argument_display() {
        let error =
            InvalidArgumentError::new(InvalidArgumentKind::InvalidName).with_snippet("a b");

        assert_eq!(error.to_string(), "invalid argument: invalid name near 'a b'");
        assert_eq!(error.snippet(), Some("a b"));
    }

    #[test]
    fn test_general_error_accessors() {
        let error = GeneralError::from(LookupError::new(LookupErrorKind::Method, "get"));

        assert!(error.is_lookup());
        assert!(!error.is_invalid_argument());
        assert_eq!(error.as_lookup().map(|e| e.kind()), Some(LookupErrorKind::Method));

        let error = error.try_into_invalid_argument().unwrap_err();
        assert!(error.try_into_lookup().is_ok());

        let error =
            GeneralError::from(InvalidArgumentError::from(InvalidArgumentKind::EmptyValues));
        assert_eq!(
            error.as_invalid_argument().map(|e| e.kind()),
            Some(InvalidArgumentKind::EmptyValues)
        );
    }
}
