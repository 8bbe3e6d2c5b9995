use std::fmt::Display;

use crate::error::{LookupError, LookupErrorKind};

/// Classification band of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusSeries {
    /// 1xx
    Informational,
    /// 2xx
    Successful,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusSeries {
    pub const ALL: [StatusSeries; 5] = [
        Self::Informational,
        Self::Successful,
        Self::Redirection,
        Self::ClientError,
        Self::ServerError,
    ];

    /// Returns the band code (1 through 5).
    pub const fn value(self) -> u16 {
        match self {
            Self::Informational => 1,
            Self::Successful => 2,
            Self::Redirection => 3,
            Self::ClientError => 4,
            Self::ServerError => 5,
        }
    }

    /// Returns the series for a status code.
    pub fn of(status_code: u16) -> Result<Self, LookupError> {
        Self::resolve(status_code).ok_or_else(|| {
            LookupError::new(LookupErrorKind::StatusSeries, status_code.to_string())
        })
    }

    /// Returns the series for a status code, or `None` when the code is
    /// outside 100–599.
    pub fn resolve(status_code: u16) -> Option<Self> {
        let series_code = status_code / 100;
        let series = Self::ALL
            .into_iter()
            .find(|series| series.value() == series_code);

        if series.is_none() {
            tracing::trace!(status_code, "no status series");
        }

        series
    }

    fn label(self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Successful => "Successful",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        }
    }
}

impl Display for StatusSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_of() {
        assert_eq!(StatusSeries::of(100).unwrap(), StatusSeries::Informational);
        assert_eq!(StatusSeries::of(204).unwrap(), StatusSeries::Successful);
        assert_eq!(StatusSeries::of(399).unwrap(), StatusSeries::Redirection);
        assert_eq!(StatusSeries::of(418).unwrap(), StatusSeries::ClientError);
        assert_eq!(StatusSeries::of(599).unwrap(), StatusSeries::ServerError);
    }

    #[test]
    fn test_series_out_of_range() {
        assert_eq!(StatusSeries::resolve(0), None);
        assert_eq!(StatusSeries::resolve(99), None);
        assert_eq!(StatusSeries::resolve(600), None);

        let error = StatusSeries::of(600).unwrap_err();
        assert_eq!(error.kind(), LookupErrorKind::StatusSeries);
        assert_eq!(error.input(), "600");
    }

    #[test]
    fn test_series_value() {
        for (index, series) in StatusSeries::ALL.iter().enumerate() {
            assert_eq!(series.value() as usize, index + 1);
        }

        assert_eq!(StatusSeries::Informational.to_string(), "Informational");
        assert_eq!(StatusSeries::Successful.to_string(), "Successful");
        assert_eq!(StatusSeries::Redirection.to_string(), "Redirection");
        assert_eq!(StatusSeries::ClientError.to_string(), "Client Error");
        assert_eq!(StatusSeries::ServerError.to_string(), "Server Error");
    }
}
