//! Grammar checks for header names and values.
use nom::{Parser, combinator::all_consuming};

use crate::error::{InvalidArgumentError, InvalidArgumentKind};

pub(crate) mod fields;

/// Returns whether the value is a valid header field name (an RFC 9110
/// `token`).
pub fn validate_field_name(value: &[u8]) -> Result<(), InvalidArgumentError> {
    match all_consuming(fields::field_name).parse(value) {
        Ok((_input, _output)) => Ok(()),
        Err(error) => Err(convert_error(InvalidArgumentKind::InvalidName, value, error)),
    }
}

/// Returns whether the value is a valid header field value.
///
/// Obsolete line folding is not permitted.
pub fn validate_field_value(value: &[u8]) -> Result<(), InvalidArgumentError> {
    match all_consuming(fields::field_value).parse(value) {
        Ok((_input, _output)) => Ok(()),
        Err(error) => Err(convert_error(InvalidArgumentKind::InvalidValue, value, error)),
    }
}

fn convert_error(
    kind: InvalidArgumentKind,
    value: &[u8],
    error: nom::Err<nom::error::Error<&[u8]>>,
) -> InvalidArgumentError {
    match error {
        nom::Err::Incomplete(_needed) => InvalidArgumentError::new(kind),
        nom::Err::Error(error) | nom::Err::Failure(error) => {
            let position = value.len() - error.input.len();

            InvalidArgumentError::new(kind)
                .with_snippet(
                    error.input[0..error.input.len().min(16)]
                        .escape_ascii()
                        .to_string(),
                )
                .with_source(nom::error::Error::new(position, error.code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field_name() {
        assert!(validate_field_name(b"Set-Cookie").is_ok());
        assert!(validate_field_name(b"x_tag.v2").is_ok());

        let error = validate_field_name(b"").unwrap_err();
        assert_eq!(error.kind(), InvalidArgumentKind::InvalidName);

        let error = validate_field_name(b"X Tag").unwrap_err();
        assert_eq!(error.kind(), InvalidArgumentKind::InvalidName);
        assert_eq!(error.snippet(), Some(" Tag"));

        assert!(validate_field_name(b"X-Tag:").is_err());
    }

    #[test]
    fn test_validate_field_value() {
        assert!(validate_field_value(b"").is_ok());
        assert!(validate_field_value(b"text/html; charset=utf-8").is_ok());
        assert!(validate_field_value("caf\u{e9}".as_bytes()).is_ok());

        let error = validate_field_value(b"a\r\nInjected: 1").unwrap_err();
        assert_eq!(error.kind(), InvalidArgumentKind::InvalidValue);
        assert_eq!(error.snippet(), Some("\\r\\nInjected: 1"));

        assert!(validate_field_value(b" leading").is_err());
        assert!(validate_field_value(b"nul\0").is_err());
    }
}
