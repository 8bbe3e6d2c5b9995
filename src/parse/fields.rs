use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while_m_n, take_while1},
    combinator::recognize,
    multi::many0_count,
    sequence::pair,
};

pub fn field_name(input: &[u8]) -> IResult<&[u8], &[u8]> {
    token(input)
}

pub fn token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while1(is_tchar).parse(input)
}

/// A field value without obsolete line folding.
pub fn field_value(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(many0_count(field_content)).parse(input)
}

fn field_content(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(pair(
        take_while_m_n(1, 1, is_field_vchar),
        take_while(is_field_char),
    ))
    .parse(input)
}

fn is_field_vchar(b: u8) -> bool {
    b.is_ascii_graphic() || is_obs_text(b)
}

fn is_field_char(b: u8) -> bool {
    is_field_vchar(b) || b == b' ' || b == b'\t'
}

pub fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

pub fn is_obs_text(b: u8) -> bool {
    b >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token() {
        let (remain, output) = token(b"X-Tag: a").unwrap();

        assert_eq!(output, b"X-Tag");
        assert_eq!(remain, b": a");
        assert!(token(b"").is_err());
        assert!(token(b" a").is_err());
    }

    #[test]
    fn test_field_value() {
        let (remain, output) = field_value(b"a b\tc").unwrap();
        assert_eq!(output, b"a b\tc");
        assert!(remain.is_empty());

        let (remain, output) = field_value(b"").unwrap();
        assert!(output.is_empty());
        assert!(remain.is_empty());

        let (remain, output) = field_value(b"v1\r\n  1").unwrap();
        assert_eq!(output, b"v1");
        assert_eq!(remain, b"\r\n  1");
    }
}
