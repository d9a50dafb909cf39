//! Quoted-printable value decoding (vCard 2.1 and Apple exports).

use encoding_rs::{Encoding, UTF_8};

/// Decodes quoted-printable bytes.
///
/// `=XX` hex escapes become the byte they name; `=` directly followed by a
/// line terminator (LF or CRLF) is a soft line break and is discarded.
/// Invalid or truncated escapes are passed through verbatim. This never
/// fails.
#[must_use]
pub fn qp_decode(input: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        if b != b'=' {
            decoded.push(b);
            i += 1;
            continue;
        }

        let rest = &input[i + 1..];
        if rest.starts_with(b"\r\n") {
            i += 3;
        } else if rest.starts_with(b"\n") {
            i += 2;
        } else if let Some(byte) = rest.get(..2).and_then(hex_byte) {
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(b);
            i += 1;
        }
    }

    decoded
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let hi = char::from(pair[0]).to_digit(16)?;
    let lo = char::from(pair[1]).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

/// Interprets decoded bytes in the named charset.
///
/// Unknown or missing labels fall back to UTF-8. Malformed sequences are
/// replaced rather than rejected.
#[must_use]
pub fn decode_charset(charset: Option<&str>, bytes: &[u8]) -> String {
    let encoding = charset
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(UTF_8);

    let (text, malformed) = encoding.decode_with_bom_removal(bytes);
    if malformed {
        tracing::debug!(charset = encoding.name(), "Replaced malformed bytes while decoding value");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn decodes_hex_escapes() {
        assert_eq!(qp_decode(b"hello world"), b"hello world");
        assert_eq!(qp_decode(b"=ABfoo"), b"\xabfoo");
        assert_eq!(qp_decode(b"foo=AB=CD"), b"foo\xab\xcd");
        assert_eq!(qp_decode(b"caf=c3=a9"), "café".as_bytes());
    }

    #[test]
    fn removes_soft_line_breaks() {
        assert_eq!(qp_decode(b"foo=\nbar"), b"foobar");
        assert_eq!(qp_decode(b"foo=\r\nbar"), b"foobar");
        assert_eq!(qp_decode(b"foo=\r\n"), b"foo");
    }

    #[test]
    fn passes_invalid_sequences_through() {
        assert_eq!(qp_decode(b"foo=()bar"), b"foo=()bar");
        assert_eq!(qp_decode(b"foo="), b"foo=");
        assert_eq!(qp_decode(b"foo=A"), b"foo=A");
    }

    #[test]
    fn decodes_latin1_charset() {
        let bytes = qp_decode(b"J=F6rg");
        assert_eq!(decode_charset(Some("ISO-8859-1"), &bytes), "Jörg");
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        assert_eq!(decode_charset(Some("x-made-up"), "naïve".as_bytes()), "naïve");
        assert_eq!(decode_charset(None, b"plain"), "plain");
    }

    proptest! {
        #[test]
        fn qp_decode_never_fails(s in ".*") {
            qp_decode(s.as_bytes());
        }

        #[test]
        fn qp_decode_is_identity_without_equals(s in "[^=]*") {
            prop_assert_eq!(qp_decode(s.as_bytes()), s.as_bytes().to_vec());
        }
    }
}
