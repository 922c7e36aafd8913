//! Url classification and decomposition.
//!
//! # Responsibilities
//! - Tell absolute urls from relative ones
//! - Split a parsed url into decoded path, ordered query pairs and hash
//! - Produce the decoded path + query + hash a template is matched against
//!
//! # Design Decisions
//! - Parsing follows the WHATWG URL standard via the `url` crate
//! - Template and url are decoded the same way: every escape is decoded
//!   except those of the reserved set `; / ? : @ & = + $ , #`, which stay as
//!   escapes so `%23` or `%26` never turn into a delimiter
//! - Percent-decoding must yield UTF-8; anything else is an error
//! - `+` in a query is kept as-is, the same as in the url being matched

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::{Position, Url};

use crate::error::ParseError;

/// Bytes whose escapes survive decoding.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Result of classifying a url string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlKind {
    Relative,
    Absolute(Url),
}

/// Classify `input` as an absolute or relative url.
pub fn classify(input: &str) -> UrlKind {
    match Url::parse(input) {
        Ok(url) => UrlKind::Absolute(url),
        Err(_) => UrlKind::Relative,
    }
}

/// The decoded parts of a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Path, always starting with `/`.
    pub path: String,
    /// Query pairs in declaration order.
    pub query: Vec<(String, String)>,
    /// `#` followed by the fragment, or empty when there is no fragment.
    pub hash: String,
}

impl UrlParts {
    /// Decompose a parsed url.
    pub fn from_url(url: &Url) -> Result<Self, ParseError> {
        let path = decode(url.path())?.into_owned();
        let query = match url.query() {
            Some(query) => query_pairs(query)?,
            None => Vec::new(),
        };
        let hash = match url.fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{}", decode(fragment)?),
            _ => String::new(),
        };

        Ok(Self { path, query, hash })
    }
}

/// The serialized origin of `url`, e.g. `https://localhost:3000`.
///
/// Urls without a host (`data:`, `file:` and the like) have an opaque origin,
/// reported as `None`.
pub fn origin(url: &Url) -> Option<String> {
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Decoded path + query + hash of `url`, with the origin removed.
pub fn decoded_target(url: &Url) -> Result<String, ParseError> {
    Ok(decode(&url[Position::BeforePath..])?.into_owned())
}

/// Split a raw query string into decoded pairs. Empty pieces are skipped and a
/// piece without `=` has an empty value. Escaped delimiters (`%26`, `%3D`)
/// stay escaped.
pub fn query_pairs(query: &str) -> Result<Vec<(String, String)>, ParseError> {
    query
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            Ok((decode(key)?.into_owned(), decode(value)?.into_owned()))
        })
        .collect()
}

/// Percent-decode `input`, keeping escapes of [`RESERVED`] bytes verbatim.
fn decode(input: &str) -> Result<Cow<'_, str>, ParseError> {
    let Some((before, escape, mut rest)) = next_reserved_escape(input) else {
        return decode_all(input, input);
    };

    let mut decoded = String::with_capacity(input.len());
    decoded.push_str(&decode_all(before, input)?);
    decoded.push_str(escape);

    while let Some((before, escape, after)) = next_reserved_escape(rest) {
        decoded.push_str(&decode_all(before, input)?);
        decoded.push_str(escape);
        rest = after;
    }
    decoded.push_str(&decode_all(rest, input)?);

    Ok(Cow::Owned(decoded))
}

/// Split `s` around its first escape of a reserved byte.
///
/// Reserved bytes are ASCII, so splitting there never cuts a multi-byte
/// UTF-8 sequence in half.
fn next_reserved_escape(s: &str) -> Option<(&str, &str, &str)> {
    let bytes = s.as_bytes();
    (0..bytes.len().saturating_sub(2)).find_map(|i| {
        if bytes[i] != b'%' || !bytes[i + 1].is_ascii_hexdigit() || !bytes[i + 2].is_ascii_hexdigit() {
            return None;
        }
        let byte = u8::from_str_radix(&s[i + 1..i + 3], 16).ok()?;
        RESERVED
            .contains(&byte)
            .then(|| (&s[..i], &s[i..i + 3], &s[i + 3..]))
    })
}

fn decode_all<'a>(part: &'a str, input: &str) -> Result<Cow<'a, str>, ParseError> {
    percent_decode_str(part)
        .decode_utf8()
        .map_err(|source| ParseError::Decode {
            input: input.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("/test"), UrlKind::Relative);
        assert_eq!(classify("test"), UrlKind::Relative);
        assert!(matches!(classify("https://localhost:3000/test"), UrlKind::Absolute(_)));
    }

    #[test]
    fn test_origin() {
        let url = Url::parse("https://localhost:3000/a?b=c#d").unwrap();
        assert_eq!(origin(&url).as_deref(), Some("https://localhost:3000"));

        let url = Url::parse("https://example.com:443/a").unwrap();
        assert_eq!(origin(&url).as_deref(), Some("https://example.com"));

        let url = Url::parse("data:text/plain,hello").unwrap();
        assert_eq!(origin(&url), None);
    }

    #[test]
    fn test_parts() {
        let url = Url::parse("https://localhost:3000/path1/%7Bid%7D?a={x}&b=&c#id-{y}").unwrap();
        let parts = UrlParts::from_url(&url).unwrap();

        assert_eq!(parts.path, "/path1/{id}");
        assert_eq!(
            parts.query,
            vec![
                ("a".to_string(), "{x}".to_string()),
                ("b".to_string(), String::new()),
                ("c".to_string(), String::new()),
            ]
        );
        assert_eq!(parts.hash, "#id-{y}");
    }

    #[test]
    fn test_parts_without_query_or_hash() {
        let url = Url::parse("https://localhost:3000/path 1/#").unwrap();
        let parts = UrlParts::from_url(&url).unwrap();

        assert_eq!(parts.path, "/path 1/");
        assert!(parts.query.is_empty());
        assert_eq!(parts.hash, "");
    }

    #[test]
    fn test_query_pairs() {
        let pairs = query_pairs("q=1&&r=a%26b&s").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "1".to_string()),
                ("r".to_string(), "a%26b".to_string()),
                ("s".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_decoded_target() {
        let url = Url::parse("https://localhost:3000/path1/another%20path?q=%C3%A9#x").unwrap();
        assert_eq!(decoded_target(&url).unwrap(), "/path1/another path?q=é#x");

        let url = Url::parse("https://localhost:3000").unwrap();
        assert_eq!(decoded_target(&url).unwrap(), "/");
    }

    #[test]
    fn test_reserved_escapes_kept() {
        assert_eq!(decode("a%23b").unwrap(), "a%23b");
        assert_eq!(decode("/a%2Fb/%3f").unwrap(), "/a%2Fb/%3f");
        assert_eq!(decode("x%26r%3D1").unwrap(), "x%26r%3D1");
        assert_eq!(decode("%3B%3A%40%2B%24%2C").unwrap(), "%3B%3A%40%2B%24%2C");
        assert_eq!(decode("a%20b%23c%C3%A9").unwrap(), "a b%23cé");
        // Not an escape.
        assert_eq!(decode("%2").unwrap(), "%2");
        assert_eq!(decode("%%23").unwrap(), "%%23");
        assert!(matches!(decode("a%23b"), Ok(Cow::Owned(_))));
        assert!(matches!(decode("plain"), Ok(Cow::Borrowed("plain"))));
    }

    #[test]
    fn test_decoded_target_keeps_delimiters() {
        let url = Url::parse("https://localhost:3000/a%23b?q=x%26r%3D1&r=a+b#c").unwrap();
        assert_eq!(decoded_target(&url).unwrap(), "/a%23b?q=x%26r%3D1&r=a+b#c");
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(decode("%23%FF"), Err(ParseError::Decode { ref input, .. }) if input == "%23%FF"));

        let url = Url::parse("https://localhost:3000/%FF").unwrap();
        assert!(matches!(decoded_target(&url), Err(ParseError::Decode { .. })));
    }
}
