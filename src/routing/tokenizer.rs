//! Template tokenization.
//!
//! # Responsibilities
//! - Split a path or hash segment into literal and `{id}` tokens
//! - Rebuild a query string as tokens, one fused `?key=` / `&key=` literal per pair
//! - Check that tokens cover each segment exactly
//!
//! # Design Decisions
//! - A placeholder is `{` + one or more non-whitespace characters + `}`
//! - Braces that enclose whitespace stay literal text
//! - Query delimiters are never separate tokens, so a captured value can
//!   contain `&`, `=` or `?` without confusing the matcher

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::routing::token::Token;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\S+?)\}").unwrap());

/// Tokenize a path or hash segment, offsetting every token by `base`.
pub fn tokenize_string(segment: &str, base: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut offset = base;

    for caps in PLACEHOLDER.captures_iter(segment) {
        let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let literal = &segment[literal_start..whole.start()];
        if !literal.is_empty() {
            let token = Token::exact(literal, offset);
            offset += token.len();
            tokens.push(token);
        }

        let token = Token::variable(id.as_str(), offset, whole.as_str().chars().count());
        offset += token.len();
        tokens.push(token);

        literal_start = whole.end();
    }

    let rest = &segment[literal_start..];
    if !rest.is_empty() {
        tokens.push(Token::exact(rest, offset));
    }

    check_coverage(segment, &tokens)?;
    Ok(tokens)
}

/// Tokenize query pairs in declaration order, offsetting every token by `base`.
pub fn tokenize_queries<K, V>(pairs: &[(K, V)], base: usize) -> Result<Vec<Token>, ParseError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut tokens = Vec::new();
    let mut offset = base;

    for (i, (key, value)) in pairs.iter().enumerate() {
        let delimiter = if i == 0 { '?' } else { '&' };

        let token = Token::exact(format!("{}{}=", delimiter, key.as_ref()), offset);
        offset += token.len();
        tokens.push(token);

        let value = value.as_ref();
        if !value.is_empty() {
            let value_tokens = tokenize_string(value, offset)?;
            offset += value_tokens.iter().map(Token::len).sum::<usize>();
            tokens.extend(value_tokens);
        }
    }

    Ok(tokens)
}

fn check_coverage(segment: &str, tokens: &[Token]) -> Result<(), ParseError> {
    let covered: usize = tokens.iter().map(Token::len).sum();
    let expected = segment.chars().count();

    if covered != expected {
        return Err(ParseError::TokenizationMismatch {
            segment: segment.to_string(),
            covered,
            expected,
        });
    }

    Ok(())
}
