//! Url matching against template tokens.
//!
//! # Responsibilities
//! - Locate each literal token in the url, no earlier than the cursor
//! - Capture each variable as the text up to the next literal (or the end)
//! - Report a failed match as a value, never as an error
//!
//! # Design Decisions
//! - Single forward pass, no backtracking
//! - The cursor counts characters consumed so far, not the position of the
//!   last literal found, so text skipped before a literal is never consumed
//! - Captured values may be empty

use crate::routing::result::{MatchResult, Variables};
use crate::routing::token::Token;

/// Match the decoded path + query + hash of a url against template tokens.
///
/// Tokens are expected to have passed the structural checks; a variable that
/// is followed by another variable fails the match.
pub fn match_tokens(tokens: &[Token], target: &str) -> MatchResult {
    let mut variables = Variables::new();
    let mut cursor = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Exact { text, .. } => {
                if find_from(target, text, cursor).is_none() {
                    tracing::debug!(literal = %text, cursor, "No match: literal not found");
                    return MatchResult::NoMatch;
                }
                cursor += text.chars().count();
            }
            Token::Variable { id, .. } => {
                let start = byte_index(target, cursor).unwrap_or(target.len());

                let value = match tokens.get(i + 1) {
                    None => &target[start..],
                    Some(Token::Exact { text, .. }) => match find_from(target, text, cursor) {
                        Some(end) => &target[start..end],
                        None => {
                            tracing::debug!(literal = %text, variable = %id, cursor, "No match: literal not found");
                            return MatchResult::NoMatch;
                        }
                    },
                    Some(Token::Variable { .. }) => return MatchResult::NoMatch,
                };

                cursor += value.chars().count();
                variables.insert(id.as_str(), value);
            }
        }
        tracing::trace!(token = i, cursor, "Token matched");
    }

    MatchResult::Matched(variables)
}

/// Byte position of the first occurrence of `needle` at or after character
/// `cursor` of `haystack`.
fn find_from(haystack: &str, needle: &str, cursor: usize) -> Option<usize> {
    let start = byte_index(haystack, cursor)?;
    haystack[start..].find(needle).map(|pos| start + pos)
}

/// Byte index of character `chars` in `s`; `s.len()` when `chars` is the
/// character count, `None` past the end.
fn byte_index(s: &str, chars: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(chars)
}
