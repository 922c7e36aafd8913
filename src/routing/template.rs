//! Template assembly and structural checks.
//!
//! # Responsibilities
//! - Concatenate path, query and hash tokens into one sequence
//! - Reject templates with two placeholders side by side
//! - Reject templates that reuse a placeholder id
//!
//! # Design Decisions
//! - Checks look only at the template, never at a url
//! - A rejected template is a configuration error, not a failed match

use std::collections::HashSet;

use crate::error::ParseError;
use crate::routing::location::UrlParts;
use crate::routing::token::Token;
use crate::routing::tokenizer::{tokenize_queries, tokenize_string};

/// The checked token sequence of one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTokens {
    tokens: Vec<Token>,
}

impl TemplateTokens {
    /// Tokenize the decoded parts of a template.
    ///
    /// Query tokens start where the path ends; hash tokens start where the
    /// rebuilt query string ends.
    pub fn assemble(parts: &UrlParts) -> Result<Self, ParseError> {
        let mut tokens = tokenize_string(&parts.path, 0)?;

        let query_base = parts.path.chars().count();
        let query_tokens = tokenize_queries(&parts.query, query_base)?;
        let query_len: usize = query_tokens.iter().map(Token::len).sum();
        tokens.extend(query_tokens);

        if !parts.hash.is_empty() {
            tokens.extend(tokenize_string(&parts.hash, query_base + query_len)?);
        }

        let template = Self::from_tokens(tokens)?;
        tracing::debug!(
            tokens = template.tokens.len(),
            variables = template.variable_ids().count(),
            "Template tokenized"
        );
        Ok(template)
    }

    /// Wrap an already-built token sequence, running the structural checks.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, ParseError> {
        check_colocated_variables(&tokens)?;
        check_duplicate_variables(&tokens)?;
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Placeholder ids in template order.
    pub fn variable_ids(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::id)
    }
}

/// Fails if two variable tokens are adjacent.
pub fn check_colocated_variables(tokens: &[Token]) -> Result<(), ParseError> {
    for pair in tokens.windows(2) {
        if let (Token::Variable { id: first, .. }, Token::Variable { id: second, .. }) = (&pair[0], &pair[1]) {
            tracing::warn!(first = %first, second = %second, "Template rejected: adjacent variables");
            return Err(ParseError::ColocatedVariables {
                first: first.clone(),
                second: second.clone(),
            });
        }
    }
    Ok(())
}

/// Fails if a variable id is used more than once.
pub fn check_duplicate_variables(tokens: &[Token]) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for id in tokens.iter().filter_map(Token::id) {
        if !seen.insert(id) {
            tracing::warn!(id = %id, "Template rejected: duplicate variable");
            return Err(ParseError::DuplicateVariable(id.to_string()));
        }
    }
    Ok(())
}
