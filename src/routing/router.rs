//! Template/url matching entry point.
//!
//! # Responsibilities
//! - Check arguments and options
//! - Normalize the template (origin removed, leading `/`, trailing `/` option)
//! - Tokenize the template and match the url against it
//!
//! # Design Decisions
//! - Nothing is cached between calls; each call owns all of its state
//! - Configuration problems are errors, a url that does not fit is `NoMatch`

use serde_json::Value;
use url::Url;

use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::routing::location::{classify, decoded_target, origin, UrlKind, UrlParts};
use crate::routing::matcher::match_tokens;
use crate::routing::result::MatchResult;
use crate::routing::template::TemplateTokens;
use crate::validation::is_non_empty_str;

/// Match `url` against `template` and extract the template's variables.
///
/// `template` is a path, optionally with query and hash, containing `{name}`
/// placeholders. `url` must be absolute; its origin is ignored.
///
/// ```
/// use url_template_matcher::{parse_url, ParseOptions};
///
/// let result = parse_url("/books/{id}", "https://localhost:3000/books/42", &ParseOptions::default()).unwrap();
/// assert_eq!(result.get("id"), Some("42"));
/// ```
pub fn parse_url(template: &str, url: &str, options: &ParseOptions) -> Result<MatchResult, ParseError> {
    if !is_non_empty_str(template) {
        return Err(ParseError::InvalidArgument("template"));
    }
    if !is_non_empty_str(url) {
        return Err(ParseError::InvalidArgument("url"));
    }

    let mut parsed = match classify(url) {
        UrlKind::Absolute(parsed) => parsed,
        UrlKind::Relative => return Err(ParseError::RelativeUrl(url.to_string())),
    };

    let mut template = template.to_string();

    if options.ignore_trailing_slash {
        let url_slash = url.ends_with('/');
        let template_slash = template.ends_with('/');

        if url_slash && !template_slash {
            template.push('/');
        }
        if !url_slash && template_slash {
            let url = format!("{}/", url);
            parsed = Url::parse(&url).map_err(|_| ParseError::RelativeUrl(url.clone()))?;
        }
    }

    let template_url = compose_template(&template, &parsed)?;
    let tokens = TemplateTokens::assemble(&UrlParts::from_url(&template_url)?)?;
    let target = decoded_target(&parsed)?;

    let result = match_tokens(tokens.tokens(), &target);
    tracing::debug!(template = %template, target = %target, matched = result.is_match(), "Url matched against template");
    Ok(result)
}

/// Like [`parse_url`], with options given as a dynamic value (e.g. parsed
/// from JSON). `null` means default options.
pub fn parse_url_with_value(template: &str, url: &str, options: &Value) -> Result<MatchResult, ParseError> {
    let options = ParseOptions::from_value(options)?;
    parse_url(template, url, &options)
}

/// Strip the url's origin from the template, make sure it starts with `/`,
/// and parse it against that origin.
fn compose_template(template: &str, url: &Url) -> Result<Url, ParseError> {
    // Opaque origins have nothing to strip and cannot form a base.
    let origin = origin(url).unwrap_or_default();

    let mut relative = template.replacen(&origin, "", 1);
    if !relative.starts_with('/') {
        relative.insert(0, '/');
    }

    let composed = format!("{}{}", origin, relative);
    Url::parse(&composed).map_err(|source| ParseError::InvalidTemplate {
        template: template.to_string(),
        origin,
        source,
    })
}
