//! Parsing and rewriting of the `datasource` block.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

use crate::block::find_datasource_block;
use crate::create::{render_env_value, render_value};
use crate::error::{EditError, EditResult};
use crate::field::assignment_value;
use crate::provider::{Provider, ProviderAlias};
use crate::replace::{replace_anchored, replace_matching};

/// Matches an environment-variable url value, tolerating whitespace inside
/// the parentheses: `env( "NAME" )`.
const ENV_URL_PATTERN: &str = r#"env\(\s*"([^"]+)"\s*\)"#;

/// Matches the first quoted substring of an inline url value.
const INLINE_URL_PATTERN: &str = r#""([^"]+)""#;

/// A successfully parsed datasource block.
///
/// This is a derived, read-only snapshot of the schema text: it is recomputed
/// on every parse and never mutated in place. Rewrites operate on the raw
/// text, using [`url_source`](Self::url_source) as their anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedDatasource {
    /// The url field carries the connection string inline.
    Inline {
        /// The block identifier.
        name: SmolStr,
        /// Canonical provider after alias resolution.
        provider: Provider,
        /// The connection string between the quotes.
        connection_string: String,
        /// Exact source text of the url value, quotes included.
        url_source: String,
    },
    /// The url field references an environment variable.
    Env {
        /// The block identifier.
        name: SmolStr,
        /// Canonical provider after alias resolution.
        provider: Provider,
        /// The referenced environment variable name.
        variable: SmolStr,
        /// Exact source text of the url value, `env(...)` call included.
        url_source: String,
    },
}

impl ParsedDatasource {
    /// The block identifier.
    pub fn name(&self) -> &str {
        match self {
            Self::Inline { name, .. } | Self::Env { name, .. } => name,
        }
    }

    /// The canonical provider.
    pub fn provider(&self) -> Provider {
        match self {
            Self::Inline { provider, .. } | Self::Env { provider, .. } => *provider,
        }
    }

    /// The exact source text of the url value, usable as a rewrite anchor.
    pub fn url_source(&self) -> &str {
        match self {
            Self::Inline { url_source, .. } | Self::Env { url_source, .. } => url_source,
        }
    }
}

/// Parse the single datasource block out of a schema.
///
/// Fails when no live block or more than one exists, when the `provider` or
/// `url` field is missing or duplicated, or when the provider value is not an
/// accepted alias.
pub fn parse_datasource(schema: &str) -> EditResult<ParsedDatasource> {
    let block = find_datasource_block(schema)?;

    let provider = parse_provider(block.body)?;
    let url = assignment_value(block.body, "url")?.ok_or(EditError::MissingUrl)?;

    let parsed = classify_url(block.name, provider, url)?;
    debug!(
        name = parsed.name(),
        provider = %parsed.provider(),
        "parsed datasource block"
    );
    Ok(parsed)
}

/// Change the provider value of the datasource block.
///
/// The caller's alias spelling is written verbatim, so the user-facing
/// spelling (`postgresql` vs `postgres`) round-trips through the edit.
pub fn set_provider(schema: &str, provider: ProviderAlias) -> EditResult<String> {
    parse_datasource(schema)?;

    let pattern = provider_line_pattern();
    let updated = replace_matching(
        schema,
        &pattern,
        &format!("${{1}}provider = \"{provider}\""),
    )?;
    debug!(provider = provider.as_str(), "rewrote datasource provider");
    Ok(updated)
}

/// Change the url value of the datasource block.
///
/// With `as_env` the value is written as an `env("...")` reference, otherwise
/// as a quoted literal. The rewrite anchors on the exact url source text
/// captured by parsing, so similar-looking text elsewhere in the file is left
/// byte-for-byte unchanged.
pub fn set_url(schema: &str, value: &str, as_env: bool) -> EditResult<String> {
    let parsed = parse_datasource(schema)?;

    let replacement = if as_env {
        render_env_value(value)
    } else {
        render_value(value)
    };
    let updated = replace_anchored(schema, parsed.url_source(), &replacement)?;
    debug!(as_env, "rewrote datasource url");
    Ok(updated)
}

/// Extract and normalize the provider field from a block body.
fn parse_provider(body: &str) -> EditResult<Provider> {
    let value = assignment_value(body, "provider")?.ok_or(EditError::MissingProvider)?;

    let pattern = provider_value_pattern();
    let caps = pattern
        .captures(value)
        .ok_or_else(|| EditError::invalid_provider(value))?;
    let alias =
        ProviderAlias::from_str(&caps[1]).ok_or_else(|| EditError::invalid_provider(value))?;

    Ok(alias.normalize())
}

/// Classify a url value as inline or environment-variable shaped.
fn classify_url(name: SmolStr, provider: Provider, value: &str) -> EditResult<ParsedDatasource> {
    let env_pattern = Regex::new(ENV_URL_PATTERN).unwrap();
    if let Some(caps) = env_pattern.captures(value) {
        return Ok(ParsedDatasource::Env {
            name,
            provider,
            variable: SmolStr::new(&caps[1]),
            url_source: caps[0].to_string(),
        });
    }

    let inline_pattern = Regex::new(INLINE_URL_PATTERN).unwrap();
    if let Some(caps) = inline_pattern.captures(value) {
        return Ok(ParsedDatasource::Inline {
            name,
            provider,
            connection_string: caps[1].to_string(),
            url_source: caps[0].to_string(),
        });
    }

    // The field extractor's contract makes this unreachable in practice, but
    // it stays a typed error rather than a panic.
    Err(EditError::unrecognized_url_value(value))
}

/// `"alias"` at the start of a provider value, for any accepted alias.
fn provider_value_pattern() -> Regex {
    Regex::new(&format!("^\"({})\"", alias_alternation())).unwrap()
}

/// A whole live `provider = "alias"` line, indentation captured.
fn provider_line_pattern() -> Regex {
    Regex::new(&format!(
        "(?m)^(\\s*)provider\\s*=\\s*\"({})\"",
        alias_alternation()
    ))
    .unwrap()
}

fn alias_alternation() -> String {
    ProviderAlias::ALL
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join("|")
}
