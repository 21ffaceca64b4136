//! Error types for schema parsing and rewriting.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema edit operations.
pub type EditResult<T> = Result<T, EditError>;

/// Errors that can occur while parsing or rewriting a schema.
///
/// Every failure is synchronous and non-retryable: the input text is malformed
/// or a caller precondition was violated, and retrying with the same input can
/// never succeed. Ambiguity is never resolved by guessing.
#[derive(Error, Debug, Diagnostic)]
pub enum EditError {
    /// No live datasource block exists in the schema.
    #[error("no datasource block found in schema")]
    #[diagnostic(code(psl_edit::no_datasource_block))]
    NoDatasourceBlock,

    /// More than one live datasource block exists in the schema.
    #[error("found {count} datasource blocks, expected exactly one")]
    #[diagnostic(code(psl_edit::multiple_datasource_blocks))]
    MultipleDatasourceBlocks { count: usize },

    /// The datasource block has no live `provider` assignment.
    #[error("datasource block is missing a `provider` field")]
    #[diagnostic(code(psl_edit::missing_provider))]
    MissingProvider,

    /// The datasource block has no live `url` assignment.
    #[error("datasource block is missing a `url` field")]
    #[diagnostic(code(psl_edit::missing_url))]
    MissingUrl,

    /// A field is assigned more than once inside the block.
    #[error("field `{field}` is assigned more than once in the datasource block")]
    #[diagnostic(code(psl_edit::duplicate_field))]
    DuplicateField { field: String },

    /// The `provider` value is not one of the accepted alias spellings.
    #[error("`{value}` is not an accepted datasource provider")]
    #[diagnostic(code(psl_edit::invalid_provider))]
    InvalidProvider { value: String },

    /// The `url` value is neither a quoted literal nor an `env(...)` call.
    #[error("could not classify url value `{value}` as a literal or env() reference")]
    #[diagnostic(code(psl_edit::unrecognized_url_value))]
    UnrecognizedUrlValue { value: String },

    /// A rewrite anchor or pattern did not match the current schema text.
    #[error("pattern `{pattern}` does not match the schema content")]
    #[diagnostic(code(psl_edit::pattern_not_found))]
    PatternNotFound { pattern: String },
}

impl EditError {
    /// Create a duplicate field error.
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }

    /// Create an invalid provider error.
    pub fn invalid_provider(value: impl Into<String>) -> Self {
        Self::InvalidProvider {
            value: value.into(),
        }
    }

    /// Create an unrecognized url value error.
    pub fn unrecognized_url_value(value: impl Into<String>) -> Self {
        Self::UnrecognizedUrlValue {
            value: value.into(),
        }
    }

    /// Create a pattern-not-found error.
    pub fn pattern_not_found(pattern: impl Into<String>) -> Self {
        Self::PatternNotFound {
            pattern: pattern.into(),
        }
    }
}
