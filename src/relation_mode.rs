//! Referential-integrity (relation mode) setting.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EditResult;
use crate::preview::{PreviewFeature, add_preview_feature};
use crate::replace::replace_matching;

/// Matches the env-url field, the insertion point for the
/// `referentialIntegrity` field.
const URL_ENV_LINE_PATTERN: &str = r#"(url *= *env\(".+"\))"#;

/// How relations are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationMode {
    /// Database foreign keys enforce relations. The default.
    #[default]
    ForeignKeys,
    /// Relations are emulated in the client.
    Prisma,
}

impl RelationMode {
    /// Get the setting value exactly as it is spelled in schema source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForeignKeys => "foreignKeys",
            Self::Prisma => "prisma",
        }
    }
}

impl std::fmt::Display for RelationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set the relation mode of the schema.
///
/// The default mode is represented by the absence of the field, so setting it
/// returns the schema unchanged. Setting the non-default mode enables the
/// `referentialIntegrity` preview flag and inserts a
/// `referentialIntegrity = "..."` field after the env-url line.
pub fn set_relation_mode(schema: &str, mode: RelationMode) -> EditResult<String> {
    if mode == RelationMode::default() {
        return Ok(schema.to_string());
    }

    let flagged = add_preview_feature(schema, PreviewFeature::ReferentialIntegrity)?;

    let url_pattern = Regex::new(URL_ENV_LINE_PATTERN).unwrap();
    replace_matching(
        &flagged,
        &url_pattern,
        &format!("${{1}}\n  referentialIntegrity = \"{mode}\""),
    )
}
