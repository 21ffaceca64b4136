//! Client preview feature flags.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EditResult;
use crate::replace::replace_matching;

/// Matches an existing `previewFeatures = [...]` list field.
const PREVIEW_FEATURES_PATTERN: &str = r"previewFeatures *= *\[([^\]]+)\]";

/// Matches the client generator's provider line, the insertion point for a
/// new `previewFeatures` field.
const CLIENT_GENERATOR_PATTERN: &str = r#"(provider *= *"prisma-client-js")"#;

/// A client preview feature flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreviewFeature {
    /// MongoDB connector support.
    MongoDb,
    /// Data proxy support.
    DataProxy,
    /// Emulated referential integrity.
    ReferentialIntegrity,
}

impl PreviewFeature {
    /// Get the flag exactly as it is spelled in schema source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MongoDb => "mongoDb",
            Self::DataProxy => "dataProxy",
            Self::ReferentialIntegrity => "referentialIntegrity",
        }
    }
}

impl std::fmt::Display for PreviewFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enable a preview feature flag in the client generator block.
///
/// Idempotent: when the flag is already listed the schema is returned
/// unchanged. When a `previewFeatures` list exists the flag is appended
/// inside it; otherwise a new list field is inserted right after the
/// `provider = "prisma-client-js"` line. Fails with
/// [`PatternNotFound`](crate::EditError::PatternNotFound) when the schema has
/// no client generator to attach the field to.
pub fn add_preview_feature(schema: &str, flag: PreviewFeature) -> EditResult<String> {
    let list_pattern = Regex::new(PREVIEW_FEATURES_PATTERN).unwrap();

    if let Some(caps) = list_pattern.captures(schema) {
        if caps[1].contains(flag.as_str()) {
            return Ok(schema.to_string());
        }
        let extend_pattern = Regex::new(r"previewFeatures(.*)=(.*)\[(.+)\]").unwrap();
        let updated = replace_matching(
            schema,
            &extend_pattern,
            &format!("previewFeatures${{1}}=${{2}}[${{3}}, \"{flag}\"]"),
        )?;
        debug!(flag = flag.as_str(), "extended previewFeatures list");
        return Ok(updated);
    }

    let generator_pattern = Regex::new(CLIENT_GENERATOR_PATTERN).unwrap();
    let updated = replace_matching(
        schema,
        &generator_pattern,
        &format!("${{1}}\n  previewFeatures = [\"{flag}\"]"),
    )?;
    debug!(flag = flag.as_str(), "added previewFeatures list");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditError;

    const SCHEMA_WITHOUT_LIST: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgres"
  url      = env("DB_URL")
}
"#;

    // ==================== Flag Vocabulary Tests ====================

    #[test]
    fn test_preview_feature_as_str() {
        assert_eq!(PreviewFeature::MongoDb.as_str(), "mongoDb");
        assert_eq!(PreviewFeature::DataProxy.as_str(), "dataProxy");
        assert_eq!(
            PreviewFeature::ReferentialIntegrity.as_str(),
            "referentialIntegrity"
        );
    }

    // ==================== Insertion Tests ====================

    #[test]
    fn test_add_flag_creates_list() {
        let out = add_preview_feature(SCHEMA_WITHOUT_LIST, PreviewFeature::MongoDb).unwrap();
        assert!(out.contains("provider = \"prisma-client-js\"\n  previewFeatures = [\"mongoDb\"]"));
    }

    #[test]
    fn test_add_flag_extends_existing_list() {
        let schema = "generator client {\n  provider        = \"prisma-client-js\"\n  previewFeatures = [\"dataProxy\"]\n}\n";
        let out = add_preview_feature(schema, PreviewFeature::MongoDb).unwrap();
        assert!(out.contains("previewFeatures = [\"dataProxy\", \"mongoDb\"]"));
    }

    #[test]
    fn test_add_flag_is_idempotent() {
        let once = add_preview_feature(SCHEMA_WITHOUT_LIST, PreviewFeature::MongoDb).unwrap();
        let twice = add_preview_feature(&once, PreviewFeature::MongoDb).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_flag_without_generator_fails() {
        let schema = "datasource db {\n  provider = \"sqlite\"\n  url = \"file:./dev.db\"\n}\n";
        let err = add_preview_feature(schema, PreviewFeature::MongoDb).unwrap_err();
        assert!(matches!(err, EditError::PatternNotFound { .. }));
    }

    #[test]
    fn test_add_flag_leaves_rest_untouched() {
        let out = add_preview_feature(SCHEMA_WITHOUT_LIST, PreviewFeature::DataProxy).unwrap();
        assert!(out.contains("datasource db {\n  provider = \"postgres\"\n  url      = env(\"DB_URL\")\n}\n"));
    }
}
