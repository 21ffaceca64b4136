//! Value rendering and minimal schema scaffolding.

use crate::preview::PreviewFeature;
use crate::provider::ProviderAlias;

/// Render a value for the right-hand side of an `=` in schema source.
///
/// Values that are already an `env(...)` call pass through; anything else is
/// wrapped in quotes.
pub fn render_value(value: &str) -> String {
    if value.starts_with("env(") {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

/// Render an environment-variable reference value.
pub fn render_env_value(variable: &str) -> String {
    format!("env(\"{variable}\")")
}

/// Build a minimal schema containing a datasource block named `db`.
///
/// When `flags` is non-empty a client generator block with a
/// `previewFeatures` list is appended; otherwise no generator block appears.
/// The output parses back through [`parse_datasource`](crate::parse_datasource).
pub fn create_empty(provider: ProviderAlias, url: &str, flags: &[PreviewFeature]) -> String {
    let datasource = format!(
        "datasource db {{\n  provider = {}\n  url      = {}\n}}",
        render_value(provider.as_str()),
        render_value(url),
    );

    if flags.is_empty() {
        return datasource;
    }

    let list = flags
        .iter()
        .map(|flag| format!("\"{flag}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{datasource}\ngenerator client {{\n  provider        = \"prisma-client-js\"\n  previewFeatures = [{list}]\n}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_value_quotes_literals() {
        assert_eq!(render_value("file:./dev.db"), "\"file:./dev.db\"");
    }

    #[test]
    fn test_render_value_passes_env_calls_through() {
        assert_eq!(render_value("env(\"DB_URL\")"), "env(\"DB_URL\")");
    }

    #[test]
    fn test_render_env_value() {
        assert_eq!(render_env_value("DB_URL"), "env(\"DB_URL\")");
    }

    // ==================== Scaffolding Tests ====================

    #[test]
    fn test_create_empty_without_flags() {
        let schema = create_empty(ProviderAlias::Sqlite, "file:./dev.db", &[]);
        assert_eq!(
            schema,
            "datasource db {\n  provider = \"sqlite\"\n  url      = \"file:./dev.db\"\n}"
        );
    }

    #[test]
    fn test_create_empty_with_env_url() {
        let schema = create_empty(ProviderAlias::Postgres, "env(\"DB_URL\")", &[]);
        assert!(schema.contains("url      = env(\"DB_URL\")"));
    }

    #[test]
    fn test_create_empty_with_flags() {
        let schema = create_empty(
            ProviderAlias::Mongodb,
            "env(\"DB_URL\")",
            &[PreviewFeature::MongoDb],
        );
        assert!(schema.contains("generator client {"));
        assert!(schema.contains("previewFeatures = [\"mongoDb\"]"));
    }

    #[test]
    fn test_create_empty_parses_back() {
        let schema = create_empty(ProviderAlias::Postgresql, "env(\"DB_URL\")", &[]);
        let parsed = crate::datasource::parse_datasource(&schema).unwrap();
        assert_eq!(parsed.name(), "db");
        assert_eq!(parsed.provider(), crate::provider::Provider::Postgres);
    }
}
