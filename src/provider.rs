//! Provider vocabulary: accepted alias spellings and canonical providers.

use serde::{Deserialize, Serialize};

/// Canonical database provider, after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// SQLite database.
    Sqlite,
    /// PostgreSQL database.
    Postgres,
    /// MySQL database.
    Mysql,
    /// Microsoft SQL Server database.
    Sqlserver,
    /// MongoDB database.
    Mongodb,
    /// CockroachDB database.
    Cockroachdb,
}

impl Provider {
    /// Get the canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlserver => "sqlserver",
            Self::Mongodb => "mongodb",
            Self::Cockroachdb => "cockroachdb",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An accepted provider spelling as it appears in schema source.
///
/// Strictly wider than [`Provider`]: `postgresql` and `postgres` are both
/// accepted on input and normalize to the same canonical provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderAlias {
    /// `sqlite`
    Sqlite,
    /// `postgresql`
    Postgresql,
    /// `postgres`
    Postgres,
    /// `mysql`
    Mysql,
    /// `sqlserver`
    Sqlserver,
    /// `mongodb`
    Mongodb,
    /// `cockroachdb`
    Cockroachdb,
}

impl ProviderAlias {
    /// Every accepted spelling, longest-prefix variants first so the list can
    /// be joined into a regex alternation.
    pub const ALL: [ProviderAlias; 7] = [
        Self::Sqlite,
        Self::Postgresql,
        Self::Postgres,
        Self::Mysql,
        Self::Sqlserver,
        Self::Mongodb,
        Self::Cockroachdb,
    ];

    /// Parse an alias from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sqlite" => Some(Self::Sqlite),
            "postgresql" => Some(Self::Postgresql),
            "postgres" => Some(Self::Postgres),
            "mysql" => Some(Self::Mysql),
            "sqlserver" => Some(Self::Sqlserver),
            "mongodb" => Some(Self::Mongodb),
            "cockroachdb" => Some(Self::Cockroachdb),
            _ => None,
        }
    }

    /// Get the alias exactly as it is spelled in schema source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlserver => "sqlserver",
            Self::Mongodb => "mongodb",
            Self::Cockroachdb => "cockroachdb",
        }
    }

    /// Resolve the alias to its canonical provider.
    pub fn normalize(self) -> Provider {
        match self {
            Self::Sqlite => Provider::Sqlite,
            Self::Postgresql | Self::Postgres => Provider::Postgres,
            Self::Mysql => Provider::Mysql,
            Self::Sqlserver => Provider::Sqlserver,
            Self::Mongodb => Provider::Mongodb,
            Self::Cockroachdb => Provider::Cockroachdb,
        }
    }
}

impl std::fmt::Display for ProviderAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Provider Tests ====================

    #[test]
    fn test_provider_as_str() {
        assert_eq!(Provider::Sqlite.as_str(), "sqlite");
        assert_eq!(Provider::Postgres.as_str(), "postgres");
        assert_eq!(Provider::Mysql.as_str(), "mysql");
        assert_eq!(Provider::Sqlserver.as_str(), "sqlserver");
        assert_eq!(Provider::Mongodb.as_str(), "mongodb");
        assert_eq!(Provider::Cockroachdb.as_str(), "cockroachdb");
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::Postgres.to_string(), "postgres");
    }

    // ==================== ProviderAlias Tests ====================

    #[test]
    fn test_alias_from_str() {
        assert_eq!(
            ProviderAlias::from_str("postgresql"),
            Some(ProviderAlias::Postgresql)
        );
        assert_eq!(
            ProviderAlias::from_str("postgres"),
            Some(ProviderAlias::Postgres)
        );
        assert_eq!(ProviderAlias::from_str("sqlite"), Some(ProviderAlias::Sqlite));
        assert_eq!(ProviderAlias::from_str("oracle"), None);
        assert_eq!(ProviderAlias::from_str("Postgres"), None);
    }

    #[test]
    fn test_alias_normalize() {
        assert_eq!(ProviderAlias::Postgresql.normalize(), Provider::Postgres);
        assert_eq!(ProviderAlias::Postgres.normalize(), Provider::Postgres);
        assert_eq!(ProviderAlias::Sqlite.normalize(), Provider::Sqlite);
        assert_eq!(ProviderAlias::Mysql.normalize(), Provider::Mysql);
        assert_eq!(ProviderAlias::Sqlserver.normalize(), Provider::Sqlserver);
        assert_eq!(ProviderAlias::Mongodb.normalize(), Provider::Mongodb);
        assert_eq!(ProviderAlias::Cockroachdb.normalize(), Provider::Cockroachdb);
    }

    #[test]
    fn test_alias_normalize_idempotent() {
        // Every canonical spelling is itself a valid alias that resolves back
        // to the same canonical provider.
        for alias in ProviderAlias::ALL {
            let provider = alias.normalize();
            let round = ProviderAlias::from_str(provider.as_str())
                .expect("canonical spelling must be an accepted alias");
            assert_eq!(round.normalize(), provider);
        }
    }

    #[test]
    fn test_alias_all_covers_every_provider() {
        let canon: Vec<Provider> = ProviderAlias::ALL.iter().map(|a| a.normalize()).collect();
        assert!(canon.contains(&Provider::Sqlite));
        assert!(canon.contains(&Provider::Postgres));
        assert!(canon.contains(&Provider::Mysql));
        assert!(canon.contains(&Provider::Sqlserver));
        assert!(canon.contains(&Provider::Mongodb));
        assert!(canon.contains(&Provider::Cockroachdb));
    }

    #[test]
    fn test_alias_as_str_round_trips() {
        for alias in ProviderAlias::ALL {
            assert_eq!(ProviderAlias::from_str(alias.as_str()), Some(alias));
        }
    }
}
