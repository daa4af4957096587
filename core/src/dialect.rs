//! Fixed table of supported database dialects.
//!
//! A dialect is identified by the URL scheme of a connection string. The
//! table maps each scheme to the port used when the connection string does
//! not name one explicitly.
//!
//! # Examples
//!
//! ```
//! use dbconv_core::{Dialect, default_port};
//!
//! assert_eq!(default_port("postgresql"), Some(5432));
//! assert_eq!(Dialect::from_scheme("sqlserver"), Some(Dialect::SqlServer));
//! assert_eq!(default_port("oracle"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Database engine family recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    PostgreSql,
    SqlServer,
    Redis,
    /// File based; the port is a placeholder.
    Sqlite,
}

/// Every dialect, in table order.
pub const DIALECTS: [Dialect; 5] = [
    Dialect::MySql,
    Dialect::PostgreSql,
    Dialect::SqlServer,
    Dialect::Redis,
    Dialect::Sqlite,
];

impl Dialect {
    /// Looks up a dialect by scheme. The match is exact and case-sensitive.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        DIALECTS.into_iter().find(|d| d.scheme() == scheme)
    }

    /// URL scheme naming this dialect.
    pub const fn scheme(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::SqlServer => "sqlserver",
            Dialect::Redis => "redis",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Port assumed when a connection string omits one.
    pub const fn default_port(self) -> u16 {
        match self {
            Dialect::MySql => 3306,
            Dialect::PostgreSql => 5432,
            Dialect::SqlServer => 1433,
            Dialect::Redis => 6379,
            Dialect::Sqlite => 0,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Returns the default port for `scheme`, or `None` if the scheme is not a
/// known dialect.
pub fn default_port(scheme: &str) -> Option<u16> {
    Dialect::from_scheme(scheme).map(Dialect::default_port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports_match_table() {
        assert_eq!(default_port("mysql"), Some(3306));
        assert_eq!(default_port("postgresql"), Some(5432));
        assert_eq!(default_port("sqlserver"), Some(1433));
        assert_eq!(default_port("redis"), Some(6379));
        assert_eq!(default_port("sqlite"), Some(0));
    }

    #[test]
    fn test_unknown_scheme_has_no_default() {
        assert_eq!(default_port("oracle"), None);
        assert_eq!(default_port(""), None);
        // "postgres" is a common alias but is not in the table.
        assert_eq!(default_port("postgres"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Dialect::from_scheme("MySQL"), None);
        assert_eq!(Dialect::from_scheme("mysql"), Some(Dialect::MySql));
    }

    #[test]
    fn test_scheme_round_trips_through_lookup() {
        for dialect in DIALECTS {
            assert_eq!(Dialect::from_scheme(dialect.scheme()), Some(dialect));
            assert_eq!(dialect.to_string(), dialect.scheme());
        }
    }
}
