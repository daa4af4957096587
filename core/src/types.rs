//! Record types for the source list, the parsed intermediate form, and the
//! two target configuration formats.
//!
//! Target records derive [`Serialize`] with the exact key names and key
//! order their consumers expect, so callers can hand them straight to
//! `serde_yaml` or `serde_json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One named connection from a dadbod connection list.
///
/// # Examples
///
/// ```
/// use dbconv_core::SourceConnection;
///
/// let raw = r#"[{"name": "local", "url": "postgresql://u:p@localhost/mydb"}]"#;
/// let entries: Vec<SourceConnection> = serde_json::from_str(raw).unwrap();
/// assert_eq!(entries[0].name, "local");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConnection {
    pub name: String,
    pub url: String,
}

impl SourceConnection {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Connection fields decoded from a URL, independent of any target format.
///
/// Produced by [`parse_connection_string`](crate::parse_connection_string).
/// `scheme` is never empty and `port` is always resolved, either from the
/// URL or from the dialect table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedConnection {
    /// URL scheme as written in the input.
    pub scheme: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    /// URL path without its first `/`.
    pub database: String,
    /// First value of every query parameter, keyed by parameter name.
    pub options: BTreeMap<String, String>,
}

/// A connection entry in an sqls `config.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlsConnection {
    pub alias: String,
    pub driver: String,
    pub proto: String,
    pub user: String,
    pub passwd: String,
    pub host: String,
    pub port: u16,
    #[serde(rename = "dbName")]
    pub db_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

/// Top-level sqls configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlsConfig {
    pub lowercase_keywords: bool,
    pub connections: Vec<SqlsConnection>,
}

impl SqlsConfig {
    /// Wraps `connections` with keyword lowercasing turned off.
    pub fn new(connections: Vec<SqlsConnection>) -> Self {
        Self {
            lowercase_keywords: false,
            connections,
        }
    }
}

/// A connection profile for the VS Code SQL Server (mssql) extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VscodeProfile {
    /// `<host>,<port>`
    pub server: String,
    pub database: String,
    pub authentication_type: String,
    pub user: String,
    pub password: String,
    pub empty_password_input: bool,
    pub save_password: bool,
    pub profile_name: String,
    pub id: String,
    pub encrypt: String,
    pub trust_server_certificate: bool,
    pub group_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqls_connection_keys() {
        let conn = SqlsConnection {
            alias: "local".into(),
            driver: "postgresql".into(),
            proto: "tcp".into(),
            user: "u".into(),
            passwd: "p".into(),
            host: "localhost".into(),
            port: 5432,
            db_name: "mydb".into(),
            options: BTreeMap::new(),
        };
        let value = serde_json::to_value(&conn).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert!(keys.contains(&"dbName"));
        assert!(keys.contains(&"passwd"));
        assert!(!keys.contains(&"options"), "empty options are omitted");
    }

    #[test]
    fn test_sqls_config_envelope_key() {
        let yaml = serde_yaml::to_string(&SqlsConfig::new(Vec::new())).unwrap();
        assert!(yaml.contains("lowercaseKeywords: false"), "{yaml}");
        assert!(yaml.contains("connections: []"), "{yaml}");
    }

    #[test]
    fn test_vscode_profile_camel_case_keys() {
        let profile = VscodeProfile {
            server: "srv,1433".into(),
            database: "db1".into(),
            authentication_type: "SqlLogin".into(),
            user: "sa".into(),
            password: "pw".into(),
            empty_password_input: false,
            save_password: false,
            profile_name: "ide1".into(),
            id: String::new(),
            encrypt: "Mandatory".into(),
            trust_server_certificate: true,
            group_id: String::new(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["authenticationType"], "SqlLogin");
        assert_eq!(value["trustServerCertificate"], true);
        assert_eq!(value["profileName"], "ide1");
        assert_eq!(value["groupId"], "");
        assert_eq!(value.as_object().unwrap().len(), 12);
    }
}
