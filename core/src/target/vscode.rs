use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::types::{NormalizedConnection, VscodeProfile};

use super::Projector;

/// Fixed profile fields applied to every VS Code profile.
///
/// These are not derived from the connection string; query options such as
/// `encrypt=true` do not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePolicy {
    pub authentication_type: String,
    pub encrypt: String,
    pub trust_server_certificate: bool,
    pub save_password: bool,
    pub empty_password_input: bool,
    pub id: String,
    pub group_id: String,
}

impl Default for ProfilePolicy {
    fn default() -> Self {
        Self {
            authentication_type: "SqlLogin".to_string(),
            encrypt: "Mandatory".to_string(),
            trust_server_certificate: true,
            save_password: false,
            empty_password_input: false,
            id: String::new(),
            group_id: String::new(),
        }
    }
}

/// Projects SQL Server connections into VS Code mssql profiles.
///
/// Only the `sqlserver` dialect has a connector in the extension; every other
/// scheme is unsupported.
///
/// # Examples
///
/// ```
/// use dbconv_core::{Projector, VscodeProjector, parse_connection_string};
///
/// let projector = VscodeProjector::default();
/// let conn = parse_connection_string("sqlserver://sa:pw@db.example.com/app").unwrap();
/// let profile = projector.try_project(&conn, "app").unwrap();
/// assert_eq!(profile.server, "db.example.com,1433");
///
/// let conn = parse_connection_string("mysql://root@localhost/app").unwrap();
/// assert!(projector.try_project(&conn, "app").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VscodeProjector {
    policy: ProfilePolicy,
}

impl VscodeProjector {
    pub fn with_policy(policy: ProfilePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ProfilePolicy {
        &self.policy
    }
}

impl Projector for VscodeProjector {
    type Record = VscodeProfile;

    fn supports(&self, scheme: &str) -> bool {
        scheme == Dialect::SqlServer.scheme()
    }

    fn project(&self, conn: &NormalizedConnection, name: &str) -> VscodeProfile {
        let policy = &self.policy;
        VscodeProfile {
            server: format!("{},{}", conn.host, conn.port),
            database: conn.database.clone(),
            authentication_type: policy.authentication_type.clone(),
            user: conn.user.clone(),
            password: conn.password.clone(),
            empty_password_input: policy.empty_password_input,
            save_password: policy.save_password,
            profile_name: name.to_string(),
            id: policy.id.clone(),
            encrypt: policy.encrypt.clone(),
            trust_server_certificate: policy.trust_server_certificate,
            group_id: policy.group_id.clone(),
        }
    }
}
