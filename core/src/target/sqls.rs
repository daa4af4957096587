use crate::dialect::Dialect;
use crate::types::{NormalizedConnection, SqlsConnection};

use super::Projector;

/// Transport written into every sqls connection.
const SQLS_PROTO: &str = "tcp";

/// Projects connections into sqls `config.yml` entries.
///
/// # Examples
///
/// ```
/// use dbconv_core::{Projector, SqlsProjector, parse_connection_string};
///
/// let conn = parse_connection_string("postgresql://u:p@localhost/mydb").unwrap();
/// let entry = SqlsProjector.project(&conn, "local");
/// assert_eq!(entry.alias, "local");
/// assert_eq!(entry.driver, "postgresql");
/// assert_eq!(entry.port, 5432);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlsProjector;

impl Projector for SqlsProjector {
    type Record = SqlsConnection;

    fn supports(&self, scheme: &str) -> bool {
        Dialect::from_scheme(scheme).is_some()
    }

    fn project(&self, conn: &NormalizedConnection, name: &str) -> SqlsConnection {
        SqlsConnection {
            alias: name.to_string(),
            driver: conn.scheme.clone(),
            proto: SQLS_PROTO.to_string(),
            user: conn.user.clone(),
            passwd: conn.password.clone(),
            host: conn.host.clone(),
            port: conn.port,
            db_name: conn.database.clone(),
            options: conn.options.clone(),
        }
    }
}
