//! Batch conversion of a source connection list into target records.

use tracing::{debug, info};

use crate::dialect::Dialect;
use crate::error::{ConversionError, ParseError};
use crate::parse::parse_connection_string;
use crate::target::{Projector, SqlsProjector, VscodeProjector};
use crate::types::{NormalizedConnection, SourceConnection, SqlsConfig, VscodeProfile};

/// Converts every entry with `projector`, preserving input order.
///
/// Entries whose scheme the projector does not support are left out. The
/// first entry that fails to parse aborts the whole batch; no partial output
/// is returned. A scheme outside the dialect table fails even when the URL
/// carries an explicit port.
///
/// # Errors
///
/// Returns a [`ConversionError`] naming the failing entry.
///
/// # Examples
///
/// ```
/// use dbconv_core::{SourceConnection, VscodeProjector, convert_all};
///
/// let entries = vec![
///     SourceConnection::new("pg", "postgresql://u:p@localhost/mydb"),
///     SourceConnection::new("mssql", "sqlserver://sa:pw@srv/app"),
/// ];
/// let profiles = convert_all(&entries, &VscodeProjector::default()).unwrap();
/// assert_eq!(profiles.len(), 1);
/// assert_eq!(profiles[0].profile_name, "mssql");
/// ```
pub fn convert_all<P: Projector>(
    entries: &[SourceConnection],
    projector: &P,
) -> Result<Vec<P::Record>, ConversionError> {
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let conn = parse_known_dialect(&entry.url).map_err(|cause| ConversionError {
            index,
            name: entry.name.clone(),
            cause,
        })?;

        match projector.try_project(&conn, &entry.name) {
            Some(record) => records.push(record),
            None => debug!(
                name = %entry.name,
                scheme = %conn.scheme,
                "skipping entry unsupported by target"
            ),
        }
    }

    info!(
        entries = entries.len(),
        records = records.len(),
        "converted connection list"
    );
    Ok(records)
}

fn parse_known_dialect(url: &str) -> Result<NormalizedConnection, ParseError> {
    let conn = parse_connection_string(url)?;
    if Dialect::from_scheme(&conn.scheme).is_none() {
        return Err(ParseError::UnsupportedDialect(conn.scheme));
    }
    Ok(conn)
}

/// Builds an sqls configuration from a dadbod connection list.
pub fn dadbod_to_sqls(entries: &[SourceConnection]) -> Result<SqlsConfig, ConversionError> {
    convert_all(entries, &SqlsProjector).map(SqlsConfig::new)
}

/// Builds VS Code mssql profiles from a dadbod connection list.
pub fn dadbod_to_vscode(
    entries: &[SourceConnection],
) -> Result<Vec<VscodeProfile>, ConversionError> {
    convert_all(entries, &VscodeProjector::default())
}
