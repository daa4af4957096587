//! Target projectors.
//!
//! A [`Projector`] maps a [`NormalizedConnection`] into the record shape of
//! one target configuration format. Each projector declares which schemes it
//! can represent; entries it does not support are dropped by the conversion
//! driver without error.
//!
//! - [`SqlsProjector`] — sqls YAML config, every dialect in the table.
//! - [`VscodeProjector`] — VS Code mssql profiles, `sqlserver` only.

mod sqls;
mod vscode;

pub use sqls::SqlsProjector;
pub use vscode::{ProfilePolicy, VscodeProjector};

use crate::types::NormalizedConnection;

/// Maps normalized connections into one target schema.
pub trait Projector {
    /// Record type emitted for each supported entry.
    type Record;

    /// Returns `true` if this target can represent connections of `scheme`.
    fn supports(&self, scheme: &str) -> bool;

    /// Builds the target record. `name` is the entry's label in the source
    /// list.
    fn project(&self, conn: &NormalizedConnection, name: &str) -> Self::Record;

    /// Projects `conn` if its scheme is supported, otherwise returns `None`.
    fn try_project(&self, conn: &NormalizedConnection, name: &str) -> Option<Self::Record> {
        if self.supports(&conn.scheme) {
            Some(self.project(conn, name))
        } else {
            None
        }
    }
}
