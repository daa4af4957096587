//! Reading source lists and rendering target documents.
//!
//! The source list is JSON; sqls configs are rendered as YAML and VS Code
//! profiles as JSON with two-space indentation.

use std::io::Read;

use crate::convert::{dadbod_to_sqls, dadbod_to_vscode};
use crate::error::Result;
use crate::types::{SourceConnection, SqlsConfig, VscodeProfile};

/// Reads a JSON array of `{"name", "url"}` objects.
///
/// # Errors
///
/// Returns [`Io`](crate::Error::Io) if `reader` fails or yields invalid
/// UTF-8, or [`Json`](crate::Error::Json) if the input is not a valid list.
pub fn read_source_connections(mut reader: impl Read) -> Result<Vec<SourceConnection>> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let entries = serde_json::from_str(&raw)?;
    Ok(entries)
}

/// Renders an sqls configuration as YAML.
pub fn render_sqls_config(config: &SqlsConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Renders VS Code profiles as a pretty-printed JSON array.
pub fn render_vscode_profiles(profiles: &[VscodeProfile]) -> Result<String> {
    Ok(serde_json::to_string_pretty(profiles)?)
}

/// Reads a dadbod list from `reader` and returns the sqls YAML document.
///
/// # Errors
///
/// Fails on undecodable input or on the first entry that does not parse.
pub fn convert_dadbod_to_sqls(reader: impl Read) -> Result<String> {
    let entries = read_source_connections(reader)?;
    let config = dadbod_to_sqls(&entries)?;
    render_sqls_config(&config)
}

/// Reads a dadbod list from `reader` and returns the VS Code profile JSON.
///
/// # Errors
///
/// Fails on undecodable input or on the first entry that does not parse.
pub fn convert_dadbod_to_vscode(reader: impl Read) -> Result<String> {
    let entries = read_source_connections(reader)?;
    let profiles = dadbod_to_vscode(&entries)?;
    render_vscode_profiles(&profiles)
}
