use std::path::Path;

use fmcg_core::Catalog;

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspaceResult};

/// Load a catalog from a TOML file, or the built-in bakery catalog when no
/// path is given.
pub fn load_catalog(path: Option<&Path>) -> WorkspaceResult<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::bakery());
    };
    let content = std::fs::read_to_string(path).map_err(WorkspaceError::read(path))?;
    toml::from_str(&content).map_err(|source| WorkspaceError::TomlDecode {
        path: path.display().to_string(),
        source,
    })
}

pub fn catalog_to_toml(catalog: &Catalog) -> WorkspaceResult<String> {
    Ok(toml::to_string_pretty(catalog)?)
}

/// Write a catalog as TOML; the written file loads back with [`load_catalog`].
pub fn export_catalog(path: &Path, catalog: &Catalog) -> WorkspaceResult<()> {
    let encoded = catalog_to_toml(catalog)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
